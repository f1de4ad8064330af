//! Lookup orchestration
//!
//! Chains the two upstream calls behind a VIN lookup: decode the VIN, then
//! generate a schedule for the decoded vehicle. Each call sits behind a trait
//! so the pipeline can run against fakes in tests.

use crate::decoder::VehicleAttributes;
use crate::error::AppError;
use crate::schedule::MaintenanceItem;
use crate::vin::Vin;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Resolves a VIN to vehicle attributes
#[async_trait]
pub trait VehicleDecoder: Send + Sync {
    /// Decode `vin`; attributes may be empty when the service knows nothing
    async fn decode(&self, vin: &Vin) -> Result<VehicleAttributes, AppError>;
}

/// Produces a maintenance schedule for a decoded vehicle
#[async_trait]
pub trait ScheduleGenerator: Send + Sync {
    /// Generate the schedule for `vehicle`
    async fn generate(&self, vehicle: &VehicleAttributes)
        -> Result<Vec<MaintenanceItem>, AppError>;
}

/// Response body of a successful lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// Decoded vehicle
    pub vehicle: VehicleAttributes,
    /// Generated schedule, as returned by the generator
    pub schedule: Vec<MaintenanceItem>,
}

/// Run a full lookup for an already-validated VIN
///
/// # Errors
/// * `AppError::VinNotDecoded` if the decode has no usable make or year; the
///   generator is not called in that case
/// * `AppError::Upstream` if either upstream call fails
pub async fn run_lookup(
    decoder: &dyn VehicleDecoder,
    generator: &dyn ScheduleGenerator,
    vin: &Vin,
) -> Result<ScheduleResponse, AppError> {
    let vehicle = decoder.decode(vin).await?;

    if !vehicle.is_decoded() {
        tracing::info!(
            vin = %vin,
            make = %vehicle.make,
            year = %vehicle.year,
            "VIN decode returned no usable make/year"
        );
        return Err(AppError::VinNotDecoded(vin.to_string()));
    }

    tracing::debug!(vin = %vin, vehicle = %vehicle.describe(), "VIN decoded");

    let schedule = generator.generate(&vehicle).await?;

    Ok(ScheduleResponse { vehicle, schedule })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedDecoder(VehicleAttributes);

    #[async_trait]
    impl VehicleDecoder for FixedDecoder {
        async fn decode(&self, _vin: &Vin) -> Result<VehicleAttributes, AppError> {
            Ok(self.0.clone())
        }
    }

    struct FailingDecoder;

    #[async_trait]
    impl VehicleDecoder for FailingDecoder {
        async fn decode(&self, _vin: &Vin) -> Result<VehicleAttributes, AppError> {
            Err(anyhow!("connection reset").into())
        }
    }

    #[derive(Default)]
    struct CountingGenerator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ScheduleGenerator for CountingGenerator {
        async fn generate(
            &self,
            _vehicle: &VehicleAttributes,
        ) -> Result<Vec<MaintenanceItem>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![MaintenanceItem::from(json!({
                "id": "tire_rotation",
                "name": "Tire Rotation",
                "description": "Evens out tread wear.",
                "intervalMiles": 7500,
                "intervalMonths": 6,
                "priority": "recommended"
            }))])
        }
    }

    fn vin() -> Vin {
        Vin::parse(Some("1HGCV1F34LA012345")).unwrap()
    }

    fn accord() -> VehicleAttributes {
        VehicleAttributes {
            year: "2020".to_string(),
            make: "HONDA".to_string(),
            model: "Accord".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_run_lookup_success() {
        let generator = CountingGenerator::default();
        let response = run_lookup(&FixedDecoder(accord()), &generator, &vin())
            .await
            .unwrap();

        assert_eq!(response.vehicle, accord());
        assert_eq!(response.schedule.len(), 1);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_undecoded_vin_skips_generator() {
        let undecoded = [
            VehicleAttributes::default(),
            VehicleAttributes {
                make: "null".to_string(),
                ..accord()
            },
            VehicleAttributes {
                year: String::new(),
                ..accord()
            },
        ];

        for vehicle in undecoded {
            let generator = CountingGenerator::default();
            let result = run_lookup(&FixedDecoder(vehicle), &generator, &vin()).await;

            assert!(matches!(result, Err(AppError::VinNotDecoded(_))));
            assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_decoder_failure_is_upstream() {
        let generator = CountingGenerator::default();
        let result = run_lookup(&FailingDecoder, &generator, &vin()).await;

        assert!(matches!(result, Err(AppError::Upstream(_))));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }
}
