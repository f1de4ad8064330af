//! vPIC API client
//!
//! Direct HTTP client for the NHTSA vPIC `decodevin` endpoint.

use crate::config::DecoderConfig;
use crate::decoder::fields::DecodedFieldSet;
use crate::decoder::vehicle::VehicleAttributes;
use crate::error::AppError;
use crate::orchestrator::VehicleDecoder;
use crate::vin::Vin;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

/// Client for the vPIC VIN decode service
#[derive(Debug, Clone)]
pub struct VpicClient {
    client: reqwest::Client,
    base_url: String,
}

impl VpicClient {
    /// Build a client with its own connection pool and the configured timeout
    pub fn new(config: &DecoderConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to build vPIC HTTP client")?;
        Ok(Self::with_client(client, &config.base_url))
    }

    /// Use an existing `reqwest::Client` (shares its connection pool)
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// `{base}/decodevin/{vin}?format=json`
    ///
    /// The VIN is pushed as a single path segment so stray `/` or `?`
    /// characters are percent-encoded instead of reshaping the URL.
    pub fn decode_url(&self, vin: &Vin) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid vPIC base URL: {}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("vPIC base URL cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .extend(["decodevin", vin.as_str()]);
        url.query_pairs_mut().append_pair("format", "json");
        Ok(url)
    }

    /// Fetch the raw decode records for a VIN
    ///
    /// # Errors
    /// * `AppError::Upstream` if the request fails, the service returns a
    ///   non-success status, the body is not JSON, or `Results` is missing
    pub async fn fetch_fields(&self, vin: &Vin) -> Result<DecodedFieldSet, AppError> {
        let url = self.decode_url(vin)?;

        tracing::debug!(url = %url, vin = %vin, "Calling vPIC decodevin");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send HTTP request to vPIC")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());

            tracing::error!(
                status_code = status.as_u16(),
                error_body = %error_body,
                "vPIC returned error status"
            );

            return Err(anyhow!("vPIC returned error status {}", status.as_u16()).into());
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to parse JSON response from vPIC")?;

        let results = body
            .get("Results")
            .and_then(Value::as_array)
            .ok_or_else(|| anyhow!("vPIC response contains no Results array"))?;

        let fields = DecodedFieldSet::from_results(results);

        tracing::debug!(
            vin = %vin,
            records = results.len(),
            usable_records = fields.len(),
            "Received vPIC decode result"
        );

        Ok(fields)
    }
}

#[async_trait]
impl VehicleDecoder for VpicClient {
    async fn decode(&self, vin: &Vin) -> Result<VehicleAttributes, AppError> {
        let fields = self.fetch_fields(vin).await?;
        Ok(VehicleAttributes::from_fields(&fields))
    }
}
