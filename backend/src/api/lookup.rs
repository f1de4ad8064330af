//! VIN lookup handler
//!
//! `GET /api/lookup?vin=<VIN>` decodes the VIN and returns the vehicle with a
//! generated maintenance schedule.
//!
//! # Responses
//! * 200 - `{"vehicle": {...}, "schedule": [...]}`
//! * 400 - VIN missing or not 17 characters
//! * 404 - vPIC returned no make/year for the VIN
//! * 500 - any upstream failure

use crate::error::AppError;
use crate::orchestrator::{run_lookup, ScheduleResponse};
use crate::state::AppState;
use crate::vin::Vin;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

/// Query string of a lookup request
#[derive(Deserialize, Debug)]
pub struct LookupQuery {
    /// VIN to look up
    pub vin: Option<String>,
}

/// GET /api/lookup
///
/// A query string that fails to deserialize is treated like a missing VIN so
/// the caller still gets the JSON 400 body.
pub async fn lookup(
    State(state): State<AppState>,
    query: Option<Query<LookupQuery>>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let raw_vin = query.as_ref().and_then(|Query(q)| q.vin.as_deref());
    let vin = Vin::parse(raw_vin)?;

    tracing::info!(vin = %vin, "VIN lookup requested");

    let response = run_lookup(state.decoder.as_ref(), state.generator.as_ref(), &vin).await?;
    Ok(Json(response))
}
