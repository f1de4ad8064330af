// Application state
// Immutable after startup: upstream clients and nothing else

use crate::config::Config;
use crate::decoder::VpicClient;
use crate::error::AppError;
use crate::orchestrator::{ScheduleGenerator, VehicleDecoder};
use crate::schedule::AnthropicClient;
use std::sync::Arc;

/// Shared state handed to every request handler
///
/// Holds no per-request data, so concurrent lookups never observe each other.
#[derive(Clone)]
pub struct AppState {
    /// VIN decode service
    pub decoder: Arc<dyn VehicleDecoder>,
    /// Schedule generation service
    pub generator: Arc<dyn ScheduleGenerator>,
}

impl AppState {
    /// Wire up state from explicit collaborators (used by tests with fakes)
    pub fn new(decoder: Arc<dyn VehicleDecoder>, generator: Arc<dyn ScheduleGenerator>) -> Self {
        Self { decoder, generator }
    }

    /// Build the production clients from configuration
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let decoder = VpicClient::new(&config.decoder)?;
        let generator = AnthropicClient::new(config.anthropic.clone())?;
        Ok(Self::new(Arc::new(decoder), Arc::new(generator)))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
