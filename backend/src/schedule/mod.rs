//! Maintenance schedule generation
//!
//! Builds the prompt for a decoded vehicle, sends it to the Anthropic
//! Messages API and parses the JSON schedule out of the completion.

pub mod anthropic_types;
pub mod api_client;
pub mod model;
pub mod parse;
pub mod prompt;

pub use api_client::AnthropicClient;
pub use model::{MaintenanceItem, Priority};
