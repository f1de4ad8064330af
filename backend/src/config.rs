//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. Built once at process entry and handed to
//! [`crate::state::AppState`]; nothing reads the environment after startup.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default vPIC endpoint used to decode VINs
pub const DEFAULT_VPIC_BASE_URL: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";

/// Default Anthropic API endpoint
pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// Model used to generate maintenance schedules
pub const SCHEDULE_MODEL: &str = "claude-haiku-4-5-20251001";

/// Output token budget for a generated schedule
pub const SCHEDULE_MAX_TOKENS: u32 = 1024;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// VIN decode service configuration
    pub decoder: DecoderConfig,
    /// Generative-text service configuration
    pub anthropic: AnthropicConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
    /// Directory served for every path that is not an API route
    pub public_dir: PathBuf,
}

/// VIN decode service (vPIC) configuration
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Base URL; `/decodevin/{vin}` is appended to it
    pub base_url: String,
    /// Timeout applied to each decode request (in seconds)
    pub timeout_secs: u64,
}

/// Anthropic Messages API configuration
#[derive(Clone)]
pub struct AnthropicConfig {
    /// API key sent as `x-api-key`; empty when not configured
    pub api_key: String,
    /// Base URL; `/v1/messages` is appended to it
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Maximum output tokens
    pub max_tokens: u32,
    /// Timeout applied to each completion request (in seconds)
    pub timeout_secs: u64,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_VPIC_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_ANTHROPIC_BASE_URL.to_string(),
            model: SCHEDULE_MODEL.to_string(),
            max_tokens: SCHEDULE_MAX_TOKENS,
            timeout_secs: 30,
        }
    }
}

// Keeps the key out of `info!("{:?}", config)`.
impl std::fmt::Debug for AnthropicConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicConfig")
            .field("api_key", &if self.has_api_key() { "<set>" } else { "<unset>" })
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl DecoderConfig {
    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AnthropicConfig {
    /// Whether an API key was supplied
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                public_dir: env::var("PUBLIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("public")),
            },
            decoder: DecoderConfig {
                base_url: env::var("VPIC_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_VPIC_BASE_URL.to_string()),
                timeout_secs: env::var("VPIC_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(30),
            },
            anthropic: AnthropicConfig {
                api_key: env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
                base_url: env::var("ANTHROPIC_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_ANTHROPIC_BASE_URL.to_string()),
                timeout_secs: env::var("ANTHROPIC_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(30),
                ..AnthropicConfig::default()
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
