//! Anthropic API client
//!
//! Direct HTTP client for the Anthropic Messages API. Used to turn a decoded
//! vehicle into a generated maintenance schedule.

use crate::config::AnthropicConfig;
use crate::decoder::VehicleAttributes;
use crate::error::AppError;
use crate::orchestrator::ScheduleGenerator;
use crate::schedule::anthropic_types::{
    ErrorResponse, MessagesRequest, MessagesResponse, RequestMessage,
};
use crate::schedule::model::MaintenanceItem;
use crate::schedule::parse::parse_schedule;
use crate::schedule::prompt::build_schedule_prompt;
use anyhow::{anyhow, Context};
use async_trait::async_trait;

/// Messages API version header value
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for the Anthropic Messages API
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: reqwest::Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    /// Build a client with its own connection pool and the configured timeout
    pub fn new(config: AnthropicConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to build Anthropic HTTP client")?;
        Ok(Self::with_client(client, config))
    }

    /// Use an existing `reqwest::Client` (shares its connection pool)
    pub fn with_client(client: reqwest::Client, config: AnthropicConfig) -> Self {
        Self { client, config }
    }

    /// Send a single user message and return the text of the first content block
    ///
    /// # Errors
    /// * `AppError::Upstream` if the API key is empty, the HTTP request fails,
    ///   the API returns an error status, the body cannot be parsed, or the
    ///   first content block carries no text.
    pub async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        if !self.config.has_api_key() {
            return Err(anyhow!("Anthropic API key is empty").into());
        }

        let url = format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'));
        let request_body = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            messages: vec![RequestMessage::user(prompt)],
        };

        tracing::debug!(
            url = %url,
            model = %self.config.model,
            max_tokens = self.config.max_tokens,
            prompt_len = prompt.len(),
            "Calling Anthropic Messages API"
        );

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request_body)
            .send()
            .await
            .context("Failed to send HTTP request to Anthropic API")?;

        let status = response.status();
        let response_body = response
            .text()
            .await
            .context("Failed to read response body from Anthropic API")?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorResponse>(&response_body)
                .map(|e| format!("{}: {}", e.error.error_type, e.error.message))
                .unwrap_or_else(|_| response_body.clone());

            tracing::error!(
                status_code = status.as_u16(),
                error_body = %response_body,
                "Anthropic API returned error status"
            );

            return Err(anyhow!(
                "Anthropic API returned error status {}: {}",
                status.as_u16(),
                detail
            )
            .into());
        }

        let parsed: MessagesResponse = serde_json::from_str(&response_body)
            .context("Failed to parse JSON response from Anthropic API")?;

        let block = parsed
            .content
            .first()
            .ok_or_else(|| anyhow!("Anthropic API response contains no content blocks"))?;

        let text = block
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "Anthropic API first content block ({}) has no text",
                    block.block_type
                )
            })?;

        if parsed.stop_reason.as_deref() == Some("max_tokens") {
            tracing::warn!(
                max_tokens = self.config.max_tokens,
                "Anthropic completion hit the token limit; schedule JSON may be truncated"
            );
        }

        tracing::debug!(
            response_len = text.len(),
            "Successfully received response from Anthropic API"
        );

        Ok(text.to_string())
    }
}

#[async_trait]
impl ScheduleGenerator for AnthropicClient {
    async fn generate(&self, vehicle: &VehicleAttributes) -> Result<Vec<MaintenanceItem>, AppError> {
        let prompt = build_schedule_prompt(vehicle);
        let completion = self.complete(&prompt).await?;
        let schedule = parse_schedule(&completion)?;

        tracing::info!(
            vehicle = %vehicle.describe(),
            items = schedule.len(),
            "Generated maintenance schedule"
        );

        Ok(schedule)
    }
}
