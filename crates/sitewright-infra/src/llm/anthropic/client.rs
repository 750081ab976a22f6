//! AnthropicProvider -- concrete [`LlmProvider`] implementation for
//! Anthropic Claude.
//!
//! Sends non-streaming requests to the Anthropic Messages API
//! (`/v1/messages`) with the required authentication headers.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use sitewright_core::llm::LlmProvider;
use sitewright_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities, StopReason, Usage,
};

use super::types::{
    AnthropicContentBlock, AnthropicMessage, AnthropicNonStreamResponse, AnthropicRequest,
};

/// Anthropic Claude LLM provider.
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing HTTP request headers.
pub struct AnthropicProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    capabilities: ProviderCapabilities,
}

impl AnthropicProvider {
    /// The Anthropic API version header value.
    const API_VERSION: &'static str = "2023-06-01";

    /// Create a new Anthropic provider for the given model.
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(300)) // 5 min timeout for long generations
            .build()
            .expect("failed to create reqwest client");

        let capabilities = Self::capabilities_for_model(&model);

        Self {
            client,
            api_key,
            base_url: "https://api.anthropic.com".to_string(),
            model,
            capabilities,
        }
    }

    /// The default model for this provider.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Determine capabilities based on model name.
    fn capabilities_for_model(model: &str) -> ProviderCapabilities {
        if model.contains("opus") {
            ProviderCapabilities {
                vision: true,
                max_context_tokens: 200_000,
                max_output_tokens: 32_000,
            }
        } else if model.contains("sonnet") || model.contains("haiku") {
            ProviderCapabilities {
                vision: true,
                max_context_tokens: 200_000,
                max_output_tokens: 8_192,
            }
        } else {
            // Conservative defaults for unknown models
            ProviderCapabilities {
                vision: false,
                max_context_tokens: 200_000,
                max_output_tokens: 4_096,
            }
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert a generic [`CompletionRequest`] into an [`AnthropicRequest`].
    fn to_anthropic_request(&self, request: &CompletionRequest) -> AnthropicRequest {
        let messages = request
            .messages
            .iter()
            .map(|m| AnthropicMessage {
                role: m.role.to_string(),
                content: m.content.clone(),
            })
            .collect();

        AnthropicRequest {
            model: request.model.clone(),
            max_tokens: request.max_tokens,
            messages,
            system: request.system.clone(),
            temperature: request.temperature,
        }
    }
}

// AnthropicProvider intentionally does NOT derive Debug so the key cannot
// leak through formatting, on top of the SecretString wrapper.

impl LlmProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn capabilities(&self) -> &ProviderCapabilities {
        &self.capabilities
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_anthropic_request(request);
        let url = self.url("/v1/messages");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", Self::API_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited {
                    retry_after_ms: None,
                },
                529 => LlmError::Overloaded(error_body),
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let anthropic_resp: AnthropicNonStreamResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let content = anthropic_resp
            .content
            .iter()
            .filter_map(|block| match block {
                AnthropicContentBlock::Text { text } => Some(text.as_str()),
                AnthropicContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("");

        let stop_reason = match anthropic_resp.stop_reason.as_deref() {
            Some("max_tokens") => StopReason::MaxTokens,
            Some("stop_sequence") => StopReason::StopSequence,
            _ => StopReason::EndTurn,
        };

        Ok(CompletionResponse {
            id: anthropic_resp.id,
            content,
            model: anthropic_resp.model,
            stop_reason,
            usage: Usage {
                input_tokens: anthropic_resp.usage.input_tokens,
                output_tokens: anthropic_resp.usage.output_tokens,
            },
        })
    }
}
