//! LlmProvider trait definition.
//!
//! This is the abstraction every text-generation backend implements.
//! Uses RPITIT (native async fn in traits, Rust 2024 edition) for
//! `complete`. All generation is non-streaming: one request in flight
//! at a time, full response text back.
//!
//! Implementations live in sitewright-infra (e.g., `AnthropicProvider`).

use sitewright_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities,
};

/// Trait for LLM provider backends.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "anthropic").
    fn name(&self) -> &str;

    /// What this provider supports (vision, context limits).
    fn capabilities(&self) -> &ProviderCapabilities;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
