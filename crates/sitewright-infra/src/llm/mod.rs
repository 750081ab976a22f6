//! LLM provider implementations.
//!
//! Concrete implementations of the [`LlmProvider`] trait defined in
//! `sitewright-core`. Anthropic Claude is the only backend; all three
//! artifact agents share one provider instance.
//!
//! [`LlmProvider`]: sitewright_core::llm::LlmProvider

pub mod anthropic;

use secrecy::SecretString;

use sitewright_core::llm::BoxLlmProvider;

use self::anthropic::AnthropicProvider;

/// Build the default provider for a resolved API key and model.
pub fn create_provider(api_key: SecretString, model: &str) -> BoxLlmProvider {
    BoxLlmProvider::new(AnthropicProvider::new(api_key, model.to_string()))
}
