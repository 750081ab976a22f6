//! Anthropic Claude LLM provider implementation.
//!
//! [`AnthropicProvider`] implements the
//! [`LlmProvider`](sitewright_core::llm::LlmProvider) trait against the
//! Anthropic Messages API. Non-streaming only: artifact generation works
//! on whole responses.

pub mod client;
pub mod types;

pub use client::AnthropicProvider;
