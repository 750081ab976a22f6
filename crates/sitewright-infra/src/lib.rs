//! Infrastructure implementations for Sitewright.
//!
//! Adapters for the ports defined in `sitewright-core`: the Anthropic
//! Messages API client, the workspace document store, the output-tree
//! writer, the template directory scan, plus config and credential
//! loading.

pub mod config;
pub mod credential;
pub mod llm;
pub mod output;
pub mod template;
pub mod workspace;
