//! Agent services and port trait definitions for Sitewright.
//!
//! This crate holds the response-extraction and merge logic shared by all
//! three agents, the renderers for the generated source tree, and the
//! "ports" (storage, template, provider traits) that the infrastructure
//! layer implements. It depends only on `sitewright-types` -- never on
//! `sitewright-infra` or any HTTP/filesystem crate.

pub mod agent;
pub mod extract;
pub mod llm;
pub mod merge;
pub mod render;
pub mod storage;
pub mod template;
