//! Shared domain types for Sitewright.
//!
//! This crate contains the core domain types used across the Sitewright
//! toolchain: the three website artifacts (sitemap, brand guide, generated
//! source files), the business brief that drives generation, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod brief;
pub mod config;
pub mod document;
pub mod error;
pub mod llm;
