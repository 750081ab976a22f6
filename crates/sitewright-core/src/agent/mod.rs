//! Agent services.
//!
//! Each agent runs one strictly linear pipeline per invocation:
//! build prompt, call the provider, extract, optionally merge, persist.
//! There is no retry loop, no concurrency, no caching.

pub mod brand;
pub mod prompt;
pub mod site;
pub mod sitemap;

#[cfg(test)]
pub(crate) mod testutil;

pub use brand::BrandGuideAgent;
pub use site::{BuildSummary, SiteAgent};
pub use sitemap::SitemapAgent;
