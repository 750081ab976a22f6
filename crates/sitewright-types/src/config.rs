//! Configuration types for Sitewright.
//!
//! Loaded from `sitewright.toml` in the workspace directory (with a
//! platform config-dir fallback). Every field has a default so a missing
//! or partial file still yields a working configuration.

use serde::{Deserialize, Serialize};

/// Global configuration for all agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Model identifier for all generation calls.
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum output tokens per generation call.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature for sitemap and brand guide calls.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Directory for the generated website source tree, relative to the
    /// workspace directory.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Directory holding pre-built section templates, relative to the
    /// workspace directory.
    #[serde(default = "default_template_dir")]
    pub template_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            output_dir: default_output_dir(),
            template_dir: default_template_dir(),
        }
    }
}

fn default_model() -> String {
    "claude-3-7-sonnet-20250219".to_string()
}

fn default_max_tokens() -> u32 {
    4000
}

fn default_temperature() -> f64 {
    0.7
}

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_template_dir() -> String {
    "templates".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.model, "claude-3-7-sonnet-20250219");
        assert_eq!(config.max_tokens, 4000);
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.output_dir, "output");
        assert_eq!(config.template_dir, "templates");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: SiteConfig = toml::from_str("model = \"claude-3-opus-20240229\"").unwrap();
        assert_eq!(config.model, "claude-3-opus-20240229");
        assert_eq!(config.max_tokens, 4000);
        assert_eq!(config.template_dir, "templates");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.output_dir, "output");
    }
}
