//! The business brief: user-supplied inputs that drive all three agents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Business inputs for a generation run.
///
/// Constructed either from CLI arguments (sitemap/brand path) or from an
/// input-data JSON file (code-generation path).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteBrief {
    pub name: String,
    pub description: String,
    /// Base64-encoded logo image payload, optionally with a data-URL prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Ordered color-role preferences (role, hex), e.g. `("primary", "#112233")`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub color_preferences: Vec<(String, String)>,
    /// Extra layout requirements appended to the sitemap prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_prompt: Option<String>,
}

impl SiteBrief {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Build a brief from an input-data JSON document (`{"name": ...,
    /// "description": ..., "logo": ...}`). Missing keys resolve to empty.
    pub fn from_input_value(value: &Value) -> Self {
        Self {
            name: value
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            description: value
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            logo: value
                .get("logo")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            color_preferences: Vec::new(),
            layout_prompt: None,
        }
    }
}

/// Parse a `role:#hex,role:#hex` preference string into ordered pairs.
///
/// Malformed pairs (no colon, empty role or value) are skipped so a typo in
/// one pair never discards the rest.
pub fn parse_color_preferences(input: &str) -> Vec<(String, String)> {
    input
        .split(',')
        .filter_map(|pair| {
            let (role, hex) = pair.split_once(':')?;
            let (role, hex) = (role.trim(), hex.trim());
            if role.is_empty() || hex.is_empty() {
                return None;
            }
            Some((role.to_string(), hex.to_string()))
        })
        .collect()
}
