//! Anthropic Messages API wire types.
//!
//! Request/response structures for HTTP communication with the Anthropic
//! Messages API. These are provider-specific; the provider-agnostic
//! shapes live in sitewright-types.

use serde::{Deserialize, Serialize};

/// Request body for the Anthropic Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct AnthropicRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// A single message in an Anthropic conversation.
#[derive(Debug, Clone, Serialize)]
pub struct AnthropicMessage {
    pub role: String,
    pub content: String,
}

/// A content block in an Anthropic response.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum AnthropicContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    /// Any block type we do not consume (tool_use, thinking, ...).
    #[serde(other)]
    Other,
}

/// Token usage as reported by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Complete (non-streaming) Messages API response.
#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicNonStreamResponse {
    pub id: String,
    pub model: String,
    pub content: Vec<AnthropicContentBlock>,
    pub stop_reason: Option<String>,
    pub usage: AnthropicUsage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_skips_absent_options() {
        let req = AnthropicRequest {
            model: "claude-3-7-sonnet-20250219".to_string(),
            max_tokens: 4000,
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: "hi".to_string(),
            }],
            system: None,
            temperature: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("system").is_none());
        assert!(json.get("temperature").is_none());
        assert_eq!(json["max_tokens"], 4000);
    }

    #[test]
    fn test_response_parses_text_blocks() {
        let raw = r#"{
            "id": "msg_01",
            "model": "claude-3-7-sonnet-20250219",
            "content": [
                {"type": "text", "text": "{\"Home\": []}"},
                {"type": "tool_use", "id": "t1", "name": "x", "input": {}}
            ],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 12, "output_tokens": 34}
        }"#;
        let resp: AnthropicNonStreamResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.content.len(), 2);
        assert!(matches!(
            resp.content[0],
            AnthropicContentBlock::Text { .. }
        ));
        assert!(matches!(resp.content[1], AnthropicContentBlock::Other));
        assert_eq!(resp.usage.output_tokens, 34);
    }
}
