//! Response extraction: recover a structured value from raw model output.
//!
//! Model responses wrap the artifact in prose, markdown fences, or both.
//! Two modes exist: JSON extraction (first `{` to last `}`, parsed) and
//! code extraction (first fenced block, or the whole trimmed input when
//! no fence is present). JSON extraction can fail; callers substitute the
//! type-appropriate default document instead of propagating the error.

use serde_json::Value;

use sitewright_types::error::ExtractError;

/// Extract and parse the JSON object embedded in `text`.
///
/// Slices from the first `{` to the last `}`. Fails when either brace is
/// missing, the first does not precede the last, the slice is not valid
/// JSON, or the parsed value is not an object.
pub fn extract_json(text: &str) -> Result<Value, ExtractError> {
    let start = text.find('{').ok_or(ExtractError::NoJsonObject)?;
    let end = text.rfind('}').ok_or(ExtractError::NoJsonObject)?;
    if end < start {
        return Err(ExtractError::NoJsonObject);
    }

    let slice = &text[start..=end];
    let value: Value =
        serde_json::from_str(slice).map_err(|e| ExtractError::Parse(e.to_string()))?;

    if !value.is_object() {
        return Err(ExtractError::NotAnObject);
    }
    Ok(value)
}

/// Extract the body of the first fenced code block in `text`.
///
/// The opening fence may carry a language tag (```` ```tsx ````); the tag
/// line is stripped. An unterminated fence yields everything after the
/// opening fence line. With no fence at all, the whole trimmed input is
/// the code body. Never fails.
pub fn extract_code(text: &str) -> String {
    let Some(open) = text.find("```") else {
        return text.trim().to_string();
    };

    let rest = &text[open + 3..];
    // Body starts after the opening fence line (language tag included).
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };

    match body.find("```") {
        Some(close) => body[..close].trim().to_string(),
        None => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_json_plain_object() {
        let value = extract_json(r#"{"Home": []}"#).unwrap();
        assert_eq!(value, json!({"Home": []}));
    }

    #[test]
    fn test_extract_json_ignores_surrounding_prose() {
        let text = r#"Here is your sitemap:

{"Home": [{"type": "hero", "description": "Welcome"}]}

Let me know if you'd like changes!"#;
        let value = extract_json(text).unwrap();
        assert_eq!(value["Home"][0]["type"], "hero");
    }

    #[test]
    fn test_extract_json_equals_direct_parse() {
        let inner = r##"{"colors": {"primary": "#112233"}, "ui_style": "modern"}"##;
        let wrapped = format!("Sure thing.\n{inner}\nHope that helps.");
        let extracted = extract_json(&wrapped).unwrap();
        let direct: Value = serde_json::from_str(inner).unwrap();
        assert_eq!(extracted, direct);
    }

    #[test]
    fn test_extract_json_no_braces() {
        assert!(matches!(
            extract_json("no json here at all"),
            Err(ExtractError::NoJsonObject)
        ));
    }

    #[test]
    fn test_extract_json_empty_input() {
        assert!(matches!(extract_json(""), Err(ExtractError::NoJsonObject)));
    }

    #[test]
    fn test_extract_json_reversed_braces() {
        assert!(matches!(
            extract_json("} backwards {"),
            Err(ExtractError::NoJsonObject)
        ));
    }

    #[test]
    fn test_extract_json_invalid_slice() {
        assert!(matches!(
            extract_json("{not valid json}"),
            Err(ExtractError::Parse(_))
        ));
    }

    #[test]
    fn test_extract_json_rejects_non_object_top_level() {
        // Braces inside a string literal make the slice parse to a string.
        // Contrived, but the policy is: top-level must be an object.
        assert!(matches!(
            extract_json(r#""{}""#),
            Err(ExtractError::NotAnObject)
        ));
    }

    #[test]
    fn test_extract_code_tagged_fence() {
        let text = "Here you go:\n```tsx\nexport default function Hero() {}\n```\nDone.";
        assert_eq!(extract_code(text), "export default function Hero() {}");
    }

    #[test]
    fn test_extract_code_untagged_fence() {
        let text = "```\nconst x = 1;\n```";
        assert_eq!(extract_code(text), "const x = 1;");
    }

    #[test]
    fn test_extract_code_no_fence_returns_trimmed_input() {
        let text = "  const x = 1;\n  ";
        assert_eq!(extract_code(text), "const x = 1;");
    }

    #[test]
    fn test_extract_code_unterminated_fence() {
        let text = "```tsx\nconst x = 1;\nconst y = 2;";
        assert_eq!(extract_code(text), "const x = 1;\nconst y = 2;");
    }

    #[test]
    fn test_extract_code_empty_input() {
        assert_eq!(extract_code(""), "");
    }

    #[test]
    fn test_extract_code_keeps_interior_whitespace() {
        let text = "```tsx\nline1\n\n  indented\n```";
        assert_eq!(extract_code(text), "line1\n\n  indented");
    }
}
