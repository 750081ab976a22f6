//! API credential resolution.
//!
//! The Anthropic key comes from the `ANTHROPIC_API_KEY` environment
//! variable (a `.env` file is loaded at process start before this runs).
//! A missing key is fatal: unlike generation failures there is no useful
//! fallback, so the error propagates to the command handler.

use secrecy::SecretString;

use sitewright_types::error::CredentialError;

/// Environment variable holding the Anthropic API key.
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Resolve the Anthropic API key from the process environment.
pub fn resolve_api_key() -> Result<SecretString, CredentialError> {
    resolve_api_key_with(|var| std::env::var(var).ok())
}

/// Resolve the key through a caller-supplied lookup. The lookup returning
/// `None` or an empty/whitespace value counts as missing.
pub fn resolve_api_key_with(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<SecretString, CredentialError> {
    match lookup(API_KEY_VAR) {
        Some(value) if !value.trim().is_empty() => Ok(SecretString::from(value)),
        _ => Err(CredentialError::Missing(API_KEY_VAR)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_resolve_present_key() {
        let key = resolve_api_key_with(|var| {
            assert_eq!(var, "ANTHROPIC_API_KEY");
            Some("sk-ant-test".to_string())
        })
        .unwrap();
        assert_eq!(key.expose_secret(), "sk-ant-test");
    }

    #[test]
    fn test_resolve_missing_key() {
        let err = resolve_api_key_with(|_| None).unwrap_err();
        assert!(matches!(err, CredentialError::Missing("ANTHROPIC_API_KEY")));
    }

    #[test]
    fn test_resolve_blank_key_is_missing() {
        let err = resolve_api_key_with(|_| Some("   ".to_string())).unwrap_err();
        assert!(matches!(err, CredentialError::Missing(_)));
    }
}
