//! Template library port.
//!
//! A section whose kind or description matches a pre-built template file
//! reuses that file's content verbatim instead of invoking a generation
//! call. This is a static lookup by normalized name, not a cache.

/// Trait for resolving a section against a library of pre-built templates.
///
/// Implementations live in sitewright-infra (directory scan).
pub trait TemplateLibrary: Send + Sync {
    /// Return the template body for a section, or `None` when no template
    /// matches.
    ///
    /// A section matches a template when the normalized section kind
    /// equals the template's file stem, or the stem occurs in the
    /// lowercased description.
    fn resolve(
        &self,
        kind_slug: &str,
        description: &str,
    ) -> impl std::future::Future<Output = Option<String>> + Send;
}

/// A template library with no templates; every lookup misses.
pub struct NoTemplates;

impl TemplateLibrary for NoTemplates {
    async fn resolve(&self, _kind_slug: &str, _description: &str) -> Option<String> {
        None
    }
}

/// The shared matching rule: a template stem matches a section when it
/// equals the normalized kind or occurs in the lowercased description.
pub fn template_matches(stem: &str, kind_slug: &str, description: &str) -> bool {
    kind_slug == stem || description.to_lowercase().contains(stem)
}
