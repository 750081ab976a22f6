//! Sitemap agent: page/section structure for the generated website.

use serde_json::Value;

use sitewright_types::brief::SiteBrief;
use sitewright_types::config::SiteConfig;
use sitewright_types::document::{SITEMAP_FILE, SitemapDoc};
use sitewright_types::error::DocumentError;
use sitewright_types::llm::{CompletionRequest, Message};

use crate::extract::extract_json;
use crate::llm::BoxLlmProvider;
use crate::merge::deep_merge;
use crate::storage::DocumentStore;

use super::prompt;

/// Generates and edits `sitemap.json`.
pub struct SitemapAgent<S: DocumentStore> {
    store: S,
    config: SiteConfig,
}

impl<S: DocumentStore> SitemapAgent<S> {
    pub fn new(store: S, config: SiteConfig) -> Self {
        Self { store, config }
    }

    /// Generate a sitemap from the business brief.
    ///
    /// A failed call or unparseable response falls back to the default
    /// sitemap; a failed save keeps the in-memory document. This method
    /// therefore always produces a sitemap.
    #[tracing::instrument(
        name = "generate_sitemap",
        skip(self, provider, brief),
        fields(model = %self.config.model, business = %brief.name)
    )]
    pub async fn generate(&self, provider: &BoxLlmProvider, brief: &SiteBrief) -> SitemapDoc {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![Message::user(prompt::sitemap_prompt(brief))],
            system: Some(prompt::SITEMAP_SYSTEM_PROMPT.to_string()),
            max_tokens: self.config.max_tokens,
            temperature: Some(self.config.temperature),
        };

        let doc = match provider.complete(&request).await {
            Ok(response) => match extract_json(&response.content) {
                Ok(value) => SitemapDoc::new(value),
                Err(err) => {
                    tracing::warn!(error = %err, "could not extract sitemap from response, using default");
                    SitemapDoc::fallback(&brief.name)
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "sitemap generation call failed, using default");
                SitemapDoc::fallback(&brief.name)
            }
        };

        self.persist(&doc).await;
        doc
    }

    /// Apply a partial-update document onto the persisted sitemap.
    ///
    /// A missing sitemap is fatal; a failed save after the merge keeps
    /// the in-memory result.
    pub async fn edit(&self, edits: Value) -> Result<SitemapDoc, DocumentError> {
        let mut value = self.store.load(SITEMAP_FILE).await?;
        deep_merge(&mut value, edits);
        let doc = SitemapDoc::new(value);
        self.persist(&doc).await;
        Ok(doc)
    }

    async fn persist(&self, doc: &SitemapDoc) {
        if let Err(err) = self.store.save(SITEMAP_FILE, doc.as_value()).await {
            tracing::warn!(error = %err, "failed to save {SITEMAP_FILE}, continuing with in-memory document");
        }
    }
}
