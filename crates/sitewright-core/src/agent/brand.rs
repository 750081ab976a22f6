//! Brand guide agent: colors, typography, and component styling.

use serde_json::Value;

use sitewright_types::brief::SiteBrief;
use sitewright_types::config::SiteConfig;
use sitewright_types::document::{BRAND_GUIDE_FILE, StyleGuideDoc};
use sitewright_types::error::DocumentError;
use sitewright_types::llm::{CompletionRequest, Message};

use crate::extract::extract_json;
use crate::llm::BoxLlmProvider;
use crate::merge::deep_merge;
use crate::storage::DocumentStore;

use super::prompt;

/// Generates and edits `brand-guide.json`.
pub struct BrandGuideAgent<S: DocumentStore> {
    store: S,
    config: SiteConfig,
}

impl<S: DocumentStore> BrandGuideAgent<S> {
    pub fn new(store: S, config: SiteConfig) -> Self {
        Self { store, config }
    }

    /// Generate a brand guide from the business brief.
    ///
    /// User color preferences overwrite matching roles after extraction,
    /// whether the guide came from the model or from the fallback.
    /// Always produces a guide; failures degrade, never propagate.
    #[tracing::instrument(
        name = "generate_brand_guide",
        skip(self, provider, brief),
        fields(model = %self.config.model, business = %brief.name)
    )]
    pub async fn generate(&self, provider: &BoxLlmProvider, brief: &SiteBrief) -> StyleGuideDoc {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![Message::user(prompt::brand_prompt(brief))],
            system: Some(prompt::BRAND_SYSTEM_PROMPT.to_string()),
            max_tokens: self.config.max_tokens,
            temperature: Some(self.config.temperature),
        };

        let mut guide = match provider.complete(&request).await {
            Ok(response) => match extract_json(&response.content) {
                Ok(value) => StyleGuideDoc::new(value),
                Err(err) => {
                    tracing::warn!(error = %err, "could not extract brand guide from response, using default");
                    StyleGuideDoc::fallback()
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "brand guide generation call failed, using default");
                StyleGuideDoc::fallback()
            }
        };

        guide.apply_preferences(&brief.color_preferences);

        self.persist(&guide).await;
        guide
    }

    /// Apply a partial-update document onto the persisted brand guide.
    pub async fn edit(&self, edits: Value) -> Result<StyleGuideDoc, DocumentError> {
        let mut value = self.store.load(BRAND_GUIDE_FILE).await?;
        deep_merge(&mut value, edits);
        let doc = StyleGuideDoc::new(value);
        self.persist(&doc).await;
        Ok(doc)
    }

    async fn persist(&self, doc: &StyleGuideDoc) {
        if let Err(err) = self.store.save(BRAND_GUIDE_FILE, doc.as_value()).await {
            tracing::warn!(error = %err, "failed to save {BRAND_GUIDE_FILE}, continuing with in-memory document");
        }
    }
}
