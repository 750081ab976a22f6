//! Site agent: realizes the sitemap and brand guide as a Next.js source
//! tree.
//!
//! Sections are generated strictly sequentially, one provider request in
//! flight at a time. A section matching a pre-built template skips the
//! provider entirely; a section whose generation yields nothing usable is
//! replaced by the placeholder component.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use serde_json::{Map, Value, json};

use sitewright_types::brief::SiteBrief;
use sitewright_types::config::SiteConfig;
use sitewright_types::document::{
    ContentDoc, GeneratedFile, SectionDescriptor, SitemapDoc, StyleGuideDoc,
};
use sitewright_types::error::SiteBuildError;
use sitewright_types::llm::{CompletionRequest, Message};

use crate::extract::{extract_code, extract_json};
use crate::llm::BoxLlmProvider;
use crate::render::cms::{cms_page_tsx, cms_route_ts, layout_tsx};
use crate::render::css::globals_css;
use crate::render::naming::{component_name, slug};
use crate::render::page::{component_import, page_component, page_path};
use crate::render::placeholder::placeholder_component;
use crate::storage::SiteWriter;
use crate::template::TemplateLibrary;

use super::prompt;

const SECTION_TEMPERATURE: f64 = 0.2;
const CONTENT_TEMPERATURE: f64 = 0.5;
const CONTENT_MAX_TOKENS: u32 = 2000;

/// Counts reported after a build.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildSummary {
    pub pages: usize,
    pub components: usize,
    pub templates_reused: usize,
    pub placeholders: usize,
}

/// Builds the generated website source tree.
pub struct SiteAgent<T: TemplateLibrary, W: SiteWriter> {
    templates: T,
    writer: W,
    config: SiteConfig,
}

impl<T: TemplateLibrary, W: SiteWriter> SiteAgent<T, W> {
    pub fn new(templates: T, writer: W, config: SiteConfig) -> Self {
        Self {
            templates,
            writer,
            config,
        }
    }

    /// Generate the full source tree from the three input artifacts.
    #[tracing::instrument(
        name = "build_site",
        skip_all,
        fields(model = %self.config.model, business = %brief.name)
    )]
    pub async fn build(
        &self,
        provider: &BoxLlmProvider,
        brief: &SiteBrief,
        sitemap: &SitemapDoc,
        guide: &StyleGuideDoc,
    ) -> Result<BuildSummary, SiteBuildError> {
        let mut summary = BuildSummary::default();

        let logo_path = self.write_logo(brief).await;
        let content = self.generate_content(provider, brief).await;

        self.writer
            .write_file(&GeneratedFile::new("app/globals.css", globals_css(guide)))
            .await?;
        self.writer
            .write_file(&GeneratedFile::new("app/layout.tsx", layout_tsx()))
            .await?;

        let fallback;
        let sitemap = if sitemap.pages().is_empty() {
            tracing::warn!("sitemap has no pages, using default page set");
            fallback = SitemapDoc::fallback(&brief.name);
            &fallback
        } else {
            sitemap
        };

        for page in sitemap.pages() {
            self.build_page(provider, &page, sitemap, guide, &mut summary)
                .await?;
        }

        self.write_cms_artifacts(brief, guide, &content, logo_path.as_deref())
            .await?;

        if summary.pages == 0 && summary.components == 0 {
            return Err(SiteBuildError::NoFilesGenerated);
        }
        Ok(summary)
    }

    /// Generate one page and its section components.
    async fn build_page(
        &self,
        provider: &BoxLlmProvider,
        page: &str,
        sitemap: &SitemapDoc,
        guide: &StyleGuideDoc,
        summary: &mut BuildSummary,
    ) -> Result<(), SiteBuildError> {
        let mut sections = sitemap.sections(page);
        if sections.is_empty() {
            sections.push(SectionDescriptor {
                kind: page.to_lowercase(),
                description: format!("{page} section"),
            });
        }

        let mut imports = Vec::new();
        let mut jsx = Vec::new();

        for (index, section) in sections.iter().enumerate() {
            let name = component_name(page, &section.kind, index + 1);
            let description = if section.description.trim().is_empty() {
                format!("{page} section")
            } else {
                section.description.clone()
            };

            let mut from_template = false;
            let mut body = match self
                .templates
                .resolve(&slug(&section.kind), &description)
                .await
            {
                Some(template) => {
                    from_template = true;
                    template
                }
                None => self.generate_section(provider, &description, guide).await,
            };

            if body.trim().is_empty() {
                tracing::warn!(component = %name, "empty section body, using placeholder");
                body = placeholder_component(&name, page, &description);
                summary.placeholders += 1;
            } else if from_template {
                summary.templates_reused += 1;
            }

            self.writer
                .write_file(&GeneratedFile::new(
                    format!("app/components/{name}.tsx"),
                    body,
                ))
                .await?;
            summary.components += 1;

            imports.push(component_import(&name, page));
            jsx.push(format!("      <{name} />"));
        }

        self.writer
            .write_file(&GeneratedFile::new(
                page_path(page),
                page_component(page, guide, &imports, &jsx),
            ))
            .await?;
        summary.pages += 1;
        Ok(())
    }

    /// One provider call for one section's component code.
    async fn generate_section(
        &self,
        provider: &BoxLlmProvider,
        description: &str,
        guide: &StyleGuideDoc,
    ) -> String {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![Message::user(prompt::section_prompt(description, guide))],
            system: Some(prompt::SECTION_SYSTEM_PROMPT.to_string()),
            max_tokens: self.config.max_tokens,
            temperature: Some(SECTION_TEMPERATURE),
        };

        match provider.complete(&request).await {
            Ok(response) => extract_code(&response.content),
            Err(err) => {
                tracing::warn!(error = %err, "section generation call failed");
                String::new()
            }
        }
    }

    /// One provider call for the marketing content document.
    async fn generate_content(&self, provider: &BoxLlmProvider, brief: &SiteBrief) -> ContentDoc {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![Message::user(prompt::content_prompt(&brief.description))],
            system: Some(prompt::CONTENT_SYSTEM_PROMPT.to_string()),
            max_tokens: CONTENT_MAX_TOKENS,
            temperature: Some(CONTENT_TEMPERATURE),
        };

        match provider.complete(&request).await {
            Ok(response) => match extract_json(&response.content) {
                Ok(value) => ContentDoc::new(value),
                Err(err) => {
                    tracing::warn!(error = %err, "could not extract content from response, using default");
                    ContentDoc::fallback()
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "content generation call failed, using default");
                ContentDoc::fallback()
            }
        }
    }

    /// Decode and write the logo, returning its public path.
    ///
    /// The logo is optional: a bad payload or failed write logs and
    /// yields no logo path rather than failing the build.
    async fn write_logo(&self, brief: &SiteBrief) -> Option<String> {
        let payload = brief.logo.as_deref()?;
        let data = payload
            .split_once(',')
            .map(|(_, rest)| rest)
            .unwrap_or(payload);

        let bytes = match BASE64.decode(data.trim()) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(error = %err, "could not decode logo payload, skipping logo");
                return None;
            }
        };

        match self
            .writer
            .write_bytes("public/images/logo.png", &bytes)
            .await
        {
            Ok(()) => Some("/images/logo.png".to_string()),
            Err(err) => {
                tracing::warn!(error = %err, "could not write logo, skipping");
                None
            }
        }
    }

    /// Write `data/cms.json`, the CMS API route, and the edit page.
    async fn write_cms_artifacts(
        &self,
        brief: &SiteBrief,
        guide: &StyleGuideDoc,
        content: &ContentDoc,
        logo_path: Option<&str>,
    ) -> Result<(), SiteBuildError> {
        let cms_data = json!({
            "name": brief.name,
            "description": brief.description,
            "logo": logo_path.unwrap_or_default(),
            "colors": resolved_colors(guide),
            "content": content.as_value(),
            "generated_at": chrono::Utc::now().to_rfc3339(),
        });

        let mut body = serde_json::to_string_pretty(&cms_data)
            .unwrap_or_else(|_| "{}".to_string());
        body.push('\n');

        self.writer
            .write_file(&GeneratedFile::new("data/cms.json", body))
            .await?;
        self.writer
            .write_file(&GeneratedFile::new("app/api/cms/route.ts", cms_route_ts()))
            .await?;
        self.writer
            .write_file(&GeneratedFile::new("app/cms/page.tsx", cms_page_tsx()))
            .await?;
        Ok(())
    }
}

/// The guide's defined colors, or the canonical role set when the guide
/// defines none.
fn resolved_colors(guide: &StyleGuideDoc) -> Value {
    let defined = guide.colors();
    let pairs: Vec<(String, String)> = if defined.is_empty() {
        ["primary", "secondary", "accent", "background", "text"]
            .iter()
            .map(|role| (role.to_string(), guide.color(role)))
            .collect()
    } else {
        defined
    };

    let map: Map<String, Value> = pairs
        .into_iter()
        .map(|(role, hex)| (role, Value::String(hex)))
        .collect();
    Value::Object(map)
}
