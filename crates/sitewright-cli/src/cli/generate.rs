//! One-shot generation command: sitemap, brand guide, then site build.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use sitewright_core::agent::{BrandGuideAgent, SiteAgent, SitemapAgent};
use sitewright_infra::output::OutputTree;
use sitewright_infra::template::DirTemplateLibrary;

use crate::cli::brand::brand_brief;
use crate::cli::build::print_build_summary;
use crate::cli::spinner;
use crate::state::AppState;

/// Run all three agents back-to-back for one business brief.
#[allow(clippy::too_many_arguments)]
pub async fn generate_all(
    state: &AppState,
    name: String,
    description: String,
    layout: Option<String>,
    logo: Option<PathBuf>,
    colors: Option<String>,
    out: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let provider = state.provider()?;

    let mut brief = brand_brief(name, description, logo.as_deref(), colors.as_deref()).await?;
    brief.layout_prompt = layout;

    let bar = (!json).then(|| spinner("Generating sitemap..."));
    let sitemap_agent = SitemapAgent::new(state.store(), state.config.clone());
    let sitemap = sitemap_agent.generate(&provider, &brief).await;

    if let Some(bar) = &bar {
        bar.set_message("Generating brand guide...");
    }
    let brand_agent = BrandGuideAgent::new(state.store(), state.config.clone());
    let guide = brand_agent.generate(&provider, &brief).await;

    if let Some(bar) = &bar {
        bar.set_message("Building website source...");
    }
    let out_dir = out.unwrap_or_else(|| state.output_dir());
    let templates = DirTemplateLibrary::load(&state.template_dir()).await;
    let site_agent = SiteAgent::new(templates, OutputTree::new(&out_dir), state.config.clone());
    let summary = site_agent.build(&provider, &brief, &sitemap, &guide).await?;

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    if json {
        let report = serde_json::json!({
            "sitemap": sitemap.as_value(),
            "brand_guide": guide.as_value(),
            "output_dir": out_dir.display().to_string(),
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} All artifacts generated for {}",
        style("✓").green().bold(),
        style(&brief.name).cyan()
    );
    println!(
        "  {} pages in the sitemap, {} colors in the brand guide",
        sitemap.pages().len(),
        guide.colors().len()
    );
    print_build_summary(&summary, &out_dir);
    Ok(())
}
