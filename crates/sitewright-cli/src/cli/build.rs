//! Website build command: realize existing artifacts as source code.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use serde_json::Value;

use sitewright_core::agent::{BuildSummary, SiteAgent};
use sitewright_infra::output::OutputTree;
use sitewright_infra::template::DirTemplateLibrary;
use sitewright_types::brief::SiteBrief;
use sitewright_types::document::{BRAND_GUIDE_FILE, SITEMAP_FILE, SitemapDoc, StyleGuideDoc};

use crate::cli::spinner;
use crate::state::AppState;

/// Build the website source tree from the input-data file and the two
/// persisted artifacts. Missing or unreadable inputs are fatal.
pub async fn build_site(
    state: &AppState,
    input: &Path,
    sitemap: Option<PathBuf>,
    brand: Option<PathBuf>,
    out: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let provider = state.provider()?;

    let input_value = read_json(input).await?;
    let brief = SiteBrief::from_input_value(&input_value);

    let sitemap_path = sitemap.unwrap_or_else(|| state.workspace.join(SITEMAP_FILE));
    let brand_path = brand.unwrap_or_else(|| state.workspace.join(BRAND_GUIDE_FILE));
    let sitemap = SitemapDoc::new(read_json(&sitemap_path).await?);
    let guide = StyleGuideDoc::new(read_json(&brand_path).await?);

    let out_dir = out.unwrap_or_else(|| state.output_dir());

    let templates = DirTemplateLibrary::load(&state.template_dir()).await;
    let writer = OutputTree::new(&out_dir);
    let agent = SiteAgent::new(templates, writer, state.config.clone());

    let bar = (!json).then(|| spinner("Building website source..."));
    let summary = agent.build(&provider, &brief, &sitemap, &guide).await?;
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    if json {
        let report = serde_json::json!({
            "output_dir": out_dir.display().to_string(),
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_build_summary(&summary, &out_dir);
    Ok(())
}

/// Read and parse a JSON file, failing with the offending path in the
/// error message.
pub(crate) async fn read_json(path: &Path) -> Result<Value> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}

pub(crate) fn print_build_summary(summary: &BuildSummary, out_dir: &Path) {
    println!();
    println!("  {} Website source generated", style("✓").green().bold());
    println!();
    println!("  {}  {}", style("Pages:").bold(), summary.pages);
    println!("  {}  {}", style("Components:").bold(), summary.components);
    println!(
        "  {}  {}",
        style("Templates reused:").bold(),
        summary.templates_reused
    );
    println!(
        "  {}  {}",
        style("Placeholders:").bold(),
        summary.placeholders
    );
    println!();
    println!(
        "  Output written to {}",
        style(out_dir.display().to_string()).yellow()
    );
    println!();
}
