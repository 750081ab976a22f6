//! Document edit commands: deep-merge a partial update into a persisted
//! artifact.

use std::path::Path;

use anyhow::Result;
use console::style;

use sitewright_core::agent::{BrandGuideAgent, SitemapAgent};
use sitewright_types::document::{BRAND_GUIDE_FILE, SITEMAP_FILE};

use crate::cli::build::read_json;
use crate::state::AppState;

/// Merge a partial-update JSON file into `sitemap.json`.
pub async fn edit_sitemap(state: &AppState, edits: &Path, json: bool) -> Result<()> {
    let update = read_json(edits).await?;
    let agent = SitemapAgent::new(state.store(), state.config.clone());
    let doc = agent.edit(update).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(doc.as_value())?);
        return Ok(());
    }
    print_edited(SITEMAP_FILE);
    Ok(())
}

/// Merge a partial-update JSON file into `brand-guide.json`.
pub async fn edit_brand(state: &AppState, edits: &Path, json: bool) -> Result<()> {
    let update = read_json(edits).await?;
    let agent = BrandGuideAgent::new(state.store(), state.config.clone());
    let doc = agent.edit(update).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(doc.as_value())?);
        return Ok(());
    }
    print_edited(BRAND_GUIDE_FILE);
    Ok(())
}

fn print_edited(file: &str) {
    println!();
    println!(
        "  {} Updated {}",
        style("✓").green().bold(),
        style(file).yellow()
    );
    println!();
}
