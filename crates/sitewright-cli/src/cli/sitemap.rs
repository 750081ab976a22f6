//! Sitemap generation command.

use anyhow::Result;
use console::style;
use dialoguer::Confirm;

use sitewright_core::agent::SitemapAgent;
use sitewright_core::storage::DocumentStore;
use sitewright_types::brief::SiteBrief;
use sitewright_types::document::{SITEMAP_FILE, SitemapDoc};

use crate::cli::spinner;
use crate::state::AppState;

/// Generate and persist `sitemap.json` from a business brief.
pub async fn generate_sitemap(
    state: &AppState,
    name: String,
    description: String,
    layout: Option<String>,
    force: bool,
    json: bool,
) -> Result<()> {
    let store = state.store();
    if store.exists(SITEMAP_FILE).await && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!("{SITEMAP_FILE} already exists. Overwrite?"))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let provider = state.provider()?;

    let brief = SiteBrief {
        layout_prompt: layout,
        ..SiteBrief::new(name, description)
    };

    let bar = (!json).then(|| spinner("Generating sitemap..."));
    let agent = SitemapAgent::new(store, state.config.clone());
    let doc = agent.generate(&provider, &brief).await;
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(doc.as_value())?);
        return Ok(());
    }

    print_sitemap_summary(&doc, &brief.name);
    Ok(())
}

pub(crate) fn print_sitemap_summary(doc: &SitemapDoc, business: &str) {
    println!();
    println!(
        "  {} Sitemap generated for {}",
        style("✓").green().bold(),
        style(business).cyan()
    );
    println!();
    for page in doc.pages() {
        let sections = doc.sections(&page);
        let kinds = sections
            .iter()
            .map(|s| s.kind.as_str())
            .filter(|k| !k.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "  {} {} ({} sections{}{})",
            style("•").dim(),
            style(&page).bold(),
            sections.len(),
            if kinds.is_empty() { "" } else { ": " },
            style(kinds).dim()
        );
    }
    println!();
    println!("  Saved to {}", style(SITEMAP_FILE).yellow());
    println!();
}
