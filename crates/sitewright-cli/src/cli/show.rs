//! Document display commands.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};

use sitewright_core::storage::DocumentStore;
use sitewright_types::document::{
    BRAND_GUIDE_FILE, SITEMAP_FILE, SectionDescriptor, SitemapDoc, StyleGuideDoc,
};

use crate::state::AppState;

/// One table line per section: plain ASCII, kind alone when the section
/// has no description.
fn section_line(section: &SectionDescriptor) -> String {
    if section.description.is_empty() {
        section.kind.clone()
    } else {
        format!("{}: {}", section.kind, section.description)
    }
}

/// Display the persisted sitemap as a table (or raw JSON with `--json`).
pub async fn show_sitemap(state: &AppState, json: bool) -> Result<()> {
    let value = state.store().load(SITEMAP_FILE).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let doc = SitemapDoc::new(value);
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Page").fg(Color::Cyan),
            Cell::new("Sections").fg(Color::Cyan),
        ]);

    for page in doc.pages() {
        let sections = doc
            .sections(&page)
            .iter()
            .map(section_line)
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![Cell::new(page), Cell::new(sections)]);
    }

    println!("{table}");
    Ok(())
}

/// Display the persisted brand guide as a table (or raw JSON with `--json`).
pub async fn show_brand(state: &AppState, json: bool) -> Result<()> {
    let value = state.store().load(BRAND_GUIDE_FILE).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let doc = StyleGuideDoc::new(value);
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Property").fg(Color::Cyan),
            Cell::new("Value").fg(Color::Cyan),
        ]);

    for (role, hex) in doc.colors() {
        table.add_row(vec![Cell::new(format!("color: {role}")), Cell::new(hex)]);
    }
    table.add_row(vec![Cell::new("heading font"), Cell::new(doc.heading_font())]);
    table.add_row(vec![Cell::new("body font"), Cell::new(doc.body_font())]);
    table.add_row(vec![Cell::new("ui style"), Cell::new(doc.ui_style())]);

    println!("{table}");
    Ok(())
}
