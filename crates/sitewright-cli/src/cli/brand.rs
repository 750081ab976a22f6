//! Brand guide generation command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use console::style;
use dialoguer::Confirm;

use sitewright_core::agent::BrandGuideAgent;
use sitewright_core::storage::DocumentStore;
use sitewright_types::brief::{SiteBrief, parse_color_preferences};
use sitewright_types::document::{BRAND_GUIDE_FILE, StyleGuideDoc};

use crate::cli::spinner;
use crate::state::AppState;

/// Generate and persist `brand-guide.json` from a business brief.
pub async fn generate_brand(
    state: &AppState,
    name: String,
    description: String,
    logo: Option<PathBuf>,
    colors: Option<String>,
    force: bool,
    json: bool,
) -> Result<()> {
    let store = state.store();
    if store.exists(BRAND_GUIDE_FILE).await && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!("{BRAND_GUIDE_FILE} already exists. Overwrite?"))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let provider = state.provider()?;

    let brief = brand_brief(name, description, logo.as_deref(), colors.as_deref()).await?;

    let bar = (!json).then(|| spinner("Generating brand guide..."));
    let agent = BrandGuideAgent::new(store, state.config.clone());
    let doc = agent.generate(&provider, &brief).await;
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(doc.as_value())?);
        return Ok(());
    }

    print_brand_summary(&doc, &brief.name);
    Ok(())
}

/// Build the brand brief: read and base64-encode the logo file (missing
/// file is fatal), parse the color-preference pairs.
pub(crate) async fn brand_brief(
    name: String,
    description: String,
    logo: Option<&Path>,
    colors: Option<&str>,
) -> Result<SiteBrief> {
    let logo = match logo {
        Some(path) => {
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("failed to read logo file {}", path.display()))?;
            Some(BASE64.encode(bytes))
        }
        None => None,
    };

    Ok(SiteBrief {
        logo,
        color_preferences: colors.map(parse_color_preferences).unwrap_or_default(),
        ..SiteBrief::new(name, description)
    })
}

pub(crate) fn print_brand_summary(doc: &StyleGuideDoc, business: &str) {
    println!();
    println!(
        "  {} Brand guide generated for {}",
        style("✓").green().bold(),
        style(business).cyan()
    );
    println!();
    for (role, hex) in doc.colors() {
        println!("  {} {}  {}", style("•").dim(), style(&hex).bold(), role);
    }
    println!();
    println!(
        "  {}  {}",
        style("Headings:").bold(),
        doc.heading_font()
    );
    println!("  {}  {}", style("Body:").bold(), doc.body_font());
    println!("  {}  {}", style("Style:").bold(), doc.ui_style());
    println!();
    println!("  Saved to {}", style(BRAND_GUIDE_FILE).yellow());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_brand_brief_encodes_logo() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("logo.png");
        tokio::fs::write(&path, b"hello").await.unwrap();

        let brief = brand_brief(
            "Acme".to_string(),
            "desc".to_string(),
            Some(&path),
            Some("primary:#112233"),
        )
        .await
        .unwrap();

        assert_eq!(brief.logo.as_deref(), Some("aGVsbG8="));
        assert_eq!(
            brief.color_preferences,
            vec![("primary".to_string(), "#112233".to_string())]
        );
    }

    #[tokio::test]
    async fn test_brand_brief_missing_logo_is_fatal() {
        let err = brand_brief(
            "Acme".to_string(),
            "desc".to_string(),
            Some(Path::new("/nonexistent/logo.png")),
            None,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("logo"));
    }
}
