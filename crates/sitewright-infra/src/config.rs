//! Configuration loader for Sitewright.
//!
//! Reads `sitewright.toml` from the workspace directory, falling back to
//! the platform config directory (`~/.config/sitewright/` on Linux), then
//! to defaults when neither file exists or a file is malformed.

use std::path::{Path, PathBuf};

use sitewright_types::config::SiteConfig;

const CONFIG_FILE: &str = "sitewright.toml";

/// Load configuration for a workspace directory.
///
/// - Workspace file missing: try the platform config directory.
/// - Both missing: [`SiteConfig::default()`].
/// - A file exists but fails to parse: log a warning, use defaults.
pub async fn load_config(workspace: &Path) -> SiteConfig {
    for path in candidate_paths(workspace) {
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                return match toml::from_str::<SiteConfig>(&content) {
                    Ok(config) => config,
                    Err(err) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %err,
                            "failed to parse config, using defaults"
                        );
                        SiteConfig::default()
                    }
                };
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read config, using defaults");
                return SiteConfig::default();
            }
        }
    }

    tracing::debug!("no {CONFIG_FILE} found, using defaults");
    SiteConfig::default()
}

fn candidate_paths(workspace: &Path) -> Vec<PathBuf> {
    let mut paths = vec![workspace.join(CONFIG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("sitewright").join(CONFIG_FILE));
    }
    paths
}
