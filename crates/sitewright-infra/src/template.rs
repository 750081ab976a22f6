//! Directory-backed template library.
//!
//! Scans the template directory once at startup and resolves sections
//! against the collected file stems. A static lookup, not a cache: no
//! eviction, no invalidation, re-run the command to pick up new files.

use std::path::{Path, PathBuf};

use sitewright_core::template::{TemplateLibrary, template_matches};

/// [`TemplateLibrary`] backed by a directory of pre-built section files.
pub struct DirTemplateLibrary {
    /// Sorted (stem, path) pairs so resolution order is deterministic.
    templates: Vec<(String, PathBuf)>,
}

impl DirTemplateLibrary {
    /// Scan `dir` for template files. A missing directory yields an
    /// empty library rather than an error.
    pub async fn load(dir: &Path) -> Self {
        let mut templates = Vec::new();

        let mut entries = match tokio::fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(dir = %dir.display(), "no template directory, lookups will miss");
                return Self { templates };
            }
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "could not scan template directory");
                return Self { templates };
            }
        };

        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                templates.push((stem.to_lowercase(), path));
            }
        }

        templates.sort();
        tracing::debug!(count = templates.len(), "loaded template library");
        Self { templates }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateLibrary for DirTemplateLibrary {
    async fn resolve(&self, kind_slug: &str, description: &str) -> Option<String> {
        for (stem, path) in &self.templates {
            if !template_matches(stem, kind_slug, description) {
                continue;
            }
            match tokio::fs::read_to_string(path).await {
                Ok(body) => return Some(body),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "could not read template, skipping");
                }
            }
        }
        None
    }
}
