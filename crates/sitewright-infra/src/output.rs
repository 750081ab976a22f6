//! Output-tree writer for the generated website source.

use std::path::PathBuf;

use sitewright_core::storage::SiteWriter;
use sitewright_types::document::GeneratedFile;
use sitewright_types::error::DocumentError;

/// [`SiteWriter`] rooted at the output directory. Creates parent
/// directories on demand; every write clobbers the previous file.
#[derive(Debug, Clone)]
pub struct OutputTree {
    root: PathBuf,
}

impl OutputTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    async fn write(&self, rel: &str, bytes: &[u8]) -> Result<(), DocumentError> {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(path = %path.display(), "wrote output file");
        Ok(())
    }
}

impl SiteWriter for OutputTree {
    async fn write_file(&self, file: &GeneratedFile) -> Result<(), DocumentError> {
        self.write(&file.path, file.body.as_bytes()).await
    }

    async fn write_bytes(&self, path: &str, bytes: &[u8]) -> Result<(), DocumentError> {
        self.write(path, bytes).await
    }
}
