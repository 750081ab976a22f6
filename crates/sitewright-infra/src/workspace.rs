//! Workspace-rooted JSON document store.
//!
//! Documents live under fixed names in the workspace directory and are
//! read and written as whole files. Writes are non-transactional and
//! assume a single-writer working directory.

use std::path::PathBuf;

use serde_json::Value;

use sitewright_core::storage::DocumentStore;
use sitewright_types::error::DocumentError;

/// [`DocumentStore`] backed by the workspace directory.
#[derive(Debug, Clone)]
pub struct WorkspaceStore {
    root: PathBuf,
}

impl WorkspaceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl DocumentStore for WorkspaceStore {
    async fn save(&self, name: &str, doc: &Value) -> Result<(), DocumentError> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut body = serde_json::to_string_pretty(doc)
            .map_err(|e| DocumentError::Io(e.to_string()))?;
        body.push('\n');

        tokio::fs::write(&path, body).await?;
        tracing::debug!(path = %path.display(), "saved document");
        Ok(())
    }

    async fn load(&self, name: &str) -> Result<Value, DocumentError> {
        let path = self.path(name);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(DocumentError::NotFound(name.to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        serde_json::from_str(&content).map_err(|e| DocumentError::Malformed {
            name: name.to_string(),
            message: e.to_string(),
        })
    }

    async fn exists(&self, name: &str) -> bool {
        tokio::fs::try_exists(self.path(name)).await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let store = WorkspaceStore::new(tmp.path());
        let doc = json!({
            "colors": {"primary": "#3B82F6"},
            "pages": ["Home", "About"],
            "count": 3
        });

        store.save("brand-guide.json", &doc).await.unwrap();
        let loaded = store.load("brand-guide.json").await.unwrap();

        assert_eq!(loaded, doc);
    }

    #[tokio::test]
    async fn test_save_is_pretty_printed_with_trailing_newline() {
        let tmp = TempDir::new().unwrap();
        let store = WorkspaceStore::new(tmp.path());

        store.save("sitemap.json", &json!({"Home": []})).await.unwrap();

        let raw = tokio::fs::read_to_string(tmp.path().join("sitemap.json"))
            .await
            .unwrap();
        assert!(raw.contains("\n  \"Home\""));
        assert!(raw.ends_with("}\n"));
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let store = WorkspaceStore::new(tmp.path());

        store.save("sitemap.json", &json!({"v": 1})).await.unwrap();
        store.save("sitemap.json", &json!({"v": 2})).await.unwrap();

        let loaded = store.load("sitemap.json").await.unwrap();
        assert_eq!(loaded["v"], 2);
    }

    #[tokio::test]
    async fn test_load_missing_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let store = WorkspaceStore::new(tmp.path());

        let err = store.load("sitemap.json").await.unwrap_err();
        assert!(matches!(err, DocumentError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_load_malformed_json() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("sitemap.json"), "{ nope")
            .await
            .unwrap();
        let store = WorkspaceStore::new(tmp.path());

        let err = store.load("sitemap.json").await.unwrap_err();
        assert!(matches!(err, DocumentError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_exists() {
        let tmp = TempDir::new().unwrap();
        let store = WorkspaceStore::new(tmp.path());

        assert!(!store.exists("sitemap.json").await);
        store.save("sitemap.json", &json!({})).await.unwrap();
        assert!(store.exists("sitemap.json").await);
    }
}
