//! Application state for CLI command handlers.
//!
//! Holds the workspace directory and its loaded configuration, and builds
//! the concrete infrastructure pieces (document store, provider) handlers
//! need. The provider is constructed lazily so commands that never call
//! the LLM (`show`, `edit`) work without a credential.

use std::path::PathBuf;

use sitewright_core::llm::BoxLlmProvider;
use sitewright_infra::config::load_config;
use sitewright_infra::credential::resolve_api_key;
use sitewright_infra::llm::create_provider;
use sitewright_infra::workspace::WorkspaceStore;
use sitewright_types::config::SiteConfig;

pub struct AppState {
    pub workspace: PathBuf,
    pub config: SiteConfig,
}

impl AppState {
    /// Resolve the workspace directory (CWD by default) and load its
    /// configuration.
    pub async fn init(workspace: Option<PathBuf>) -> anyhow::Result<Self> {
        let workspace = match workspace {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        let config = load_config(&workspace).await;
        Ok(Self { workspace, config })
    }

    /// Document store rooted at the workspace directory.
    pub fn store(&self) -> WorkspaceStore {
        WorkspaceStore::new(&self.workspace)
    }

    /// Build the LLM provider. Fails before any agent is constructed when
    /// the credential is missing.
    pub fn provider(&self) -> anyhow::Result<BoxLlmProvider> {
        let api_key = resolve_api_key()?;
        Ok(create_provider(api_key, &self.config.model))
    }

    /// Template directory for the code-generation path.
    pub fn template_dir(&self) -> PathBuf {
        self.workspace.join(&self.config.template_dir)
    }

    /// Default output directory for the generated source tree.
    pub fn output_dir(&self) -> PathBuf {
        self.workspace.join(&self.config.output_dir)
    }
}
