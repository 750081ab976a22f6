//! Shared test doubles for agent tests: a scripted provider, an
//! in-memory document store, an in-memory site writer, and a map-backed
//! template library.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::Value;

use sitewright_types::document::GeneratedFile;
use sitewright_types::error::DocumentError;
use sitewright_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities, StopReason, Usage,
};

use crate::llm::provider::LlmProvider;
use crate::storage::{DocumentStore, SiteWriter};
use crate::template::{TemplateLibrary, template_matches};

/// Provider returning scripted replies in order. Once the script is
/// exhausted it returns empty responses.
pub struct MockProvider {
    replies: Mutex<VecDeque<Result<String, String>>>,
    calls: Arc<AtomicUsize>,
    capabilities: ProviderCapabilities,
}

impl MockProvider {
    pub fn replying<I: IntoIterator<Item = S>, S: Into<String>>(replies: I) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| Ok(r.into())).collect()),
            calls: Arc::new(AtomicUsize::new(0)),
            capabilities: mock_capabilities(),
        }
    }

    pub fn failing() -> Self {
        Self {
            replies: Mutex::new(VecDeque::from([Err("scripted failure".to_string())])),
            calls: Arc::new(AtomicUsize::new(0)),
            capabilities: mock_capabilities(),
        }
    }

    /// Handle to the call counter, usable after the provider is boxed.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn capabilities(&self) -> &ProviderCapabilities {
        &self.capabilities
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(Err(message)) => Err(LlmError::Provider { message }),
            Some(Ok(content)) => Ok(response(request, content)),
            None => Ok(response(request, String::new())),
        }
    }
}

fn response(request: &CompletionRequest, content: String) -> CompletionResponse {
    CompletionResponse {
        id: "mock".to_string(),
        content,
        model: request.model.clone(),
        stop_reason: StopReason::EndTurn,
        usage: Usage::default(),
    }
}

fn mock_capabilities() -> ProviderCapabilities {
    ProviderCapabilities {
        vision: false,
        max_context_tokens: 200_000,
        max_output_tokens: 8_192,
    }
}

/// In-memory document store.
#[derive(Default)]
pub struct MemStore {
    docs: Mutex<HashMap<String, Value>>,
}

impl MemStore {
    pub fn with(name: &str, doc: Value) -> Self {
        let store = Self::default();
        store.docs.lock().unwrap().insert(name.to_string(), doc);
        store
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.docs.lock().unwrap().get(name).cloned()
    }
}

impl DocumentStore for MemStore {
    async fn save(&self, name: &str, doc: &Value) -> Result<(), DocumentError> {
        self.docs
            .lock()
            .unwrap()
            .insert(name.to_string(), doc.clone());
        Ok(())
    }

    async fn load(&self, name: &str) -> Result<Value, DocumentError> {
        self.docs
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| DocumentError::NotFound(name.to_string()))
    }

    async fn exists(&self, name: &str) -> bool {
        self.docs.lock().unwrap().contains_key(name)
    }
}

/// Document store whose saves always fail, for persistence-failure paths.
pub struct BrokenStore;

impl DocumentStore for BrokenStore {
    async fn save(&self, _name: &str, _doc: &Value) -> Result<(), DocumentError> {
        Err(DocumentError::Io("disk full".to_string()))
    }

    async fn load(&self, name: &str) -> Result<Value, DocumentError> {
        Err(DocumentError::NotFound(name.to_string()))
    }

    async fn exists(&self, _name: &str) -> bool {
        false
    }
}

/// In-memory site writer collecting every written file.
#[derive(Default)]
pub struct MemWriter {
    files: Mutex<Vec<GeneratedFile>>,
    binaries: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemWriter {
    pub fn files(&self) -> Vec<GeneratedFile> {
        self.files.lock().unwrap().clone()
    }

    pub fn file(&self, path: &str) -> Option<GeneratedFile> {
        self.files
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.path == path)
            .cloned()
    }

    pub fn binaries(&self) -> Vec<(String, Vec<u8>)> {
        self.binaries.lock().unwrap().clone()
    }
}

impl SiteWriter for MemWriter {
    async fn write_file(&self, file: &GeneratedFile) -> Result<(), DocumentError> {
        self.files.lock().unwrap().push(file.clone());
        Ok(())
    }

    async fn write_bytes(&self, path: &str, bytes: &[u8]) -> Result<(), DocumentError> {
        self.binaries
            .lock()
            .unwrap()
            .push((path.to_string(), bytes.to_vec()));
        Ok(())
    }
}

/// Map-backed template library using the shared matching rule.
#[derive(Default)]
pub struct MapTemplates {
    templates: HashMap<String, String>,
}

impl MapTemplates {
    pub fn with(stem: &str, body: &str) -> Self {
        let mut templates = HashMap::new();
        templates.insert(stem.to_string(), body.to_string());
        Self { templates }
    }
}

impl TemplateLibrary for MapTemplates {
    async fn resolve(&self, kind_slug: &str, description: &str) -> Option<String> {
        self.templates
            .iter()
            .find(|(stem, _)| template_matches(stem, kind_slug, description))
            .map(|(_, body)| body.clone())
    }
}
