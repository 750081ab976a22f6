//! Storage port traits.
//!
//! Defines the interfaces for persisting JSON documents and writing the
//! generated source tree. Implementations live in sitewright-infra.

use serde_json::Value;

use sitewright_types::document::GeneratedFile;
use sitewright_types::error::DocumentError;

/// Trait for whole-file JSON document persistence.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Documents are read and written as whole files under fixed names --
/// no partial-record transactions, no locking, each save clobbers the
/// previous file content.
pub trait DocumentStore: Send + Sync {
    /// Serialize `doc` to `{workspace}/{name}`, pretty-printed,
    /// overwriting any existing file and creating parent directories.
    fn save(
        &self,
        name: &str,
        doc: &Value,
    ) -> impl std::future::Future<Output = Result<(), DocumentError>> + Send;

    /// Load and parse the document at `{workspace}/{name}`.
    fn load(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Value, DocumentError>> + Send;

    /// Whether a document with this name currently exists.
    fn exists(&self, name: &str) -> impl std::future::Future<Output = bool> + Send;
}

/// Trait for writing files into the generated website's output tree.
pub trait SiteWriter: Send + Sync {
    /// Write one generated source file, creating parent directories.
    fn write_file(
        &self,
        file: &GeneratedFile,
    ) -> impl std::future::Future<Output = Result<(), DocumentError>> + Send;

    /// Write a binary asset (e.g. the decoded logo image).
    fn write_bytes(
        &self,
        path: &str,
        bytes: &[u8],
    ) -> impl std::future::Future<Output = Result<(), DocumentError>> + Send;
}
