use thiserror::Error;

/// Errors from extracting a structured value out of raw model output.
///
/// Every variant is recoverable: callers substitute the type-appropriate
/// default document instead of propagating these to the process boundary.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("response contains no JSON object")]
    NoJsonObject,

    #[error("extracted slice is not valid JSON: {0}")]
    Parse(String),

    #[error("top-level JSON value is not an object")]
    NotAnObject,
}

/// Errors from persisting or loading a JSON document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document '{0}' not found")]
    NotFound(String),

    #[error("document '{name}' is not valid JSON: {message}")]
    Malformed { name: String, message: String },

    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DocumentError {
    fn from(err: std::io::Error) -> Self {
        DocumentError::Io(err.to_string())
    }
}

/// Errors from the website build (code-generation path).
#[derive(Debug, Error)]
pub enum SiteBuildError {
    #[error("no files were generated in the output tree")]
    NoFilesGenerated,

    #[error("failed to write output file: {0}")]
    Write(#[from] DocumentError),
}

/// Errors from resolving the API credential at startup.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),
}
