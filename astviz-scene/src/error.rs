use thiserror::Error;

/// Errors emitted while reading a syntax tree document.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The document could not be read from disk.
    #[error("document I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The document bytes are not valid JSON.
    #[error("document JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}
