use thiserror::Error;

/// Error taxonomy for store operations.
///
/// Every error is local to the failing request; the store files are only
/// rewritten after a request has fully validated.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying filesystem failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// A store file held malformed JSON.
    #[error("corrupt store file: {0}")]
    Json(#[from] serde_json::Error),
    /// The requested record does not exist.
    #[error("{kind} '{id}' not found")]
    NotFound {
        /// Record kind (`session`, `state`, `assembly`).
        kind: &'static str,
        /// The identifier that missed.
        id: String,
    },
    /// The request was missing or carried an unusable field.
    #[error("invalid request: {reason}")]
    InvalidRequest {
        /// What was wrong with the request.
        reason: String,
    },
    /// A core conversion failure surfaced through a mirror endpoint.
    #[error(transparent)]
    Core(#[from] bitlab_core::CoreError),
}
