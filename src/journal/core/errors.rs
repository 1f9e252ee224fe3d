//! Error types for the journal subsystem.

use thiserror::Error;

/// Journal subsystem error type.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Invalid configuration or unsupported values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A memory draft that fails the submission contract.
    #[error("invalid memory draft: {0}")]
    InvalidDraft(String),
    /// The store could not produce a usable collection.
    #[error("store read failed: {0}")]
    StoreRead(String),
    /// The store could not persist the collection.
    #[error("store write failed: {0}")]
    StoreWrite(String),
    /// `SQLite` storage error.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// HTTP client error.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The generative API answered with a non-success status.
    #[error("generative api status not ok: {0}")]
    ApiStatus(u16),
    /// The generative API answered with a body we cannot interpret.
    #[error("generative api response malformed")]
    MalformedResponse,
    /// URL parse error.
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias for journal operations.
pub type JournalResult<T> = Result<T, JournalError>;
