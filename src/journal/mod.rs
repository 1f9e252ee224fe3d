//! Journal subsystem: memory records, persistence, sessions, suggestions.
//!
//! Organized as:
//! - `core`: configuration, errors, ids, records, users
//! - `storage`: key-value store adapter holding the serialized collection
//! - `collection`: the owning collection manager
//! - `suggest`: optional AI title suggestion
//! - `session`: mock sign-in state
//! - `images`: photo-to-data-URL boundary

pub mod collection;
pub mod core;
pub mod images;
pub mod session;
pub mod storage;
pub mod suggest;

// Re-export commonly used types for convenience
pub use collection::MemoryCollection;
pub use core::{
    JournalConfig, JournalError, JournalResult, MAX_IMAGES, Memory, MemoryDraft, MemoryId,
    ServerConfig, SessionToken, StorageConfig, SuggestionConfig, User,
};
pub use session::SessionManager;
pub use storage::{InMemoryStore, SqliteKvStore, StoreAdapter};
pub use suggest::{GeminiTitleClient, TitleSuggester};
