//! Core journal types: configuration, errors, ids, records, users.

pub mod config;
pub mod errors;
pub mod ids;
pub mod memory;
pub mod user;

pub use config::{JournalConfig, ServerConfig, StorageConfig, SuggestionConfig};
pub use errors::{JournalError, JournalResult};
pub use ids::{MemoryId, SessionToken};
pub use memory::{MAX_IMAGES, Memory, MemoryDraft};
pub use user::User;
