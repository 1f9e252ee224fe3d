//! Application state shared across all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::journal::collection::MemoryCollection;
use crate::journal::core::config::JournalConfig;
use crate::journal::core::errors::JournalResult;
use crate::journal::session::SessionManager;
use crate::journal::storage::SqliteKvStore;
use crate::journal::suggest::{GeminiTitleClient, TitleSuggester};

/// Shared application state.
pub struct AppState {
    /// Memory collection, single-writer behind a mutex.
    pub collection: Mutex<MemoryCollection>,
    /// Title suggestion client.
    pub suggester: Arc<dyn TitleSuggester>,
    /// Mock sign-in sessions.
    pub sessions: SessionManager,
}

impl AppState {
    /// Create the application state: open the store, load the collection,
    /// and build the suggestion client.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid, the store cannot
    /// be opened, or the suggestion client cannot be built.
    pub fn new(config: &JournalConfig) -> JournalResult<Arc<Self>> {
        config.validate()?;

        let store = Arc::new(SqliteKvStore::open(&config.storage)?);
        let collection = MemoryCollection::load(store);
        let suggester: Arc<dyn TitleSuggester> =
            Arc::new(GeminiTitleClient::new(config.suggestion.clone())?);

        Ok(Arc::new(Self {
            collection: Mutex::new(collection),
            suggester,
            sessions: SessionManager::new(),
        }))
    }

    /// Assemble state from pre-built parts (used by tests).
    #[must_use]
    pub fn from_parts(
        collection: MemoryCollection,
        suggester: Arc<dyn TitleSuggester>,
    ) -> Arc<Self> {
        Arc::new(Self {
            collection: Mutex::new(collection),
            suggester,
            sessions: SessionManager::new(),
        })
    }
}
