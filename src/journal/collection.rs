//! Memory collection management.
//!
//! One controller owns the in-memory list; every mutation goes back out
//! through the store adapter as a full-collection write. Store failures are
//! reported to the tracing sink and never surface to callers: a failed read
//! yields an empty collection, a failed write leaves the in-memory state
//! authoritative until the next successful write.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::journal::core::ids::MemoryId;
use crate::journal::core::memory::{Memory, MemoryDraft};
use crate::journal::storage::StoreAdapter;

/// Ordered collection of memories, newest-first, synchronized with a store.
pub struct MemoryCollection {
    memories: Vec<Memory>,
    store: Arc<dyn StoreAdapter>,
}

impl MemoryCollection {
    /// Load the collection from the store.
    ///
    /// Called once at startup. A read or parse failure is reported and the
    /// collection starts empty; this never fails outward.
    #[must_use]
    pub fn load(store: Arc<dyn StoreAdapter>) -> Self {
        let memories = match store.read_all() {
            Ok(memories) => {
                debug!("loaded {} memories from store", memories.len());
                memories
            }
            Err(err) => {
                warn!("failed to load memories from store, starting empty: {err}");
                Vec::new()
            }
        };

        Self { memories, store }
    }

    /// Add a memory built from `draft`: assigns a fresh id, prepends it so
    /// the newest entry comes first, persists, and returns the new record.
    ///
    /// The draft is not validated here; the submission contract lives at
    /// the presentation boundary.
    pub fn add(&mut self, draft: &MemoryDraft) -> Memory {
        let memory = Memory::from_draft(draft);
        self.memories.insert(0, memory.clone());
        self.persist();
        memory
    }

    /// Remove the memory with the given id, if present, and persist.
    ///
    /// Deleting an unknown id is a no-op, not an error.
    pub fn delete(&mut self, id: &MemoryId) {
        self.memories.retain(|memory| memory.id != *id);
        self.persist();
    }

    /// Snapshot of the collection, newest-first.
    ///
    /// The returned vector is an owned copy; later mutations do not alias
    /// into it.
    #[must_use]
    pub fn current(&self) -> Vec<Memory> {
        self.memories.clone()
    }

    /// Number of memories currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.memories.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }

    /// Write the full collection through the store adapter.
    ///
    /// A write failure keeps the in-memory state authoritative; the loss
    /// risk on reload is accepted and reported here.
    fn persist(&self) {
        if let Err(err) = self.store.write_all(&self.memories) {
            error!("failed to persist memories, in-memory state retained: {err}");
        }
    }
}
