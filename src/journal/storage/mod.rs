//! Persistent storage for the memory collection.

pub mod kv_store;

pub use kv_store::{InMemoryStore, SqliteKvStore, StoreAdapter};
