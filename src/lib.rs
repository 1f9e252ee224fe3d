//! Keepsake: a self-hosted personal memory journal.
//!
//! A signed-in user creates memories (title, date, story, photos) and
//! browses them newest-first; the collection persists locally under a
//! single key-value slot, and an optional generative-AI call suggests a
//! title from the story text.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Journal components: records, persistence, sessions, suggestions.
pub mod journal;
/// HTTP server and API routes.
pub mod server;
/// Entry helpers to start the journal server.
pub mod startup;
