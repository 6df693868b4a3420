//! Process-wide, read-only corpus store.
//!
//! The store is built once at startup (see [`crate::parsers::load_corpus`]) and only
//! borrowed afterwards. Because it is never mutated, concurrent readers would need
//! no locking.

pub mod store;

pub use store::{CorpusStats, CorpusStore};
