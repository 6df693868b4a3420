//! Data models for the Qur'an corpus and query history.
//!
//! - [`Surah`] / [`Ayah`] - Corpus records as stored in the corpus JSON file
//! - [`VerseRef`] - Copyable address of one verse (surah number, ayah number)
//! - [`HistoryEntry`] - One committed query with its result summary
//!
//! Corpus models use serde with custom deserializers (see `parsers::deserializers`)
//! so that empty translation strings load as `None`.

pub mod corpus;
pub mod history;

pub use corpus::{Ayah, Surah, VerseRef};
pub use history::HistoryEntry;
