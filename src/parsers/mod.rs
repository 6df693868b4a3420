//! Corpus file parsing
//!
//! # Error Handling Strategy
//!
//! Unlike a line-oriented log, the corpus is a single JSON document that every
//! query depends on, so parsing is all-or-nothing:
//!
//! - **Missing file**: reported as `CorpusError::FileMissing` so the operator knows
//!   to generate the corpus first.
//! - **Malformed JSON / oversize file**: reported with the offending path.
//! - **Structural violations**: non-numeric keys, key/number mismatches, empty
//!   surahs or gaps in `numberInSurah` are rejected before a store is built.
//!
//! Errors are typed (`thiserror`) so the CLI can distinguish a missing corpus
//! from a corrupt one when reporting.

pub mod corpus;
pub mod deserializers;

pub use corpus::{load_corpus, parse_corpus};
