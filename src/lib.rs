//! Quran Explorer - look up, browse and recite Qur'an verses
//!
//! This library loads a trilingual (Arabic/English/Urdu) corpus from a JSON file and
//! answers free-form queries against it. It supports:
//!
//! - Direct lookups written as `Surah:2 Ayah:255` (case-insensitive, anywhere in the text)
//! - Keyword search across all three texts, capped at six hits in corpus order
//! - A per-session query history with CSV export
//! - Reciting the Arabic text of the last direct lookup through an `espeak-ng`
//!   compatible speech command
//!
//! # Example
//!
//! ```no_run
//! use quran_explorer::{Session, load_corpus};
//! use std::path::Path;
//!
//! let corpus = load_corpus(Path::new("quran_data_full.json"))?;
//! let mut session = Session::new();
//! let result = session.submit(&corpus, "Surah:2 Ayah:255")?;
//! println!("{} verse(s), {} in history", result.verses().len(), session.history().len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod corpus;
pub mod error;
pub mod history;
pub mod models;
pub mod parsers;
pub mod resolver;
pub mod session;
pub mod speech;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use corpus::CorpusStore;
pub use error::{CorpusError, QueryError, ReplayError};
pub use models::{Ayah, HistoryEntry, Surah, VerseRef};
pub use parsers::load_corpus;
pub use resolver::{QueryResult, Verse, resolve};
pub use session::Session;
pub use speech::{SpeechSink, VoiceEngine};
