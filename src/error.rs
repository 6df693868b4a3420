use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the corpus file. All of these are fatal at startup.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error(
        "corpus file not found: {path}. Generate quran_data_full.json first (or pass --corpus / set QURAN_CORPUS)"
    )]
    FileMissing { path: PathBuf },

    #[error("failed to read corpus file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus file too large: {path} ({size} bytes, max {max} bytes)")]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("failed to parse corpus file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid corpus: {message}")]
    Invalid { message: String },
}

/// Non-fatal failures of the query resolver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Type a question or 'Surah:2 Ayah:255' style lookup.")]
    EmptyQuery,

    #[error("Surah or Ayah number out of range.")]
    LocatorOutOfRange { surah: u32, ayah: u32 },
}

/// Failures of the replay-to-speech trigger
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("No history found. Perform a lookup first.")]
    NoHistory,

    #[error("Last result was not a direct Surah:Ayah lookup. Use 'Surah:x Ayah:y' lookup first.")]
    NotDirectLookup,

    #[error("Arabic text not found for that Ayah.")]
    NoArabicText { surah: u32, ayah: u32 },

    #[error("Speech output failed: {0:#}")]
    Speech(anyhow::Error),
}
