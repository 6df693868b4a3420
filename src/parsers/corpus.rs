use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use tracing::info;

use super::deserializers::parse_surah_key;
use crate::corpus::CorpusStore;
use crate::error::CorpusError;
use crate::models::Surah;

/// Maximum corpus file size: 64MB (the full three-text corpus is ~15MB)
pub const MAX_CORPUS_SIZE_BYTES: u64 = 64 * 1024 * 1024;

/// Load the corpus file into an immutable store.
///
/// The file is a JSON object mapping string-encoded surah numbers to surah records.
/// A missing file is reported as [`CorpusError::FileMissing`]; there is no
/// degraded mode, callers are expected to abort startup on any error.
pub fn load_corpus(path: &Path) -> Result<CorpusStore, CorpusError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CorpusError::FileMissing { path: path.to_path_buf() },
        _ => CorpusError::Io { path: path.to_path_buf(), source },
    })?;

    // Check size on the opened handle to avoid a TOCTOU race with the path
    let size = file
        .metadata()
        .map_err(|source| CorpusError::Io { path: path.to_path_buf(), source })?
        .len();
    if size > MAX_CORPUS_SIZE_BYTES {
        return Err(CorpusError::TooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_CORPUS_SIZE_BYTES,
        });
    }

    let store = parse_corpus(BufReader::new(file), path)?;
    info!(
        path = %path.display(),
        surahs = store.surah_count(),
        ayahs = store.ayah_count(),
        "loaded corpus"
    );
    Ok(store)
}

/// Parse corpus JSON from any reader. `origin` is only used in error messages.
pub fn parse_corpus<R: Read>(reader: R, origin: &Path) -> Result<CorpusStore, CorpusError> {
    let raw: HashMap<String, Surah> = serde_json::from_reader(reader)
        .map_err(|source| CorpusError::Parse { path: origin.to_path_buf(), source })?;

    let mut surahs = BTreeMap::new();
    for (key, surah) in raw {
        let number = parse_surah_key(&key).ok_or_else(|| CorpusError::Invalid {
            message: format!("surah key {:?} is not a positive integer", key),
        })?;
        if number != surah.number {
            return Err(CorpusError::Invalid {
                message: format!("surah key {} does not match record number {}", key, surah.number),
            });
        }
        // "1" and "01" name the same surah; map order is unspecified, so refuse to pick one
        if surahs.insert(number, surah).is_some() {
            return Err(CorpusError::Invalid {
                message: format!("duplicate surah number {}", number),
            });
        }
    }

    CorpusStore::new(surahs)
}
