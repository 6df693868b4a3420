use tracing::info;

use super::voice::SpeechSink;
use crate::corpus::CorpusStore;
use crate::error::ReplayError;
use crate::history::HistoryLog;
use crate::models::VerseRef;
use crate::resolver::parse_summary;

/// Speak the Arabic text of the most recent direct lookup.
///
/// Only the very last history entry is considered: if it was a keyword search the
/// replay fails with [`ReplayError::NotDirectLookup`] rather than searching further
/// back.
pub fn replay_last<S: SpeechSink + ?Sized>(
    history: &HistoryLog,
    corpus: &CorpusStore,
    speak: &mut S,
) -> Result<VerseRef, ReplayError> {
    let last = history.last().ok_or(ReplayError::NoHistory)?;
    let verse = parse_summary(&last.result).ok_or(ReplayError::NotDirectLookup)?;

    let text = corpus
        .ayah(verse)
        .and_then(|ayah| ayah.text_ar.as_deref())
        .ok_or(ReplayError::NoArabicText { surah: verse.surah, ayah: verse.ayah })?;

    speak.speak(text).map_err(ReplayError::Speech)?;
    info!(surah = verse.surah, ayah = verse.ayah, "recited verse");
    Ok(verse)
}
