//! Query resolution: direct `surah:ayah` locator or keyword scan.
//!
//! Input is free text. A locator anywhere in the text always wins over keyword
//! search, even when the rest of the text would also match verses. Otherwise the
//! whole query is used as a case-insensitive substring against every ayah's
//! Arabic, English and Urdu text, capped at [`MAX_KEYWORD_HITS`] results.
//!
//! Resolution is a pure function; recording history is the caller's job
//! (see [`crate::session::Session`]).

pub mod keyword;
pub mod locator;

pub use keyword::{MAX_KEYWORD_HITS, scan};
pub use locator::{parse_locator, parse_summary, summary_for};
use tracing::debug;

use crate::corpus::CorpusStore;
use crate::error::QueryError;
use crate::models::{Ayah, Surah, VerseRef};

/// History summary recorded for keyword results
pub const KEYWORD_SUMMARY: &str = "found_related";

/// A verse borrowed from the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verse<'c> {
    pub surah: &'c Surah,
    pub ayah: &'c Ayah,
}

impl Verse<'_> {
    pub fn verse_ref(&self) -> VerseRef {
        VerseRef::new(self.surah.number, self.ayah.number_in_surah)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult<'c> {
    /// Exact `surah:ayah` locator within corpus bounds
    DirectHit(Verse<'c>),
    /// Up to [`MAX_KEYWORD_HITS`] keyword matches in corpus order
    KeywordHits(Vec<Verse<'c>>),
    /// Keyword scan found nothing; a valid, empty outcome
    NoMatch,
}

impl<'c> QueryResult<'c> {
    /// Summary to record in history, `None` for [`QueryResult::NoMatch`]
    pub fn summary(&self) -> Option<String> {
        match self {
            QueryResult::DirectHit(verse) => Some(summary_for(verse.verse_ref())),
            QueryResult::KeywordHits(_) => Some(KEYWORD_SUMMARY.to_string()),
            QueryResult::NoMatch => None,
        }
    }

    /// Verses in display order
    pub fn verses(&self) -> &[Verse<'c>] {
        match self {
            QueryResult::DirectHit(verse) => std::slice::from_ref(verse),
            QueryResult::KeywordHits(verses) => verses,
            QueryResult::NoMatch => &[],
        }
    }
}

/// Resolve a free-form query against the corpus
pub fn resolve<'c>(query: &str, corpus: &'c CorpusStore) -> Result<QueryResult<'c>, QueryError> {
    if query.trim().is_empty() {
        return Err(QueryError::EmptyQuery);
    }

    if let Some(locator) = parse_locator(query) {
        debug!(surah = locator.surah, ayah = locator.ayah, "resolving direct locator");
        let surah = corpus.surah(locator.surah).ok_or(QueryError::LocatorOutOfRange {
            surah: locator.surah,
            ayah: locator.ayah,
        })?;
        let ayah = surah.ayah(locator.ayah).ok_or(QueryError::LocatorOutOfRange {
            surah: locator.surah,
            ayah: locator.ayah,
        })?;
        return Ok(QueryResult::DirectHit(Verse { surah, ayah }));
    }

    let hits = scan(query, corpus, MAX_KEYWORD_HITS);
    debug!(hits = hits.len(), "keyword scan finished");

    if hits.is_empty() { Ok(QueryResult::NoMatch) } else { Ok(QueryResult::KeywordHits(hits)) }
}
