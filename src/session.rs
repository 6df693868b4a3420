//! One interactive session: owns the query history for its lifetime.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::corpus::CorpusStore;
use crate::error::{QueryError, ReplayError};
use crate::history::{HistoryLog, export_csv};
use crate::models::{HistoryEntry, VerseRef};
use crate::resolver::{QueryResult, resolve};
use crate::speech::{SpeechSink, replay_last};

/// Session-scoped state.
///
/// Created by the caller at session start and dropped at session end; history is
/// never shared between sessions.
#[derive(Debug, Default)]
pub struct Session {
    history: HistoryLog,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `query` and commit it to history.
    ///
    /// Only committed results (direct hits and keyword hits) are recorded; errors and
    /// empty keyword results leave the history untouched.
    pub fn submit<'c>(
        &mut self,
        corpus: &'c CorpusStore,
        query: &str,
    ) -> Result<QueryResult<'c>, QueryError> {
        let result = resolve(query, corpus)?;
        if let Some(summary) = result.summary() {
            debug!(%summary, "recording history entry");
            self.history.append(HistoryEntry::new(query, summary));
        }
        Ok(result)
    }

    /// Speak the Arabic text of the last direct lookup
    pub fn recite_last<S: SpeechSink + ?Sized>(
        &self,
        corpus: &CorpusStore,
        speech: &mut S,
    ) -> Result<VerseRef, ReplayError> {
        replay_last(&self.history, corpus, speech)
    }

    /// Write the session history as CSV
    pub fn export_history(&self, path: &Path) -> Result<()> {
        export_csv(self.history.all(), path)
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }
}
