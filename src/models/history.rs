use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One committed query and its result summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub time: DateTime<Utc>,
    pub query: String,
    pub result: String,
}

impl HistoryEntry {
    pub fn new(query: impl Into<String>, result: impl Into<String>) -> Self {
        Self::at(Utc::now(), query, result)
    }

    pub fn at(time: DateTime<Utc>, query: impl Into<String>, result: impl Into<String>) -> Self {
        Self { time, query: query.into(), result: result.into() }
    }
}
