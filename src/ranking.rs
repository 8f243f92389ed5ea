use chrono::{DateTime, SecondsFormat, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A recorded win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub score: u32,
    pub timestamp: DateTime<Utc>,
}

impl RankingEntry {
    pub fn new(score: u32, timestamp: DateTime<Utc>) -> Self {
        Self { score, timestamp }
    }

    pub fn now(score: u32) -> Self {
        Self::new(score, Utc::now())
    }

    /// ISO-8601 with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// In-memory list of wins for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct RankingLog {
    entries: Vec<RankingEntry>,
}

impl RankingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: RankingEntry) {
        self.entries.push(entry);
    }

    /// Entries by score, highest first. Ties keep insertion order.
    pub fn view(&self) -> Vec<&RankingEntry> {
        self.entries
            .iter()
            .sorted_by(|a, b| b.score.cmp(&a.score))
            .collect()
    }

    pub fn best(&self) -> Option<&RankingEntry> {
        self.view().into_iter().next()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.view())
    }
}
