// Analytics - Local click counters and recent search history
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

pub const MAX_SEARCH_HISTORY: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub term: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsState {
    pub clicks: BTreeMap<String, u64>,
    pub searches: VecDeque<SearchEntry>,
}

impl AnalyticsState {
    /// Returns the new count for `id`.
    pub fn record_click(&mut self, id: &str) -> u64 {
        let count = self.clicks.entry(id.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Append a search term, evicting the oldest entries past the cap.
    /// Blank terms are not recorded; returns whether anything changed.
    pub fn record_search(&mut self, term: &str, timestamp: i64) -> bool {
        if term.trim().is_empty() {
            return false;
        }

        self.searches.push_back(SearchEntry {
            term: term.to_string(),
            timestamp,
        });
        while self.searches.len() > MAX_SEARCH_HISTORY {
            self.searches.pop_front();
        }
        true
    }
}
