//! Dashboard event types.

use serde::{Deserialize, Serialize};

/// Facts about dashboard state changes, emitted after the store was updated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// A refresh run began loading quotes and news.
    RefreshStarted,

    /// A refresh run settled. Counts are what the store now holds.
    RefreshCompleted {
        quotes: usize,
        news: usize,
        /// Whether the quote batch or the news fetch failed
        failed: bool,
        version: u64,
    },

    /// A searched quote was put at the front of the list.
    QuotePrepended { symbol: String, version: u64 },

    /// A search submission could not fetch its quote.
    SearchFailed { symbol: String, message: String },
}

impl DashboardEvent {
    pub fn refresh_completed(quotes: usize, news: usize, failed: bool, version: u64) -> Self {
        Self::RefreshCompleted {
            quotes,
            news,
            failed,
            version,
        }
    }

    pub fn quote_prepended(symbol: impl Into<String>, version: u64) -> Self {
        Self::QuotePrepended {
            symbol: symbol.into(),
            version,
        }
    }

    pub fn search_failed(symbol: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SearchFailed {
            symbol: symbol.into(),
            message: message.into(),
        }
    }
}
