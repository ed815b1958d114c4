//! The fixed set of symbols shown by default.

use std::sync::Arc;

use crate::constants::DEFAULT_WATCHLIST;

/// Ordered, immutable list of ticker symbols.
///
/// Defines both the quotes loaded by a refresh and the universe searched for
/// suggestions. Cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatchlistConfig {
    symbols: Arc<[String]>,
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WATCHLIST)
    }
}

impl WatchlistConfig {
    /// Build a watchlist from raw symbols.
    ///
    /// Symbols are trimmed and upper-cased; empty entries and repeats are
    /// dropped, keeping the first occurrence.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for symbol in symbols {
            let symbol = symbol.as_ref().trim().to_uppercase();
            if !symbol.is_empty() && !unique.contains(&symbol) {
                unique.push(symbol);
            }
        }
        Self {
            symbols: unique.into(),
        }
    }

    /// Parse a comma separated list such as `"aapl, msft,GOOG"`.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Watchlist entries containing `query`, ignoring case, in watchlist order.
    /// An empty query suggests nothing.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.symbols
            .iter()
            .filter(|s| s.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
