use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::news::NewsItem;
use crate::quotes::Quote;

/// Whether a refresh is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPhase {
    Idle,
    Loading,
}

/// Read model of the dashboard at one version.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub quotes: Vec<Quote>,
    pub news: Vec<NewsItem>,
    pub phase: RefreshPhase,
    /// Set when the last settled refresh had a failure. Never blocks anything.
    pub error: bool,
    pub version: u64,
}

#[derive(Debug, Default)]
struct DashboardState {
    quotes: Vec<Quote>,
    news: Vec<NewsItem>,
    in_flight: usize,
    error: bool,
    version: u64,
}

impl DashboardState {
    fn bump(&mut self) -> u64 {
        self.version += 1;
        self.version
    }
}

/// Single owner of the displayed quotes and news.
///
/// Both workflows write through these commands and nothing else. Each command
/// is applied atomically to the current state and bumps `version`. There is no
/// coordination between writers beyond that: when a refresh's
/// [`replace_quotes`](Self::replace_quotes) lands after a search's
/// [`prepend_quote`](Self::prepend_quote), the searched quote is gone (last
/// writer wins).
#[derive(Debug, Default)]
pub struct DashboardStore {
    state: RwLock<DashboardState>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        let state = self.state.read().await;
        DashboardSnapshot {
            quotes: state.quotes.clone(),
            news: state.news.clone(),
            phase: if state.in_flight > 0 {
                RefreshPhase::Loading
            } else {
                RefreshPhase::Idle
            },
            error: state.error,
            version: state.version,
        }
    }

    pub async fn version(&self) -> u64 {
        self.state.read().await.version
    }

    /// Replace the whole quote list.
    pub async fn replace_quotes(&self, quotes: Vec<Quote>) -> u64 {
        let mut state = self.state.write().await;
        state.quotes = quotes;
        state.bump()
    }

    /// Put `quote` at the front of the list as it is now.
    ///
    /// An entry with the same symbol is removed first, so symbols stay unique.
    pub async fn prepend_quote(&self, quote: Quote) -> u64 {
        let mut state = self.state.write().await;
        state.quotes.retain(|q| q.symbol != quote.symbol);
        state.quotes.insert(0, quote);
        state.bump()
    }

    /// Replace the whole news list.
    pub async fn replace_news(&self, news: Vec<NewsItem>) -> u64 {
        let mut state = self.state.write().await;
        state.news = news;
        state.bump()
    }

    /// Mark one more refresh run as in flight.
    pub async fn begin_refresh(&self) -> u64 {
        let mut state = self.state.write().await;
        state.in_flight += 1;
        state.bump()
    }

    /// Mark a refresh run as settled and record whether it failed.
    pub async fn finish_refresh(&self, failed: bool) -> u64 {
        let mut state = self.state.write().await;
        state.in_flight = state.in_flight.saturating_sub(1);
        state.error = failed;
        state.bump()
    }
}
