use log::{error, info};
use serde::Serialize;

use super::{DashboardGateway, DashboardStore};
use crate::errors::Result;
use crate::events::{DashboardEvent, DashboardEventSink};
use crate::quotes::{Quote, SparklineGenerator};
use crate::watchlist::WatchlistConfig;

/// What the user has typed and what it matches.
///
/// `suggestions` is always derived from `query` and the watchlist; the only
/// way to change either is [`set_query`](Self::set_query).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    query: String,
    suggestions: Vec<String>,
}

impl SearchState {
    pub fn new(query: impl Into<String>, watchlist: &WatchlistConfig) -> Self {
        let mut state = Self::default();
        state.set_query(query, watchlist);
        state
    }

    pub fn set_query(&mut self, query: impl Into<String>, watchlist: &WatchlistConfig) {
        self.query = query.into();
        self.suggestions = watchlist.suggestions(&self.query);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Symbol a submission should fetch: the chosen suggestion if any, else
    /// the typed query. Upper-cased; `None` when both are blank.
    pub fn effective_symbol(&self, chosen: Option<&str>) -> Option<String> {
        let symbol = chosen
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.query.trim());
        if symbol.is_empty() {
            None
        } else {
            Some(symbol.to_uppercase())
        }
    }
}

/// Result of a search submission.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// Nothing to search for.
    Skipped,
    /// The quote is now first in the list.
    Prepended { quote: Quote, version: u64 },
}

/// Fetches one quote on explicit submit and prepends it.
pub(crate) struct SearchWorkflow<'a> {
    pub gateway: &'a dyn DashboardGateway,
    pub store: &'a DashboardStore,
    pub sparkline: &'a dyn SparklineGenerator,
    pub events: &'a dyn DashboardEventSink,
}

impl SearchWorkflow<'_> {
    /// On failure the list is left as it was and the error is returned for
    /// the caller to show.
    pub async fn submit(
        &self,
        state: &SearchState,
        chosen: Option<&str>,
    ) -> Result<SearchOutcome> {
        let Some(symbol) = state.effective_symbol(chosen) else {
            return Ok(SearchOutcome::Skipped);
        };

        match self.fetch(&symbol).await {
            Ok(quote) => {
                let version = self.store.prepend_quote(quote.clone()).await;
                info!("Added {} to the dashboard (version {})", symbol, version);
                self.events.emit(DashboardEvent::quote_prepended(symbol, version));
                Ok(SearchOutcome::Prepended { quote, version })
            }
            Err(e) => {
                error!("Search for {} failed: {}", symbol, e);
                self.events.emit(DashboardEvent::search_failed(symbol, e.to_string()));
                Err(e)
            }
        }
    }

    async fn fetch(&self, symbol: &str) -> Result<Quote> {
        let body = self.gateway.quote(symbol).await?;
        Quote::from_gateway(symbol, body, self.sparkline)
    }
}
