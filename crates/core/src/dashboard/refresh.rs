use futures::future::join_all;
use log::{debug, error, warn};

use super::{DashboardGateway, DashboardStore};
use crate::constants::{GENERAL_NEWS_CATEGORY, NEWS_LIMIT};
use crate::errors::Result;
use crate::events::{DashboardEvent, DashboardEventSink};
use crate::news::{news_from_gateway, NewsItem};
use crate::quotes::{Quote, SparklineGenerator};
use crate::watchlist::WatchlistConfig;

/// What one refresh run did.
///
/// `None` means that half failed and the store kept its previous list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub quotes_loaded: Option<usize>,
    pub news_loaded: Option<usize>,
}

impl RefreshOutcome {
    pub fn failed(&self) -> bool {
        self.quotes_loaded.is_none() || self.news_loaded.is_none()
    }
}

/// Loads the watchlist quotes and the general news batch.
pub(crate) struct RefreshWorkflow<'a> {
    pub gateway: &'a dyn DashboardGateway,
    pub store: &'a DashboardStore,
    pub watchlist: &'a WatchlistConfig,
    pub sparkline: &'a dyn SparklineGenerator,
    pub events: &'a dyn DashboardEventSink,
}

impl RefreshWorkflow<'_> {
    /// Run once to completion. Overlapping runs are independent.
    pub async fn run(&self) -> RefreshOutcome {
        self.store.begin_refresh().await;
        self.events.emit(DashboardEvent::RefreshStarted);

        let (quotes, news) = tokio::join!(self.load_quotes(), self.load_news());

        let mut outcome = RefreshOutcome::default();

        match quotes {
            Ok(quotes) => {
                outcome.quotes_loaded = Some(quotes.len());
                self.store.replace_quotes(quotes).await;
            }
            Err(e) => error!("Failed to load watchlist quotes: {}", e),
        }

        match news {
            Ok(news) => {
                outcome.news_loaded = Some(news.len());
                self.store.replace_news(news).await;
            }
            Err(e) => error!("Failed to load market news: {}", e),
        }

        let version = self.store.finish_refresh(outcome.failed()).await;
        let snapshot = self.store.snapshot().await;
        self.events.emit(DashboardEvent::refresh_completed(
            snapshot.quotes.len(),
            snapshot.news.len(),
            outcome.failed(),
            version,
        ));

        debug!("Refresh settled at version {}: {:?}", version, outcome);
        outcome
    }

    /// One request per watchlist symbol, all in flight together.
    ///
    /// Results come back in watchlist order whatever order the responses
    /// arrive in. A single failure fails the batch.
    async fn load_quotes(&self) -> Result<Vec<Quote>> {
        let requests = self.watchlist.symbols().iter().map(|symbol| async move {
            let body = self.gateway.quote(symbol).await?;
            Quote::from_gateway(symbol.as_str(), body, self.sparkline)
        });

        let mut quotes = Vec::with_capacity(self.watchlist.len());
        let mut first_error = None;
        for (symbol, result) in self.watchlist.symbols().iter().zip(join_all(requests).await) {
            match result {
                Ok(quote) => quotes.push(quote),
                Err(e) => {
                    warn!("Quote for {} failed: {}", symbol, e);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(quotes),
        }
    }

    async fn load_news(&self) -> Result<Vec<NewsItem>> {
        let body = self.gateway.market_news(GENERAL_NEWS_CATEGORY).await?;
        news_from_gateway(body, NEWS_LIMIT)
    }
}
