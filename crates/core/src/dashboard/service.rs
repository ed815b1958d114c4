//! Dashboard service.
//!
//! Entry point for everything the page can do: activate, refresh, type,
//! submit a search, and read the current state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use super::refresh::{RefreshOutcome, RefreshWorkflow};
use super::search::{SearchOutcome, SearchState, SearchWorkflow};
use super::{DashboardGateway, DashboardSnapshot, DashboardStore};
use crate::errors::Result;
use crate::events::{DashboardEventSink, NoOpDashboardEventSink};
use crate::quotes::{JitterSparkline, SparklineGenerator};
use crate::watchlist::WatchlistConfig;

#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Run the first refresh. Only the first call does anything; it returns
    /// `None` for every later call.
    async fn activate(&self) -> Option<RefreshOutcome>;

    /// Whether [`activate`](Self::activate) has been called.
    fn is_activated(&self) -> bool;

    /// Run a refresh now, regardless of activation or runs in flight.
    async fn refresh(&self) -> RefreshOutcome;

    /// Search state for what the user has typed so far.
    fn search_state(&self, query: &str) -> SearchState;

    /// Submit a search: fetch the chosen symbol (or the typed query) and put
    /// it at the front of the list.
    async fn submit_search(&self, query: &str, chosen: Option<&str>) -> Result<SearchOutcome>;

    async fn snapshot(&self) -> DashboardSnapshot;
}

pub struct DashboardService {
    watchlist: WatchlistConfig,
    gateway: Arc<dyn DashboardGateway>,
    store: DashboardStore,
    sparkline: Arc<dyn SparklineGenerator>,
    event_sink: Arc<dyn DashboardEventSink>,
    activated: AtomicBool,
}

impl DashboardService {
    pub fn new(watchlist: WatchlistConfig, gateway: Arc<dyn DashboardGateway>) -> Self {
        Self {
            watchlist,
            gateway,
            store: DashboardStore::new(),
            sparkline: Arc::new(JitterSparkline::default()),
            event_sink: Arc::new(NoOpDashboardEventSink),
            activated: AtomicBool::new(false),
        }
    }

    pub fn with_event_sink(mut self, event_sink: Arc<dyn DashboardEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    pub fn with_sparkline(mut self, sparkline: Arc<dyn SparklineGenerator>) -> Self {
        self.sparkline = sparkline;
        self
    }

    fn refresh_workflow(&self) -> RefreshWorkflow<'_> {
        RefreshWorkflow {
            gateway: self.gateway.as_ref(),
            store: &self.store,
            watchlist: &self.watchlist,
            sparkline: self.sparkline.as_ref(),
            events: self.event_sink.as_ref(),
        }
    }

    fn search_workflow(&self) -> SearchWorkflow<'_> {
        SearchWorkflow {
            gateway: self.gateway.as_ref(),
            store: &self.store,
            sparkline: self.sparkline.as_ref(),
            events: self.event_sink.as_ref(),
        }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn activate(&self) -> Option<RefreshOutcome> {
        if self.activated.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(self.refresh_workflow().run().await)
    }

    fn is_activated(&self) -> bool {
        self.activated.load(Ordering::SeqCst)
    }

    async fn refresh(&self) -> RefreshOutcome {
        self.refresh_workflow().run().await
    }

    fn search_state(&self, query: &str) -> SearchState {
        SearchState::new(query, &self.watchlist)
    }

    async fn submit_search(&self, query: &str, chosen: Option<&str>) -> Result<SearchOutcome> {
        let state = self.search_state(query);
        self.search_workflow().submit(&state, chosen).await
    }

    async fn snapshot(&self) -> DashboardSnapshot {
        self.store.snapshot().await
    }
}
