//! Stocker Core - dashboard entities, state and workflows.
//!
//! The crate knows nothing about HTTP. Gateway access goes through the
//! [`dashboard::DashboardGateway`] trait, which the server implements on top
//! of its proxy layer.

pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod events;
pub mod news;
pub mod quotes;
pub mod watchlist;

pub use dashboard::{
    DashboardGateway, DashboardService, DashboardServiceTrait, DashboardSnapshot, DashboardStore,
    RefreshOutcome, RefreshPhase, SearchOutcome, SearchState,
};
pub use news::NewsItem;
pub use quotes::{JitterSparkline, Quote, SparklineGenerator};
pub use watchlist::WatchlistConfig;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
