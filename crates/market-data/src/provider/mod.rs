//! Gateway clients.
//!
//! Each client implements one or more of the traits below. The traits return
//! the upstream JSON body untouched; normalization is the caller's concern.

mod traits;

pub mod finnhub;
pub mod news_api;

pub use traits::{GatewayProvider, MarketNewsProvider, NewsProvider, QuoteProvider};

/// User agent sent to every gateway. NewsAPI rejects requests without one.
pub(crate) const USER_AGENT: &str = concat!("stocker/", env!("CARGO_PKG_VERSION"));

pub(crate) fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
