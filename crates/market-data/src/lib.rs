//! Stocker Market Data Crate
//!
//! Thin clients for the upstream services the dashboard depends on.
//!
//! # Overview
//!
//! - Finnhub: latest quote by symbol (`/quote`) and market news by category (`/news`)
//! - NewsAPI: free-text article search (`/v2/everything`)
//!
//! Every client holds its credential from construction time and sends it as a
//! request header. Responses are relayed as raw JSON so the proxy routes can
//! return the upstream body verbatim; typed wire models live in [`models`] for
//! callers that need to normalize them.
//!
//! ```text
//! +------------------+      +--------------------+
//! |  Proxy handlers  | ---> |  QuoteProvider     |  (Finnhub /quote)
//! |  (stocker-server)| ---> |  NewsProvider      |  (NewsAPI /everything)
//! |                  | ---> |  MarketNewsProvider|  (Finnhub /news)
//! +------------------+      +--------------------+
//! ```

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{GatewayArticle, MarketNewsArticle, NewsApiArticle, NewsApiSource, QuoteResponse};
pub use provider::finnhub::FinnhubProvider;
pub use provider::news_api::NewsApiProvider;
pub use provider::{MarketNewsProvider, NewsProvider, QuoteProvider};
