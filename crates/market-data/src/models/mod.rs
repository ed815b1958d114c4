//! Gateway wire models
//!
//! - `quote` - Finnhub `/quote` response (`QuoteResponse`)
//! - `news` - Article shapes from Finnhub market news and NewsAPI search

mod news;
mod quote;

pub use news::{GatewayArticle, MarketNewsArticle, NewsApiArticle, NewsApiSource};
pub use quote::QuoteResponse;
