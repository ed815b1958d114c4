//! Gateway trait definitions.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::MarketDataError;

/// Common identity of every gateway client.
pub trait GatewayProvider: Send + Sync {
    /// Constant identifier such as "FINNHUB". Used in errors and logs.
    fn id(&self) -> &'static str;
}

/// Latest quote lookup by ticker symbol.
#[async_trait]
pub trait QuoteProvider: GatewayProvider {
    /// Fetch the latest quote for `symbol`.
    ///
    /// The symbol is forwarded as given, empty or not. Returns the gateway's
    /// JSON body verbatim.
    async fn latest_quote(&self, symbol: &str) -> Result<Value, MarketDataError>;
}

/// Free-text article search.
#[async_trait]
pub trait NewsProvider: GatewayProvider {
    /// Search recent articles mentioning `query`, newest first.
    ///
    /// Returns the article array verbatim, capped by the gateway's own page size.
    async fn search_news(&self, query: &str) -> Result<Value, MarketDataError>;
}

/// Category news listing (e.g. "general").
#[async_trait]
pub trait MarketNewsProvider: GatewayProvider {
    /// List the latest articles of `category`, in gateway order.
    async fn market_news(&self, category: &str) -> Result<Value, MarketDataError>;
}
