//! Proxy layer: forwards requests to the gateways with the server-held
//! credentials and hands back the upstream body.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use stocker_core::DashboardGateway;
use stocker_market_data::provider::GatewayProvider;
use stocker_market_data::{
    FinnhubProvider, MarketDataError, MarketNewsProvider, NewsApiProvider, NewsProvider,
    QuoteProvider,
};

use crate::config::Config;

#[derive(Clone)]
pub struct ProxyLayer {
    quotes: Arc<dyn QuoteProvider>,
    news: Arc<dyn NewsProvider>,
    market_news: Arc<dyn MarketNewsProvider>,
}

impl ProxyLayer {
    pub fn new(
        quotes: Arc<dyn QuoteProvider>,
        news: Arc<dyn NewsProvider>,
        market_news: Arc<dyn MarketNewsProvider>,
    ) -> Self {
        Self {
            quotes,
            news,
            market_news,
        }
    }

    /// Builds the Finnhub and NewsAPI clients. Finnhub serves both quotes and
    /// market news, so one client backs two slots.
    pub fn from_config(config: &Config) -> Self {
        let finnhub = Arc::new(
            FinnhubProvider::new(config.finnhub_api_key.clone())
                .with_base_url(config.finnhub_url.clone()),
        );
        let news = Arc::new(
            NewsApiProvider::new(config.news_api_key.clone())
                .with_base_url(config.news_api_url.clone()),
        );
        Self::new(finnhub.clone(), news, finnhub)
    }

    pub async fn quote(&self, symbol: &str) -> Result<Value, MarketDataError> {
        tracing::debug!("Proxying quote for '{}' to {}", symbol, self.quotes.id());
        self.quotes.latest_quote(symbol).await
    }

    pub async fn company_news(&self, company: &str) -> Result<Value, MarketDataError> {
        tracing::debug!("Proxying news search '{}' to {}", company, self.news.id());
        self.news.search_news(company).await
    }

    pub async fn market_news(&self, category: &str) -> Result<Value, MarketDataError> {
        tracing::debug!(
            "Proxying '{}' market news to {}",
            category,
            self.market_news.id()
        );
        self.market_news.market_news(category).await
    }
}

#[async_trait]
impl DashboardGateway for ProxyLayer {
    async fn quote(&self, symbol: &str) -> stocker_core::Result<Value> {
        Ok(ProxyLayer::quote(self, symbol).await?)
    }

    async fn market_news(&self, category: &str) -> stocker_core::Result<Value> {
        Ok(ProxyLayer::market_news(self, category).await?)
    }
}
