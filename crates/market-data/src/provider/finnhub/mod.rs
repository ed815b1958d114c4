//! Finnhub gateway client.
//!
//! - Latest quote via `/quote`
//! - Market news by category via `/news`
//!
//! API documentation: https://finnhub.io/docs/api

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::provider::{build_client, GatewayProvider, MarketNewsProvider, QuoteProvider};

pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";
const PROVIDER_ID: &str = "FINNHUB";

/// Error response from Finnhub
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// Finnhub quote and market news client.
pub struct FinnhubProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FinnhubProvider {
    /// Create a new Finnhub client with the given API key.
    pub fn new(api_key: String) -> Self {
        Self {
            client: build_client(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at another base URL (self-hosted mirror, test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Make a GET request to the Finnhub API and return the JSON body.
    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, MarketDataError> {
        let url = format!("{}{}", self.base_url, endpoint);

        debug!("Finnhub request: {} with {} params", endpoint, params.len());

        // Token goes in a header so it never shows up in URLs or access logs
        let response = self
            .client
            .get(&url)
            .header("X-Finnhub-Token", &self.api_key)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if let Ok(ErrorResponse { error: Some(message) }) = serde_json::from_str(&body) {
                return Err(MarketDataError::provider(PROVIDER_ID, message));
            }
            return Err(MarketDataError::provider(
                PROVIDER_ID,
                format!("HTTP {} - {}", status, body),
            ));
        }

        let value: Value =
            serde_json::from_str(&body).map_err(|e| MarketDataError::parse(PROVIDER_ID, e))?;

        // Finnhub sometimes reports errors with a 200 status
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return Err(MarketDataError::provider(PROVIDER_ID, message));
        }

        Ok(value)
    }
}

impl GatewayProvider for FinnhubProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }
}

#[async_trait]
impl QuoteProvider for FinnhubProvider {
    async fn latest_quote(&self, symbol: &str) -> Result<Value, MarketDataError> {
        debug!("Fetching latest quote for '{}' from Finnhub", symbol);
        self.fetch("/quote", &[("symbol", symbol)]).await
    }
}

#[async_trait]
impl MarketNewsProvider for FinnhubProvider {
    async fn market_news(&self, category: &str) -> Result<Value, MarketDataError> {
        debug!("Fetching '{}' market news from Finnhub", category);
        let value = self.fetch("/news", &[("category", category)]).await?;
        if !value.is_array() {
            return Err(MarketDataError::parse(
                PROVIDER_ID,
                "expected an array of news articles",
            ));
        }
        Ok(value)
    }
}
