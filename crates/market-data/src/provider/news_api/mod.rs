//! NewsAPI gateway client.
//!
//! Free-text article search via `/v2/everything`, newest first, five per page.
//! API documentation: https://newsapi.org/docs/endpoints/everything

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::provider::{build_client, GatewayProvider, NewsProvider};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
const PROVIDER_ID: &str = "NEWS_API";

/// Articles per search, enforced by the gateway's `pageSize`.
pub const PAGE_SIZE: usize = 5;

/// Error response from NewsAPI (`{"status":"error","code":..,"message":..}`)
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    code: Option<String>,
    message: Option<String>,
}

pub struct NewsApiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: build_client(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl GatewayProvider for NewsApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }
}

#[async_trait]
impl NewsProvider for NewsApiProvider {
    async fn search_news(&self, query: &str) -> Result<Value, MarketDataError> {
        let url = format!("{}/everything", self.base_url);
        let page_size = PAGE_SIZE.to_string();

        debug!("Searching NewsAPI for '{}'", query);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .query(&[
                ("q", query),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(ErrorResponse {
                    code,
                    message: Some(message),
                }) => match code {
                    Some(code) => format!("{}: {}", code, message),
                    None => message,
                },
                _ => format!("HTTP {} - {}", status, body),
            };
            return Err(MarketDataError::provider(PROVIDER_ID, message));
        }

        let mut value: Value =
            serde_json::from_str(&body).map_err(|e| MarketDataError::parse(PROVIDER_ID, e))?;

        match value.get_mut("articles").map(Value::take) {
            Some(articles @ Value::Array(_)) => Ok(articles),
            _ => Err(MarketDataError::parse(
                PROVIDER_ID,
                "response has no articles array",
            )),
        }
    }
}
