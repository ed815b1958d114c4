use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Article from the Finnhub `/news?category=` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketNewsArticle {
    pub headline: String,
    pub source: String,
    pub url: String,
    /// Finnhub sends an empty string when there is no image
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Publish time (Unix seconds)
    #[serde(default)]
    pub datetime: Option<i64>,
}

/// Source block of a NewsAPI article.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsApiSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Article from the NewsAPI `/v2/everything` endpoint.
///
/// Removed articles come back with null titles and urls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiArticle {
    #[serde(default)]
    pub title: Option<String>,
    pub source: NewsApiSource,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Either article shape, as relayed by the news proxy routes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GatewayArticle {
    Market(MarketNewsArticle),
    Search(NewsApiArticle),
}
