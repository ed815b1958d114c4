use chrono::{DateTime, TimeZone, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stocker_market_data::{GatewayArticle, MarketNewsArticle, NewsApiArticle};

use crate::errors::{Error, Result};

/// A news article as displayed on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub headline: String,
    pub source: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<MarketNewsArticle> for NewsItem {
    fn from(article: MarketNewsArticle) -> Self {
        Self {
            headline: article.headline,
            source: article.source,
            url: article.url,
            image: non_empty(article.image),
            summary: non_empty(article.summary),
            published_at: article
                .datetime
                .and_then(|ts| Utc.timestamp_opt(ts, 0).single()),
        }
    }
}

impl From<NewsApiArticle> for NewsItem {
    fn from(article: NewsApiArticle) -> Self {
        Self {
            headline: article.title.unwrap_or_default(),
            source: article.source.name.unwrap_or_default(),
            url: article.url.unwrap_or_default(),
            image: non_empty(article.url_to_image),
            summary: non_empty(article.description),
            published_at: article.published_at,
        }
    }
}

impl From<GatewayArticle> for NewsItem {
    fn from(article: GatewayArticle) -> Self {
        match article {
            GatewayArticle::Market(a) => a.into(),
            GatewayArticle::Search(a) => a.into(),
        }
    }
}

/// Take the first `limit` articles of a gateway batch, in gateway order.
///
/// Entries that match neither article shape are skipped with a warning, so
/// the result can be shorter than `limit`.
pub fn news_from_gateway(body: Value, limit: usize) -> Result<Vec<NewsItem>> {
    let Value::Array(entries) = body else {
        return Err(Error::InvalidNews("expected an array of articles".to_string()));
    };

    let items = entries
        .into_iter()
        .take(limit)
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value::<GatewayArticle>(entry) {
            Ok(article) => Some(NewsItem::from(article)),
            Err(e) => {
                warn!("Skipping news entry {}: {}", i, e);
                None
            }
        })
        .collect();

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn market_article(n: usize) -> Value {
        json!({
            "headline": format!("Headline {}", n),
            "source": "Reuters",
            "url": format!("https://news.example/{}", n),
            "image": "",
            "datetime": 1727884800
        })
    }

    #[test]
    fn test_truncates_to_limit_in_order() {
        let batch = Value::Array((0..8).map(market_article).collect());

        let items = news_from_gateway(batch, 5).unwrap();

        assert_eq!(items.len(), 5);
        let headlines: Vec<_> = items.iter().map(|i| i.headline.as_str()).collect();
        assert_eq!(
            headlines,
            ["Headline 0", "Headline 1", "Headline 2", "Headline 3", "Headline 4"]
        );
    }

    #[test]
    fn test_empty_image_becomes_none() {
        let items = news_from_gateway(json!([market_article(1)]), 5).unwrap();

        assert_eq!(items[0].image, None);
        assert_eq!(items[0].source, "Reuters");
        assert!(items[0].published_at.is_some());
    }

    #[test]
    fn test_news_api_articles_are_mapped() {
        let batch = json!([{
            "source": { "id": null, "name": "The Verge" },
            "title": "Intel cuts guidance",
            "url": "https://news.example/intel",
            "urlToImage": "https://image.example/intel.png",
            "publishedAt": "2024-10-02T12:30:00Z"
        }]);

        let items = news_from_gateway(batch, 5).unwrap();

        assert_eq!(items[0].headline, "Intel cuts guidance");
        assert_eq!(items[0].source, "The Verge");
        assert_eq!(items[0].image.as_deref(), Some("https://image.example/intel.png"));
    }

    #[test]
    fn test_unreadable_entries_are_skipped() {
        let batch = json!([market_article(0), { "nothing": "useful" }, market_article(2)]);

        let items = news_from_gateway(batch, 5).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].headline, "Headline 2");
    }

    #[test]
    fn test_non_array_is_invalid() {
        let err = news_from_gateway(json!({ "error": "nope" }), 5).unwrap_err();
        assert!(matches!(err, Error::InvalidNews(_)));
    }
}
