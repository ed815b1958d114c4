//! Server-rendered dashboard page.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use stocker_core::{DashboardSnapshot, NewsItem, Quote, RefreshPhase, SearchOutcome};

use super::dashboard::activated_snapshot;
use crate::{error::SEARCH_FAILED_MESSAGE, main_lib::AppState};

const SPARKLINE_WIDTH: f64 = 120.0;
const SPARKLINE_HEIGHT: f64 = 40.0;

fn render_template<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template render error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", e),
            )
                .into_response()
        }
    }
}

pub struct QuoteCard {
    pub symbol: String,
    pub high: String,
    pub low: String,
    pub price: String,
    pub change: String,
    pub up: bool,
    pub points: String,
}

impl From<&Quote> for QuoteCard {
    fn from(quote: &Quote) -> Self {
        let up = quote.is_up();
        Self {
            symbol: quote.symbol.clone(),
            high: format!("{:.2}", quote.high),
            low: format!("{:.2}", quote.low),
            price: format!("{:.2}", quote.current_price),
            change: format!(
                "{}{:.2}%",
                if up { "+" } else { "" },
                quote.change_percent
            ),
            up,
            points: sparkline_points(&quote.sparkline),
        }
    }
}

pub struct NewsCard {
    pub headline: String,
    pub source: String,
    /// Empty when the article has no usable link
    pub url: String,
    /// Empty when the article has no usable image
    pub image: String,
}

/// Gateway URLs end up in `href`/`src`; anything but http(s) is dropped.
fn web_url(url: &str) -> String {
    let url = url.trim();
    let scheme = url.split_once(':').map(|(scheme, _)| scheme.to_ascii_lowercase());
    match scheme.as_deref() {
        Some("http") | Some("https") => url.to_string(),
        _ => String::new(),
    }
}

impl From<&NewsItem> for NewsCard {
    fn from(item: &NewsItem) -> Self {
        Self {
            headline: item.headline.clone(),
            source: item.source.clone(),
            url: web_url(&item.url),
            image: item.image.as_deref().map(web_url).unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub quotes: Vec<QuoteCard>,
    pub news: Vec<NewsCard>,
    pub loading: bool,
    pub error: bool,
    pub alert: Option<String>,
    pub query: String,
}

impl DashboardPage {
    pub fn new(snapshot: &DashboardSnapshot) -> Self {
        Self {
            quotes: snapshot.quotes.iter().map(QuoteCard::from).collect(),
            news: snapshot.news.iter().map(NewsCard::from).collect(),
            loading: snapshot.phase == RefreshPhase::Loading,
            error: snapshot.error,
            alert: None,
            query: String::new(),
        }
    }
}

/// SVG polyline points scaled into the card's sparkline box. Higher values
/// sit higher; a flat series is drawn across the middle.
pub fn sparkline_points(values: &[f64]) -> String {
    if values.is_empty() {
        return String::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let step = if values.len() > 1 {
        SPARKLINE_WIDTH / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = if range > 0.0 {
                SPARKLINE_HEIGHT - (v - min) / range * SPARKLINE_HEIGHT
            } else {
                SPARKLINE_HEIGHT / 2.0
            };
            format!("{:.1},{:.1}", i as f64 * step, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

async fn index(State(state): State<Arc<AppState>>) -> Response {
    let snapshot = activated_snapshot(&state).await;
    render_template(&DashboardPage::new(&snapshot))
}

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    symbol: String,
    /// Suggestion picked from the list, if any
    choice: Option<String>,
}

async fn search(State(state): State<Arc<AppState>>, Query(form): Query<SearchForm>) -> Response {
    match state
        .dashboard
        .submit_search(&form.symbol, form.choice.as_deref())
        .await
    {
        Ok(SearchOutcome::Skipped) | Ok(SearchOutcome::Prepended { .. }) => {
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::warn!("Search for '{}' failed: {}", form.symbol, e);
            let snapshot = state.dashboard.snapshot().await;
            let mut page = DashboardPage::new(&snapshot);
            page.alert = Some(SEARCH_FAILED_MESSAGE.to_string());
            page.query = form.symbol;
            render_template(&page)
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/search", get(search))
}
