#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::Query,
    http::{HeaderMap, Request, StatusCode},
    response::Response,
    routing::get as route_get,
    Json, Router,
};
use serde_json::{json, Value};
use stocker_core::WatchlistConfig;
use stocker_server::{api::app_router, build_state, config::Config, AppState};
use tower::ServiceExt;

pub const FINNHUB_KEY: &str = "finnhub-test-key";
pub const NEWS_KEY: &str = "news-test-key";

/// Symbol the fake Finnhub answers with an error.
pub const FAILING_SYMBOL: &str = "FAIL";

fn header_is(headers: &HeaderMap, name: &str, expected: &str) -> bool {
    headers.get(name).and_then(|v| v.to_str().ok()) == Some(expected)
}

pub fn price_for(symbol: &str) -> f64 {
    100.0 + symbol.len() as f64
}

async fn quote(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    if !header_is(&headers, "X-Finnhub-Token", FINNHUB_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid API key" })),
        );
    }
    let symbol = params.get("symbol").cloned().unwrap_or_default();
    if symbol == FAILING_SYMBOL {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Symbol lookup failed" })),
        );
    }
    let c = price_for(&symbol);
    (
        StatusCode::OK,
        Json(json!({
            "c": c,
            "d": 1.5,
            "dp": 1.25,
            "h": c + 2.0,
            "l": c - 2.0,
            "o": c - 1.0,
            "pc": c - 1.5,
            "t": 1727884800
        })),
    )
}

async fn market_news(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    if !header_is(&headers, "X-Finnhub-Token", FINNHUB_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid API key" })),
        );
    }
    let category = params.get("category").cloned().unwrap_or_default();
    let articles: Vec<Value> = (0..7)
        .map(|i| {
            let image = if i == 0 { "https://img.example/0.png" } else { "" };
            json!({
                "category": category,
                "headline": format!("Market headline {}", i),
                "source": "Reuters",
                "url": format!("https://news.example/market/{}", i),
                "image": image,
                "summary": "",
                "datetime": 1727884800 + i
            })
        })
        .collect();
    (StatusCode::OK, Json(Value::Array(articles)))
}

async fn everything(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    if !header_is(&headers, "X-Api-Key", NEWS_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "status": "error",
                "code": "apiKeyInvalid",
                "message": "Your API key is invalid or incorrect."
            })),
        );
    }
    let q = params.get("q").cloned().unwrap_or_default();
    let page_size: usize = params
        .get("pageSize")
        .and_then(|v| v.parse().ok())
        .unwrap_or(20);
    let articles: Vec<Value> = (0..page_size)
        .map(|i| {
            json!({
                "source": { "id": null, "name": "Wire" },
                "title": format!("{} story {}", q, i),
                "url": format!("https://wire.example/{}/{}", q, i),
                "urlToImage": null,
                "description": null,
                "publishedAt": "2024-10-02T12:00:00Z"
            })
        })
        .collect();
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "totalResults": 100, "articles": articles })),
    )
}

/// Serves fake Finnhub (`/finnhub`) and NewsAPI (`/newsapi`) on an
/// ephemeral port and returns the base URL.
pub async fn spawn_gateways() -> String {
    let router = Router::new()
        .route("/finnhub/quote", route_get(quote))
        .route("/finnhub/news", route_get(market_news))
        .route("/newsapi/everything", route_get(everything));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn test_config(base_url: &str) -> Config {
    Config {
        finnhub_api_key: FINNHUB_KEY.to_string(),
        news_api_key: NEWS_KEY.to_string(),
        finnhub_url: format!("{}/finnhub", base_url),
        news_api_url: format!("{}/newsapi", base_url),
        watchlist: WatchlistConfig::new(["NVDA", "NFLX", "ADBE"]),
        activate_on_start: false,
        ..Config::default()
    }
}

pub async fn test_app() -> (Router, Arc<AppState>) {
    let base_url = spawn_gateways().await;
    test_app_with(test_config(&base_url))
}

pub fn test_app_with(config: Config) -> (Router, Arc<AppState>) {
    let state = build_state(&config).unwrap();
    (app_router(state.clone(), &config), state)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
