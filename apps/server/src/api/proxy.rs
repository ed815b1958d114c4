use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
pub struct StockQuery {
    #[serde(default)]
    symbol: String,
}

#[derive(Deserialize)]
pub struct NewsQuery {
    company: Option<String>,
    category: Option<String>,
}

/// Relay the Finnhub quote for `symbol`. The symbol is not validated.
#[utoipa::path(
    get,
    path = "/api/stock",
    params(("symbol" = String, Query, description = "Ticker symbol, forwarded as given")),
    responses(
        (status = 200, description = "Gateway quote body"),
        (status = 500, description = "Gateway failure", body = crate::error::ErrorBody)
    )
)]
pub async fn get_stock(
    State(state): State<Arc<AppState>>,
    Query(q): Query<StockQuery>,
) -> ApiResult<Json<Value>> {
    let body = state.proxy.quote(&q.symbol).await?;
    Ok(Json(body))
}

/// Relay company news, or market news when only `category` is given.
#[utoipa::path(
    get,
    path = "/api/news",
    params(
        ("company" = Option<String>, Query, description = "Free-text news search"),
        ("category" = Option<String>, Query, description = "Market news category, used when company is absent")
    ),
    responses(
        (status = 200, description = "Article array"),
        (status = 500, description = "Gateway failure", body = crate::error::ErrorBody)
    )
)]
pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(q): Query<NewsQuery>,
) -> ApiResult<Json<Value>> {
    let body = match (q.company, q.category) {
        (None, Some(category)) => state.proxy.market_news(&category).await?,
        (company, _) => {
            state
                .proxy
                .company_news(company.as_deref().unwrap_or_default())
                .await?
        }
    };
    Ok(Json(body))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stock", get(get_stock))
        .route("/news", get(get_news))
}
