use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use stocker_core::{DashboardSnapshot, SearchOutcome};
use utoipa::ToSchema;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize, ToSchema)]
pub struct SearchRequest {
    /// Suggestion the user picked. Wins over `query` when non-empty.
    pub symbol: Option<String>,
    /// Text typed in the search box.
    pub query: Option<String>,
}

#[derive(Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    q: String,
}

/// Current snapshot, running the first refresh if nothing has yet.
pub(crate) async fn activated_snapshot(state: &AppState) -> DashboardSnapshot {
    if !state.dashboard.is_activated() {
        state.dashboard.activate().await;
    }
    state.dashboard.snapshot().await
}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses((status = 200, description = "Quotes, news, phase, error flag and version"))
)]
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardSnapshot> {
    Json(activated_snapshot(&state).await)
}

#[utoipa::path(
    get,
    path = "/api/dashboard/suggestions",
    params(("q" = String, Query, description = "Text typed so far")),
    responses((status = 200, description = "Matching watchlist symbols", body = [String]))
)]
pub async fn get_suggestions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SuggestionQuery>,
) -> Json<Vec<String>> {
    let search = state.dashboard.search_state(&query.q);
    Json(search.suggestions().to_vec())
}

#[utoipa::path(
    post,
    path = "/api/dashboard/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Snapshot with the searched quote first"),
        (status = 204, description = "Nothing to search for"),
        (status = 502, description = "Quote could not be fetched", body = crate::error::ErrorBody)
    )
)]
pub async fn submit_search(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchRequest>,
) -> ApiResult<Response> {
    let query = body.query.unwrap_or_default();
    match state
        .dashboard
        .submit_search(&query, body.symbol.as_deref())
        .await
    {
        Ok(SearchOutcome::Skipped) => Ok(StatusCode::NO_CONTENT.into_response()),
        Ok(SearchOutcome::Prepended { .. }) => {
            Ok(Json(state.dashboard.snapshot().await).into_response())
        }
        Err(e) => {
            tracing::warn!("Search submission failed: {}", e);
            Err(ApiError::SearchFailed)
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/dashboard/refresh",
    responses((status = 202, description = "Refresh started"))
)]
pub async fn trigger_refresh(State(state): State<Arc<AppState>>) -> StatusCode {
    tokio::spawn(async move {
        let outcome = state.dashboard.refresh().await;
        tracing::info!("Manual refresh settled: {:?}", outcome);
    });
    StatusCode::ACCEPTED
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/suggestions", get(get_suggestions))
        .route("/dashboard/search", post(submit_search))
        .route("/dashboard/refresh", post(trigger_refresh))
}
