use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use stocker_market_data::MarketDataError;
use thiserror::Error;
use utoipa::ToSchema;

/// Shown to the user when a search submission fails.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch stock data";

#[derive(Error, Debug)]
pub enum ApiError {
    /// Upstream failure on a proxy route.
    #[error("{0}")]
    Gateway(#[from] MarketDataError),
    /// A search submission could not fetch its quote.
    #[error("{}", SEARCH_FAILED_MESSAGE)]
    SearchFailed,
}

/// Error payload returned by every route: `{ "error": "..." }`.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::SearchFailed => StatusCode::BAD_GATEWAY,
        };
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
