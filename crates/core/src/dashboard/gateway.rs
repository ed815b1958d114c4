use async_trait::async_trait;
use serde_json::Value;

use crate::errors::Result;

/// Upstream data as the dashboard workflows see it.
///
/// Implemented by the server's proxy layer, so workflow traffic takes the same
/// path (and the same credentials) as the public proxy routes.
#[async_trait]
pub trait DashboardGateway: Send + Sync {
    /// Raw quote body for `symbol`.
    async fn quote(&self, symbol: &str) -> Result<Value>;

    /// Raw article array for a news category.
    async fn market_news(&self, category: &str) -> Result<Value>;
}
