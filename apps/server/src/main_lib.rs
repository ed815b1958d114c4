use std::sync::Arc;

use stocker_core::{DashboardService, DashboardServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    config::Config,
    events::{EventBus, EventBusSink},
    proxy::ProxyLayer,
};

pub struct AppState {
    pub proxy: ProxyLayer,
    pub dashboard: Arc<dyn DashboardServiceTrait>,
    pub event_bus: EventBus,
}

pub fn init_tracing() {
    let log_format = std::env::var("STOCKER_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    if config.finnhub_api_key.is_empty() {
        tracing::warn!("FINNHUB_API_KEY is not set; quote and market news requests will fail");
    }
    if config.news_api_key.is_empty() {
        tracing::warn!("NEWS_API_KEY is not set; company news requests will fail");
    }
    if config.watchlist.is_empty() {
        anyhow::bail!("Watchlist is empty");
    }

    let event_bus = EventBus::new(256);
    let proxy = ProxyLayer::from_config(config);

    let dashboard = DashboardService::new(config.watchlist.clone(), Arc::new(proxy.clone()))
        .with_event_sink(Arc::new(EventBusSink::new(event_bus.clone())));
    tracing::info!(
        "Dashboard watchlist: {}",
        config.watchlist.symbols().join(", ")
    );

    Ok(Arc::new(AppState {
        proxy,
        dashboard: Arc::new(dashboard),
        event_bus,
    }))
}

/// Run the first refresh in the background.
pub fn spawn_activation(state: Arc<AppState>) {
    tokio::spawn(async move {
        if let Some(outcome) = state.dashboard.activate().await {
            tracing::info!(
                "Initial refresh settled: {} quotes, {} news{}",
                outcome.quotes_loaded.unwrap_or(0),
                outcome.news_loaded.unwrap_or(0),
                if outcome.failed() { " (with errors)" } else { "" }
            );
        }
    });
}
