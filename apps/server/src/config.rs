use std::net::SocketAddr;

use anyhow::Context;
use stocker_core::WatchlistConfig;
use stocker_market_data::provider::{finnhub, news_api};

/// Process configuration, read once at startup.
///
/// Gateway credentials live here and are handed to the gateway clients when
/// they are built; nothing reads them from the environment afterwards.
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub static_dir: String,
    pub finnhub_api_key: String,
    pub news_api_key: String,
    pub finnhub_url: String,
    pub news_api_url: String,
    pub watchlist: WatchlistConfig,
    /// Refresh at boot instead of on the first page view
    pub activate_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec!["*".to_string()],
            static_dir: "public".to_string(),
            finnhub_api_key: String::new(),
            news_api_key: String::new(),
            finnhub_url: finnhub::DEFAULT_BASE_URL.to_string(),
            news_api_url: news_api::DEFAULT_BASE_URL.to_string(),
            watchlist: WatchlistConfig::default(),
            activate_on_start: true,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("STOCKER_LISTEN_ADDR") {
            Ok(addr) => addr
                .parse()
                .with_context(|| format!("Invalid STOCKER_LISTEN_ADDR: {}", addr))?,
            Err(_) => defaults.listen_addr,
        };
        let cors_allow = std::env::var("STOCKER_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let static_dir = std::env::var("STOCKER_STATIC_DIR").unwrap_or(defaults.static_dir);
        let finnhub_api_key = std::env::var("FINNHUB_API_KEY").unwrap_or_default();
        let news_api_key = std::env::var("NEWS_API_KEY").unwrap_or_default();
        let finnhub_url = std::env::var("STOCKER_FINNHUB_URL").unwrap_or(defaults.finnhub_url);
        let news_api_url = std::env::var("STOCKER_NEWS_API_URL").unwrap_or(defaults.news_api_url);
        let watchlist = std::env::var("STOCKER_WATCHLIST")
            .ok()
            .map(|list| WatchlistConfig::parse(&list))
            .filter(|w| !w.is_empty())
            .unwrap_or(defaults.watchlist);
        let activate_on_start = std::env::var("STOCKER_ACTIVATE_ON_START")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Ok(Self {
            listen_addr,
            cors_allow,
            static_dir,
            finnhub_api_key,
            news_api_key,
            finnhub_url,
            news_api_url,
            watchlist,
            activate_on_start,
        })
    }
}
