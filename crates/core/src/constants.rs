/// Symbols shown when no watchlist is configured.
pub const DEFAULT_WATCHLIST: [&str; 6] = ["NVDA", "NFLX", "ADBE", "INTC", "ORCL", "PYPL"];

/// News category fetched by the refresh workflow.
pub const GENERAL_NEWS_CATEGORY: &str = "general";

/// Maximum number of news items kept after a refresh.
pub const NEWS_LIMIT: usize = 5;

/// Number of points in a synthesized sparkline.
pub const SPARKLINE_SAMPLES: usize = 10;

/// Upper bound (exclusive) of the jitter added to each sparkline point.
pub const SPARKLINE_SPREAD: f64 = 5.0;
