//! Core error types for Stocker.

use stocker_market_data::MarketDataError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for dashboard operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    /// The gateway answered, but not with something we can show as a quote.
    #[error("Invalid quote for '{symbol}': {reason}")]
    InvalidQuote { symbol: String, reason: String },

    #[error("Invalid news batch: {0}")]
    InvalidNews(String),
}
