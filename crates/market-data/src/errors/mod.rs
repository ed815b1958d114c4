//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while talking to an upstream gateway.
///
/// None of these are retried. Callers convert them into an `{ "error": .. }`
/// payload or a log line.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The gateway answered with a non-success status, or put an `error`
    /// key in its body.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The gateway body was not the JSON we expected.
    #[error("Failed to parse {provider} response: {message}")]
    Parse {
        /// The provider whose response failed to parse
        provider: String,
        /// Parser message
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    pub(crate) fn provider(provider: &str, message: impl Into<String>) -> Self {
        Self::ProviderError {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn parse(provider: &str, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            provider: provider.to_string(),
            message: err.to_string(),
        }
    }
}
