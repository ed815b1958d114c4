use serde::{Deserialize, Serialize};

/// Response from the Finnhub `/quote` endpoint.
///
/// Finnhub answers unknown symbols with zeros and nulls rather than an error,
/// so every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Current price
    pub c: Option<f64>,
    /// Change
    pub d: Option<f64>,
    /// Percent change
    pub dp: Option<f64>,
    /// High price of the day
    pub h: Option<f64>,
    /// Low price of the day
    pub l: Option<f64>,
    /// Open price of the day
    pub o: Option<f64>,
    /// Previous close
    pub pc: Option<f64>,
    /// Timestamp (Unix)
    pub t: Option<i64>,
}
