use serde::{Deserialize, Serialize};
use serde_json::Value;
use stocker_market_data::QuoteResponse;

use super::SparklineGenerator;
use crate::errors::{Error, Result};

/// A quote as displayed on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub current_price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub high: f64,
    pub low: f64,
    pub sparkline: Vec<f64>,
}

impl Quote {
    /// Build a quote from a raw gateway body.
    ///
    /// The body must carry a current price (`c`). Missing change, high and low
    /// values are shown as zero, which is what the gateway sends for symbols
    /// it does not know.
    pub fn from_gateway(
        symbol: impl Into<String>,
        body: Value,
        sparkline: &dyn SparklineGenerator,
    ) -> Result<Self> {
        let symbol = symbol.into();

        if let Some(message) = body.get("error").and_then(Value::as_str) {
            return Err(Error::InvalidQuote {
                symbol,
                reason: message.to_string(),
            });
        }

        let response: QuoteResponse = match serde_json::from_value(body) {
            Ok(response) => response,
            Err(e) => {
                return Err(Error::InvalidQuote {
                    symbol,
                    reason: e.to_string(),
                })
            }
        };

        let Some(current_price) = response.c else {
            return Err(Error::InvalidQuote {
                symbol,
                reason: "no current price".to_string(),
            });
        };

        Ok(Self {
            symbol,
            current_price,
            change: response.d.unwrap_or_default(),
            change_percent: response.dp.unwrap_or_default(),
            high: response.h.unwrap_or_default(),
            low: response.l.unwrap_or_default(),
            sparkline: sparkline.generate(current_price),
        })
    }

    /// Whether the quote closed above the previous close.
    pub fn is_up(&self) -> bool {
        self.change_percent > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Flat;

    impl SparklineGenerator for Flat {
        fn generate(&self, current_price: f64) -> Vec<f64> {
            vec![current_price; 3]
        }
    }

    #[test]
    fn test_from_gateway_maps_fields() {
        let body = json!({ "c": 120.5, "d": -1.25, "dp": -1.03, "h": 123.0, "l": 119.75, "o": 122.0 });

        let quote = Quote::from_gateway("NVDA", body, &Flat).unwrap();

        assert_eq!(quote.symbol, "NVDA");
        assert_eq!(quote.current_price, 120.5);
        assert_eq!(quote.change, -1.25);
        assert_eq!(quote.change_percent, -1.03);
        assert_eq!(quote.high, 123.0);
        assert_eq!(quote.low, 119.75);
        assert_eq!(quote.sparkline, vec![120.5; 3]);
        assert!(!quote.is_up());
    }

    #[test]
    fn test_unknown_symbol_defaults_to_zero() {
        let body = json!({ "c": 0, "d": null, "dp": null, "h": 0, "l": 0 });

        let quote = Quote::from_gateway("ZZZZ", body, &Flat).unwrap();

        assert_eq!(quote.current_price, 0.0);
        assert_eq!(quote.change, 0.0);
        assert_eq!(quote.change_percent, 0.0);
    }

    #[test]
    fn test_missing_price_is_invalid() {
        let err = Quote::from_gateway("NVDA", json!({ "d": 1.0 }), &Flat).unwrap_err();
        assert_eq!(err.to_string(), "Invalid quote for 'NVDA': no current price");
    }

    #[test]
    fn test_error_body_is_invalid() {
        let body = json!({ "error": "You don't have access to this resource." });

        let err = Quote::from_gateway("NVDA", body, &Flat).unwrap_err();

        assert!(matches!(err, Error::InvalidQuote { .. }));
        assert!(err.to_string().contains("access"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let quote = Quote::from_gateway("ADBE", json!({ "c": 1.0, "dp": 2.0 }), &Flat).unwrap();
        let value = serde_json::to_value(&quote).unwrap();

        assert_eq!(value["currentPrice"], json!(1.0));
        assert_eq!(value["changePercent"], json!(2.0));
        assert!(quote.is_up());
    }
}
