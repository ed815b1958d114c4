use rand::Rng;

use crate::constants::{SPARKLINE_SAMPLES, SPARKLINE_SPREAD};

/// Produces the series drawn next to a quote.
pub trait SparklineGenerator: Send + Sync {
    fn generate(&self, current_price: f64) -> Vec<f64>;
}

/// Decorative sparkline: `samples` points of `price + U`, U uniform in
/// `[0, spread)`.
///
/// This is jitter, not history. A provider with a candle endpoint can supply
/// a real series through [`SparklineGenerator`] instead.
#[derive(Clone, Debug)]
pub struct JitterSparkline {
    samples: usize,
    spread: f64,
}

impl Default for JitterSparkline {
    fn default() -> Self {
        Self {
            samples: SPARKLINE_SAMPLES,
            spread: SPARKLINE_SPREAD,
        }
    }
}

impl JitterSparkline {
    pub fn new(samples: usize, spread: f64) -> Self {
        Self { samples, spread }
    }

    /// Same as [`SparklineGenerator::generate`] with a caller-supplied RNG.
    pub fn synthesize<R: Rng + ?Sized>(&self, current_price: f64, rng: &mut R) -> Vec<f64> {
        if self.spread <= 0.0 {
            return vec![current_price; self.samples];
        }
        (0..self.samples)
            .map(|_| current_price + rng.gen_range(0.0..self.spread))
            .collect()
    }
}

impl SparklineGenerator for JitterSparkline {
    fn generate(&self, current_price: f64) -> Vec<f64> {
        self.synthesize(current_price, &mut rand::thread_rng())
    }
}
