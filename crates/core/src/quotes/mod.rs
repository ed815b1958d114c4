//! Quote entity and sparkline synthesis.

mod model;
mod sparkline;

pub use model::Quote;
pub use sparkline::{JitterSparkline, SparklineGenerator};
