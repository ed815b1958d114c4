//! News entity.

mod model;

pub use model::{news_from_gateway, NewsItem};
