//! Dashboard state and the two workflows that feed it.
//!
//! - [`DashboardStore`] owns the displayed quotes and news
//! - `refresh` loads the watchlist and general news concurrently
//! - `search` derives suggestions and prepends searched quotes
//! - [`DashboardService`] wires both to a [`DashboardGateway`]

mod gateway;
mod refresh;
mod search;
mod service;
mod store;


pub use gateway::DashboardGateway;
pub use refresh::RefreshOutcome;
pub use search::{SearchOutcome, SearchState};
pub use service::{DashboardService, DashboardServiceTrait};
pub use store::{DashboardSnapshot, DashboardStore, RefreshPhase};
