pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod proxy;
mod main_lib;

pub use main_lib::{build_state, init_tracing, spawn_activation, AppState};
