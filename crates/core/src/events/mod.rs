//! Dashboard events module.
//!
//! Core workflows report what they changed through [`DashboardEventSink`].
//! The server forwards these to connected browsers; tests collect them.

mod dashboard_event;
mod sink;

pub use dashboard_event::*;
pub use sink::*;
