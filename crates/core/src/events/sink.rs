//! Dashboard event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::DashboardEvent;

/// Trait for receiving dashboard events.
///
/// `emit()` must not block: implementations hand the event off (broadcast
/// channel, queue) and return. A failed emit never affects the workflow.
pub trait DashboardEventSink: Send + Sync {
    fn emit(&self, event: DashboardEvent);
}

/// Discards every event.
#[derive(Clone, Default)]
pub struct NoOpDashboardEventSink;

impl DashboardEventSink for NoOpDashboardEventSink {
    fn emit(&self, _event: DashboardEvent) {}
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockDashboardEventSink {
    events: Arc<Mutex<Vec<DashboardEvent>>>,
}

impl MockDashboardEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<DashboardEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl DashboardEventSink for MockDashboardEventSink {
    fn emit(&self, event: DashboardEvent) {
        self.events.lock().unwrap().push(event);
    }
}
