//! Server-sent event fan-out.

use serde_json::{json, Value};
use stocker_core::events::{DashboardEvent, DashboardEventSink};
use tokio::sync::broadcast;

pub const REFRESH_START: &str = "dashboard:refresh-start";
pub const REFRESH_COMPLETE: &str = "dashboard:refresh-complete";
pub const QUOTE_ADDED: &str = "dashboard:quote-added";
pub const SEARCH_ERROR: &str = "dashboard:search-error";

#[derive(Clone, Debug)]
pub struct ServerEvent {
    pub name: &'static str,
    pub payload: Option<Value>,
}

impl ServerEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            payload: None,
        }
    }

    pub fn with_payload(name: &'static str, payload: Value) -> Self {
        Self {
            name,
            payload: Some(payload),
        }
    }
}

impl From<DashboardEvent> for ServerEvent {
    fn from(event: DashboardEvent) -> Self {
        match event {
            DashboardEvent::RefreshStarted => ServerEvent::new(REFRESH_START),
            DashboardEvent::RefreshCompleted {
                quotes,
                news,
                failed,
                version,
            } => ServerEvent::with_payload(
                REFRESH_COMPLETE,
                json!({ "quotes": quotes, "news": news, "failed": failed, "version": version }),
            ),
            DashboardEvent::QuotePrepended { symbol, version } => ServerEvent::with_payload(
                QUOTE_ADDED,
                json!({ "symbol": symbol, "version": version }),
            ),
            DashboardEvent::SearchFailed { symbol, message } => ServerEvent::with_payload(
                SEARCH_ERROR,
                json!({ "symbol": symbol, "message": message }),
            ),
        }
    }
}

/// Broadcast channel every SSE subscriber listens on.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ServerEvent) {
        // No subscribers is not an error.
        let _ = self.sender.send(event);
    }
}

/// Forwards core dashboard events onto the [`EventBus`].
pub struct EventBusSink {
    bus: EventBus,
}

impl EventBusSink {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl DashboardEventSink for EventBusSink {
    fn emit(&self, event: DashboardEvent) {
        tracing::debug!("Publishing dashboard event: {:?}", event);
        self.bus.publish(event.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sink_publishes_named_events() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let sink = EventBusSink::new(bus.clone());

        sink.emit(DashboardEvent::RefreshStarted);
        sink.emit(DashboardEvent::quote_prepended("AAPL", 7));

        let first = rx.recv().await.unwrap();
        assert_eq!(first.name, REFRESH_START);
        assert!(first.payload.is_none());

        let second = rx.recv().await.unwrap();
        assert_eq!(second.name, QUOTE_ADDED);
        assert_eq!(second.payload, Some(json!({ "symbol": "AAPL", "version": 7 })));
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let bus = EventBus::new(4);
        bus.publish(ServerEvent::new(REFRESH_START));
    }

    #[test]
    fn test_refresh_completed_payload() {
        let event: ServerEvent = DashboardEvent::refresh_completed(6, 5, true, 9).into();
        assert_eq!(event.name, REFRESH_COMPLETE);
        assert_eq!(
            event.payload,
            Some(json!({ "quotes": 6, "news": 5, "failed": true, "version": 9 }))
        );
    }
}
