//! Observability sink for navigation events.
//!
//! The navigator reports transitions through an injected observer, so the
//! core has no hard dependency on any specific output channel. The embedding
//! application picks the implementation: [`TracingObserver`] for structured
//! logs, [`InMemoryObserver`] for buffering, or its own.

use std::sync::Mutex;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{GeoShellError, Result};

/// One recorded navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEvent {
    /// Path the navigation left.
    pub from: String,
    /// Path the navigation targets.
    pub to: String,
    /// RFC 3339 timestamp captured when the transition was observed.
    pub timestamp: String,
}

impl NavigationEvent {
    /// Captures a transition stamped with the current wall-clock time.
    pub fn now(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Sink for navigation events.
pub trait NavigationObserver: Send + Sync {
    /// Records one event.
    ///
    /// Errors are swallowed by the navigator: a failing observer must never
    /// prevent a navigation from completing.
    fn record(&self, event: &NavigationEvent) -> Result<()>;
}

/// Observer that emits one `tracing` info line per navigation.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl NavigationObserver for TracingObserver {
    fn record(&self, event: &NavigationEvent) -> Result<()> {
        tracing::info!(
            target: "geoshell::navigation",
            "from {} to {}",
            event.from,
            event.to
        );
        Ok(())
    }
}

/// Observer that buffers events in memory, in arrival order.
#[derive(Debug, Default)]
pub struct InMemoryObserver {
    events: Mutex<Vec<NavigationEvent>>,
}

impl InMemoryObserver {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded events, oldest first.
    pub fn events(&self) -> Vec<NavigationEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl NavigationObserver for InMemoryObserver {
    fn record(&self, event: &NavigationEvent) -> Result<()> {
        let mut events = self
            .events
            .lock()
            .map_err(|_| GeoShellError::observer("event buffer poisoned"))?;
        events.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_contains_both_paths() {
        let event = NavigationEvent::now("/", "/task1");
        assert_eq!(event.from, "/");
        assert_eq!(event.to, "/task1");
        assert!(!event.timestamp.is_empty());
    }

    #[test]
    fn test_in_memory_observer_buffers_in_order() {
        let observer = InMemoryObserver::new();
        observer
            .record(&NavigationEvent::now("/", "/task1"))
            .unwrap();
        observer
            .record(&NavigationEvent::now("/task1", "/task2"))
            .unwrap();

        let events = observer.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].to, "/task1");
        assert_eq!(events[1].to, "/task2");
    }

    #[test]
    fn test_tracing_observer_never_fails() {
        let observer = TracingObserver;
        assert!(observer.record(&NavigationEvent::now("/a", "/b")).is_ok());
    }
}
