//! Path-to-view navigation.

use std::sync::Arc;

use crate::navigation::observer::{NavigationEvent, NavigationObserver};
use crate::navigation::route::{Resolution, RouteTable};

/// Resolves requested paths against the route table and reports transitions
/// to the injected observer.
///
/// The navigator owns no mutable state: the table is immutable after
/// construction and the observer is a shared handle.
pub struct Navigator {
    table: RouteTable,
    observer: Arc<dyn NavigationObserver>,
}

impl Navigator {
    /// Creates a navigator over `table`, reporting to `observer`.
    pub fn new(table: RouteTable, observer: Arc<dyn NavigationObserver>) -> Self {
        Self { table, observer }
    }

    /// The route table this navigator resolves against.
    pub fn route_table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolves `path` to a view. The root path redirects to the default
    /// path before matching.
    pub fn resolve(&self, path: &str) -> Resolution {
        self.table.resolve(path)
    }

    /// Pre-navigation hook, invoked before a navigation completes.
    ///
    /// Records the `(from, to)` transition through the observer. This is a
    /// cross-cutting observability hook, not a gate: an observer failure is
    /// logged at warn level and swallowed, and navigation always proceeds.
    pub fn before_navigate(&self, from: &str, to: &str) {
        let event = NavigationEvent::now(from, to);
        if let Err(err) = self.observer.record(&event) {
            tracing::warn!(
                "navigation observer rejected {} -> {}: {}",
                event.from,
                event.to,
                err
            );
        }
    }
}
