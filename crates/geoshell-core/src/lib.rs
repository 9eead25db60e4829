//! Core domain layer for the GeoShell client shell.
//!
//! Holds the session selection state (time range, spatial region) with its
//! append-only action history, and the navigation layer that maps requested
//! paths to task views. Rendering and route-to-view wiring live in the
//! embedding presentation layer, not here.

pub mod config;
pub mod error;
pub mod history;
pub mod navigation;
pub mod selection;
pub mod session;

// Re-export common error type
pub use error::{GeoShellError, Result};

pub use config::{RouteConfig, ShellConfig};
pub use history::{HistoryEntry, UserAction, TIME_RANGE_CHANGE};
pub use navigation::{
    InMemoryObserver, NavigationEvent, NavigationObserver, Navigator, Resolution, RouteTable,
    TracingObserver, ViewId,
};
pub use selection::{SpatialRegion, TimeRange};
pub use session::SessionState;
