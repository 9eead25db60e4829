//! Navigation domain module.
//!
//! Maps requested paths to task views and reports transitions to an
//! injected observer.
//!
//! # Module Structure
//!
//! - `route`: View identifiers and the immutable route table (`ViewId`,
//!   `RouteTable`, `Resolution`)
//! - `navigator`: Path resolution plus the pre-navigation hook (`Navigator`)
//! - `observer`: Observability sink for navigation events
//!   (`NavigationObserver`, `TracingObserver`, `InMemoryObserver`)

mod navigator;
mod observer;
mod route;

// Re-export public API
pub use navigator::Navigator;
pub use observer::{InMemoryObserver, NavigationEvent, NavigationObserver, TracingObserver};
pub use route::{Resolution, RouteTable, ViewId};
