//! Application shell wiring.
//!
//! Builds the two shell components — the navigator and the session service —
//! once at process start and hands them to the embedding presentation layer.
//! The components are independent of each other; this module only composes
//! them into one process.

use std::sync::Arc;

use anyhow::{Context, Result};
use geoshell_core::{NavigationObserver, Navigator, RouteTable, ShellConfig, TracingObserver};

use crate::session_service::SessionService;

/// The assembled shell.
///
/// Constructed once at startup; the session service lives for the duration
/// of the process and is never torn down.
pub struct AppShell {
    /// Path-to-view navigation.
    pub navigator: Navigator,
    /// Selection state and audit trail.
    pub session: SessionService,
}

impl std::fmt::Debug for AppShell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppShell").finish_non_exhaustive()
    }
}

impl AppShell {
    /// Builds the shell from `config`, wiring `observer` into the navigator.
    pub fn bootstrap(
        config: &ShellConfig,
        observer: Arc<dyn NavigationObserver>,
    ) -> Result<Self> {
        let table =
            RouteTable::from_config(config).context("building route table from shell config")?;
        tracing::info!(
            "[Bootstrap] {} routes configured, default {}",
            table.len(),
            table.default_path()
        );

        Ok(Self {
            navigator: Navigator::new(table, observer),
            session: SessionService::new(),
        })
    }

    /// Builds the shell with the builtin route table and the tracing
    /// observer.
    pub fn with_defaults() -> Self {
        Self {
            navigator: Navigator::new(RouteTable::builtin(), Arc::new(TracingObserver)),
            session: SessionService::new(),
        }
    }
}
