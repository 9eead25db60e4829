//! View identifiers and the route table.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ShellConfig;
use crate::error::{GeoShellError, Result};

/// The fixed set of task views the shell can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    Task1,
    Task2,
    Task3,
}

impl ViewId {
    /// Returns the canonical name of this view.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task1 => "task1",
            Self::Task2 => "task2",
            Self::Task3 => "task3",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of matching a path against the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The path maps to a configured view.
    View(ViewId),
    /// No route is configured for the path. How an unmatched route is
    /// presented is the view layer's decision.
    NotFound,
}

/// Immutable exact-match route table with a single default redirect.
///
/// Built once at startup, either from a [`ShellConfig`] or as the builtin
/// table, and never modified afterwards. Resolution has no side effects.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<String, ViewId>,
    default_path: String,
}

impl RouteTable {
    /// The builtin table: `/task1`, `/task2`, `/task3`, with `/task1` as the
    /// default the root path redirects to.
    pub fn builtin() -> Self {
        let mut routes = HashMap::new();
        routes.insert("/task1".to_string(), ViewId::Task1);
        routes.insert("/task2".to_string(), ViewId::Task2);
        routes.insert("/task3".to_string(), ViewId::Task3);

        Self {
            routes,
            default_path: "/task1".to_string(),
        }
    }

    /// Builds a table from `config`, rejecting duplicate paths and a default
    /// path that no route covers.
    pub fn from_config(config: &ShellConfig) -> Result<Self> {
        let mut routes = HashMap::new();
        for route in &config.routes {
            if routes.insert(route.path.clone(), route.view).is_some() {
                return Err(GeoShellError::config(format!(
                    "duplicate route path: {}",
                    route.path
                )));
            }
        }

        if !routes.contains_key(&config.default_path) {
            return Err(GeoShellError::config(format!(
                "default path {} is not a configured route",
                config.default_path
            )));
        }

        Ok(Self {
            routes,
            default_path: config.default_path.clone(),
        })
    }

    /// Resolves `path` to a view.
    ///
    /// The root path `/` redirects to the default path before matching.
    pub fn resolve(&self, path: &str) -> Resolution {
        let path = if path == "/" {
            self.default_path.as_str()
        } else {
            path
        };

        match self.routes.get(path) {
            Some(view) => Resolution::View(*view),
            None => Resolution::NotFound,
        }
    }

    /// The path the root path redirects to.
    pub fn default_path(&self) -> &str {
        &self.default_path
    }

    /// Number of configured routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterates over the configured `(path, view)` pairs, in no particular
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ViewId)> {
        self.routes.iter().map(|(path, view)| (path.as_str(), *view))
    }
}
