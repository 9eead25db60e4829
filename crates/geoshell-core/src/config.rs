//! Shell configuration.
//!
//! The route table is not hard-coded into the navigator. The embedding
//! application constructs a [`ShellConfig`] once at startup — builtin
//! defaults or TOML — and builds the immutable table from it.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::navigation::ViewId;

/// A single path-to-view mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Exact-match request path (e.g. `/task1`).
    pub path: String,
    /// View presented for the path.
    pub view: ViewId,
}

impl RouteConfig {
    /// Creates a new route mapping.
    pub fn new(path: impl Into<String>, view: ViewId) -> Self {
        Self {
            path: path.into(),
            view,
        }
    }
}

/// Startup configuration for the shell.
///
/// ```toml
/// default_path = "/task1"
///
/// [[route]]
/// path = "/task1"
/// view = "task1"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Configured routes, in declaration order.
    #[serde(rename = "route", default)]
    pub routes: Vec<RouteConfig>,

    /// Path the root path redirects to. Must name a configured route.
    pub default_path: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ShellConfig {
    /// The builtin three-view configuration matching the shipped frontend.
    pub fn builtin() -> Self {
        Self {
            routes: vec![
                RouteConfig::new("/task1", ViewId::Task1),
                RouteConfig::new("/task2", ViewId::Task2),
                RouteConfig::new("/task3", ViewId::Task3),
            ],
            default_path: "/task1".to_string(),
        }
    }

    /// Parses a configuration from TOML.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{Resolution, RouteTable};

    #[test]
    fn test_builtin_matches_shipped_frontend() {
        let config = ShellConfig::builtin();
        assert_eq!(config.routes.len(), 3);
        assert_eq!(config.default_path, "/task1");
    }

    #[test]
    fn test_from_toml_str() {
        let raw = r#"
            default_path = "/task2"

            [[route]]
            path = "/task1"
            view = "task1"

            [[route]]
            path = "/task2"
            view = "task2"
        "#;

        let config = ShellConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.default_path, "/task2");

        let table = RouteTable::from_config(&config).unwrap();
        assert_eq!(table.resolve("/"), Resolution::View(ViewId::Task2));
    }

    #[test]
    fn test_from_toml_str_rejects_garbage() {
        let err = ShellConfig::from_toml_str("= not toml").unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ShellConfig::builtin();
        let raw = toml::to_string(&config).unwrap();
        let parsed = ShellConfig::from_toml_str(&raw).unwrap();
        assert_eq!(parsed, config);
    }
}
