//! Action history types.
//!
//! Every state-changing action a user performs can be recorded as a
//! [`HistoryEntry`]. Entries are immutable once created and are stamped with
//! the wall-clock time at the moment they are appended, so insertion order
//! and timestamp order agree.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Entry kind written when the time range changes through the action layer.
pub const TIME_RANGE_CHANGE: &str = "TIME_RANGE_CHANGE";

/// A caller-described action, before it is stamped into the history.
///
/// The payload is opaque JSON: the shell stores whatever the caller hands it
/// and performs no validation of its shape. A caller may carry its own
/// timestamp; one is assigned at append time otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAction {
    /// Identifies the action kind (e.g. `TIME_RANGE_CHANGE`).
    #[serde(rename = "type")]
    pub kind: String,

    /// Opaque action payload.
    #[serde(default)]
    pub value: Value,

    /// Optional caller-supplied timestamp (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl UserAction {
    /// Creates an unstamped action with the given kind and payload.
    pub fn new(kind: impl Into<String>, value: Value) -> Self {
        Self {
            kind: kind.into(),
            value,
            timestamp: None,
        }
    }
}

/// An immutable, timestamped record of a past state-changing action.
///
/// Serialized shape for downstream audit viewers:
/// `{"type": ..., "value": ..., "timestamp": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Identifies the action kind.
    #[serde(rename = "type")]
    pub kind: String,

    /// Opaque action payload, stored verbatim.
    pub value: Value,

    /// RFC 3339 timestamp captured when the entry was recorded.
    pub timestamp: String,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current wall-clock time.
    pub fn now(kind: impl Into<String>, value: Value) -> Self {
        Self {
            kind: kind.into(),
            value,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Converts `action` into an entry, stamping it with the current
    /// wall-clock time unless the caller already carried a timestamp.
    pub fn stamp(action: UserAction) -> Self {
        Self {
            kind: action.kind,
            value: action.value,
            timestamp: action
                .timestamp
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
        }
    }
}
