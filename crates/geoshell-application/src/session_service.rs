//! Session service: action-level entry points over the session state.
//!
//! The core model exposes raw mutations that never write audit entries by
//! themselves. This service owns the compositions the presentation layer
//! calls, so a mutation and its audit entry can never drift apart.

use geoshell_core::{
    HistoryEntry, Result, SessionState, SpatialRegion, TIME_RANGE_CHANGE, TimeRange, UserAction,
};

/// Action-level interface over [`SessionState`].
///
/// # Responsibilities
///
/// - Applying the audited time-range update: replace the selection and
///   append its `TIME_RANGE_CHANGE` entry as one in-memory step
/// - Applying the unaudited spatial-region update
/// - Recording caller-described actions into the history, stamping them
///   when the caller did not
/// - Read access to the current selection and the audit trail
///
/// All operations run synchronously to completion on the caller's thread;
/// the service is mutated exclusively through its own methods.
pub struct SessionService {
    state: SessionState,
}

impl SessionService {
    /// Wraps a freshly constructed, empty session state.
    pub fn new() -> Self {
        Self {
            state: SessionState::new(),
        }
    }

    /// Replaces the time range and appends the matching audit entry.
    ///
    /// The payload is serialized before the mutation is applied, so a
    /// serialization failure leaves both the selection and the history
    /// untouched. Mutation precedes the audit append; both are in-memory,
    /// so no partial outcome is possible.
    pub fn update_time_range(&mut self, range: TimeRange) -> Result<()> {
        let value = serde_json::to_value(&range)?;
        self.state.set_time_range(range);
        self.state.push_entry(HistoryEntry::now(TIME_RANGE_CHANGE, value));
        tracing::debug!(target: "geoshell::session", "time range updated");
        Ok(())
    }

    /// Replaces the spatial region.
    ///
    /// No audit entry is written for this action; see DESIGN.md for the
    /// recorded decision.
    pub fn update_spatial_region(&mut self, region: SpatialRegion) {
        self.state.set_spatial_region(region);
    }

    /// Appends `action` to the history verbatim, stamping it with the
    /// current wall-clock time when the caller did not supply a timestamp.
    pub fn log_user_action(&mut self, action: UserAction) {
        self.state.push_entry(HistoryEntry::stamp(action));
    }

    /// Returns the current time range, if one has been set.
    pub fn time_range(&self) -> Option<&TimeRange> {
        self.state.time_range()
    }

    /// Returns the current spatial region, if one has been set.
    pub fn spatial_region(&self) -> Option<&SpatialRegion> {
        self.state.spatial_region()
    }

    /// Returns the audit trail in append order.
    pub fn history(&self) -> &[HistoryEntry] {
        self.state.history()
    }

    /// Read access to the whole underlying state, for embedders that need
    /// to serialize it to the frontend.
    pub fn state(&self) -> &SessionState {
        &self.state
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}
