//! Session state domain model.
//!
//! The single source of truth for the current selection and its audit
//! trail. One value is constructed at process start and passed by handle to
//! whichever components need it; there is no module-level global.

use serde::{Deserialize, Serialize};

use crate::history::HistoryEntry;
use crate::selection::{SpatialRegion, TimeRange};

/// Process-wide selection state plus the append-only action history.
///
/// Fields are private: all writes go through the methods below, which keeps
/// the history append-only and the selections replace-only. These are the
/// raw mutations; the audited entry points that pair a mutation with its
/// history entry live in the application layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// Currently selected time range, if any.
    time_range: Option<TimeRange>,

    /// Currently selected spatial region, if any.
    spatial_region: Option<SpatialRegion>,

    /// Audit trail in append order.
    #[serde(default)]
    history: Vec<HistoryEntry>,
}

impl SessionState {
    /// Creates an empty session state: no selection, no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current time range.
    ///
    /// The previous value, if any, is discarded; no history entry is
    /// written here.
    pub fn set_time_range(&mut self, range: TimeRange) {
        self.time_range = Some(range);
    }

    /// Replaces the current spatial region.
    ///
    /// The previous value, if any, is discarded; no history entry is
    /// written here.
    pub fn set_spatial_region(&mut self, region: SpatialRegion) {
        self.spatial_region = Some(region);
    }

    /// Appends a stamped entry to the audit trail.
    ///
    /// Entries are never removed or reordered afterwards.
    pub fn push_entry(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    /// Returns the current time range, if one has been set.
    pub fn time_range(&self) -> Option<&TimeRange> {
        self.time_range.as_ref()
    }

    /// Returns the current spatial region, if one has been set.
    pub fn spatial_region(&self) -> Option<&SpatialRegion> {
        self.spatial_region.as_ref()
    }

    /// Returns the audit trail in append order.
    ///
    /// The slice is read-only; history cannot be altered through it.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new() {
        let state = SessionState::new();
        assert!(state.time_range().is_none());
        assert!(state.spatial_region().is_none());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_last_time_range_wins() {
        let mut state = SessionState::new();
        state.set_time_range(TimeRange::new("2024-01-01", "2024-01-02"));
        state.set_time_range(TimeRange::new("2024-02-01", "2024-02-02"));
        state.set_time_range(TimeRange::new("2024-03-01", "2024-03-02"));

        assert_eq!(
            state.time_range(),
            Some(&TimeRange::new("2024-03-01", "2024-03-02"))
        );
    }

    #[test]
    fn test_spatial_region_fully_replaced() {
        let mut state = SessionState::new();
        state.set_spatial_region(SpatialRegion::new(1.0, 2.0));
        state.set_spatial_region(SpatialRegion::new(48.85, 2.35));

        assert_eq!(state.spatial_region(), Some(&SpatialRegion::new(48.85, 2.35)));
    }

    #[test]
    fn test_raw_mutations_write_no_history() {
        let mut state = SessionState::new();
        state.set_time_range(TimeRange::new("a", "b"));
        state.set_spatial_region(SpatialRegion::new(0.0, 0.0));

        assert!(state.history().is_empty());
    }

    #[test]
    fn test_history_preserves_append_order() {
        let mut state = SessionState::new();
        for i in 0..5 {
            state.push_entry(HistoryEntry::now("STEP", json!(i)));
        }

        let values: Vec<_> = state.history().iter().map(|e| e.value.clone()).collect();
        assert_eq!(values, vec![json!(0), json!(1), json!(2), json!(3), json!(4)]);
    }

    #[test]
    fn test_history_never_shrinks() {
        let mut state = SessionState::new();
        state.push_entry(HistoryEntry::now("ONE", json!(null)));
        let len_before = state.history().len();

        // Selection mutations must leave the trail untouched.
        state.set_time_range(TimeRange::new("a", "b"));
        state.set_spatial_region(SpatialRegion::new(1.0, 1.0));

        assert_eq!(state.history().len(), len_before);
    }

    #[test]
    fn test_entry_timestamps_non_decreasing() {
        let mut state = SessionState::new();
        for _ in 0..3 {
            state.push_entry(HistoryEntry::now("TICK", json!(null)));
        }

        let stamps: Vec<_> = state.history().iter().map(|e| e.timestamp.clone()).collect();
        let mut sorted = stamps.clone();
        sorted.sort();
        assert_eq!(stamps, sorted);
    }
}
