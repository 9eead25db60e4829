//! Selection value objects.
//!
//! The current selection a user has made in the frontend: a time range over
//! the analysis timeline and a spatial region on the map. Both are stored
//! exactly as given; the shell does not parse or order-check them, and a new
//! value fully replaces the previous one.

use serde::{Deserialize, Serialize};

/// A start/end boundary over the analysis timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start boundary, as provided by the caller.
    pub start: String,
    /// End boundary, as provided by the caller.
    pub end: String,
}

impl TimeRange {
    /// Creates a new time range from the given boundaries.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A geographic extent selected on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialRegion {
    pub lat: f64,
    pub lon: f64,
}

impl SpatialRegion {
    /// Creates a new spatial region centered on the given coordinates.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_new() {
        let range = TimeRange::new("2024-01-01", "2024-01-02");
        assert_eq!(range.start, "2024-01-01");
        assert_eq!(range.end, "2024-01-02");
    }

    #[test]
    fn test_time_range_accepts_unordered_boundaries() {
        // Structural acceptance only: the shell does not validate ordering.
        let range = TimeRange::new("2024-12-31", "2024-01-01");
        assert_eq!(range.start, "2024-12-31");
        assert_eq!(range.end, "2024-01-01");
    }

    #[test]
    fn test_spatial_region_serde_shape() {
        let region = SpatialRegion::new(1.0, 2.0);
        let json = serde_json::to_value(&region).unwrap();
        assert_eq!(json, serde_json::json!({"lat": 1.0, "lon": 2.0}));
    }
}
