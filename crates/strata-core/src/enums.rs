//! Measurement modes, grid unit statuses, layer types and session states.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums with state machines provide `allowed_next_states()` to enforce
//! valid transitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// MeasurementMode
// ---------------------------------------------------------------------------

/// What an interactive measurement session computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementMode {
    Point,
    Distance,
    Area,
    Bearing,
}

impl MeasurementMode {
    /// Minimum number of points needed to compute a value.
    #[must_use]
    pub const fn min_points(self) -> usize {
        match self {
            Self::Point => 1,
            Self::Distance | Self::Bearing => 2,
            Self::Area => 3,
        }
    }

    /// Point count at which the session closes by itself.
    ///
    /// `None` for open-ended modes, which close only on an explicit finish.
    #[must_use]
    pub const fn completes_at(self) -> Option<usize> {
        match self {
            Self::Point => Some(1),
            Self::Distance | Self::Bearing => Some(2),
            Self::Area => None,
        }
    }

    /// Unit symbol of the computed value.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Point => "",
            Self::Distance => "m",
            Self::Area => "m²",
            Self::Bearing => "°",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Distance => "distance",
            Self::Area => "area",
            Self::Bearing => "bearing",
        }
    }
}

impl fmt::Display for MeasurementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// Lifecycle of a measurement session.
///
/// ```text
/// idle → collecting → complete → (emit measurement) → idle
///        collecting → idle (cancel)
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Idle,
    Collecting,
    Complete,
}

impl SessionState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Collecting => "collecting",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GridUnitStatus
// ---------------------------------------------------------------------------

/// Excavation status of a single grid cell.
///
/// ```text
/// planned → active → completed
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum GridUnitStatus {
    #[default]
    Planned,
    Active,
    Completed,
}

impl GridUnitStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Planned => &[Self::Active],
            Self::Active => &[Self::Completed],
            Self::Completed => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for GridUnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LayerType
// ---------------------------------------------------------------------------

/// Thematic grouping of map data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LayerType {
    Sites,
    Findings,
    Chronology,
    Context,
    Grid,
}

impl LayerType {
    pub const ALL: [Self; 5] = [
        Self::Sites,
        Self::Findings,
        Self::Chronology,
        Self::Context,
        Self::Grid,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sites => "sites",
            Self::Findings => "findings",
            Self::Chronology => "chronology",
            Self::Context => "context",
            Self::Grid => "grid",
        }
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_mode_thresholds() {
        assert_eq!(MeasurementMode::Point.completes_at(), Some(1));
        assert_eq!(MeasurementMode::Distance.completes_at(), Some(2));
        assert_eq!(MeasurementMode::Bearing.completes_at(), Some(2));
        assert_eq!(MeasurementMode::Area.completes_at(), None);
        assert_eq!(MeasurementMode::Area.min_points(), 3);
    }

    #[test]
    fn grid_unit_status_transitions() {
        assert!(GridUnitStatus::Planned.can_transition_to(GridUnitStatus::Active));
        assert!(GridUnitStatus::Active.can_transition_to(GridUnitStatus::Completed));
        assert!(!GridUnitStatus::Planned.can_transition_to(GridUnitStatus::Completed));
        assert!(!GridUnitStatus::Completed.can_transition_to(GridUnitStatus::Active));
        assert!(!GridUnitStatus::Active.can_transition_to(GridUnitStatus::Planned));
    }

    #[test]
    fn enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&MeasurementMode::Bearing).unwrap(),
            "\"bearing\""
        );
        assert_eq!(
            serde_json::to_string(&LayerType::Chronology).unwrap(),
            "\"chronology\""
        );
        let status: GridUnitStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, GridUnitStatus::Completed);
    }

    #[test]
    fn display_matches_as_str() {
        for mode in [
            MeasurementMode::Point,
            MeasurementMode::Distance,
            MeasurementMode::Area,
            MeasurementMode::Bearing,
        ] {
            assert_eq!(mode.to_string(), mode.as_str());
        }
        for layer in LayerType::ALL {
            assert_eq!(layer.to_string(), layer.as_str());
        }
    }
}
