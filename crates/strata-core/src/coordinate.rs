//! The geographic coordinate value type.
//!
//! Coordinates are always a named `{ latitude, longitude }` record so that
//! `[lat, lng]` / `[lng, lat]` mix-ups cannot happen at API boundaries.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when latitude is outside [-90, 90] or
    /// longitude is outside [-180, 180].
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        let coordinate = Self::new(latitude, longitude);
        if coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(CoreError::Validation(format!(
                "coordinate out of range: latitude {latitude}, longitude {longitude}"
            )))
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Parses `"lat,lng"` (whitespace around either value is ignored).
impl FromStr for Coordinate {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = raw.split_once(',').ok_or_else(|| {
            CoreError::Validation(format!("expected 'LAT,LNG', got '{raw}'"))
        })?;
        let latitude = lat
            .trim()
            .parse::<f64>()
            .map_err(|error| CoreError::Validation(format!("invalid latitude '{lat}': {error}")))?;
        let longitude = lng
            .trim()
            .parse::<f64>()
            .map_err(|error| CoreError::Validation(format!("invalid longitude '{lng}': {error}")))?;
        Self::try_new(latitude, longitude)
    }
}
