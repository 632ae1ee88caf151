//! The excavation site the CLI works against.

use serde::{Deserialize, Serialize};
use strata_core::Coordinate;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Site id as known to the data-access layer (e.g. `site-palermo`).
    #[serde(default)]
    pub id: String,

    /// Human-readable site name.
    #[serde(default)]
    pub name: String,

    /// Grid origin latitude in decimal degrees.
    #[serde(default)]
    pub origin_lat: Option<f64>,

    /// Grid origin longitude in decimal degrees.
    #[serde(default)]
    pub origin_lng: Option<f64>,
}

impl SiteConfig {
    /// Both origin values are present and within WGS84 range.
    pub fn is_configured(&self) -> bool {
        self.origin().is_some()
    }

    /// The grid origin, if fully and validly configured.
    pub fn origin(&self) -> Option<Coordinate> {
        let coordinate = Coordinate::new(self.origin_lat?, self.origin_lng?);
        coordinate.is_valid().then_some(coordinate)
    }

    /// The site id, or `None` when left blank.
    pub fn site_id(&self) -> Option<&str> {
        (!self.id.is_empty()).then_some(self.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = SiteConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.site_id(), None);
    }

    #[test]
    fn configured_when_both_origin_values_set() {
        let config = SiteConfig {
            origin_lat: Some(-34.6037),
            origin_lng: Some(-58.3816),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert_eq!(config.origin(), Some(Coordinate::new(-34.6037, -58.3816)));
    }

    #[test]
    fn half_an_origin_is_not_configured() {
        let config = SiteConfig {
            origin_lat: Some(-34.6037),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn out_of_range_origin_is_not_configured() {
        let config = SiteConfig {
            origin_lat: Some(95.0),
            origin_lng: Some(10.0),
            ..Default::default()
        };
        assert_eq!(config.origin(), None);
    }
}
