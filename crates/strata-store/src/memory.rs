use std::collections::BTreeMap;

use strata_core::entities::{FindingLocation, GridCell, Measurement};

use crate::error::StorageError;
use crate::records::latest_by_finding;
use crate::repository::SiteRepository;

/// In-process repository. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    findings: Vec<(String, FindingLocation)>,
    grid_units: BTreeMap<String, BTreeMap<(u32, u32), GridCell>>,
    measurements: Vec<Measurement>,
}

impl MemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed finding locations for a site.
    #[must_use]
    pub fn with_findings(
        mut self,
        site_id: &str,
        locations: impl IntoIterator<Item = FindingLocation>,
    ) -> Self {
        self.findings
            .extend(locations.into_iter().map(|l| (site_id.to_string(), l)));
        self
    }
}

impl SiteRepository for MemoryRepository {
    fn list_findings_by_site(&self, site_id: &str) -> Result<Vec<FindingLocation>, StorageError> {
        Ok(latest_by_finding(
            self.findings
                .iter()
                .filter(|(site, _)| site == site_id)
                .map(|(_, location)| location.clone()),
        ))
    }

    fn save_finding_location(
        &mut self,
        site_id: &str,
        location: &FindingLocation,
    ) -> Result<(), StorageError> {
        self.findings.push((site_id.to_string(), location.clone()));
        Ok(())
    }

    fn list_grid_units(&self, excavation_id: &str) -> Result<Vec<GridCell>, StorageError> {
        Ok(self
            .grid_units
            .get(excavation_id)
            .map(|cells| cells.values().cloned().collect())
            .unwrap_or_default())
    }

    fn save_grid_unit(&mut self, excavation_id: &str, cell: &GridCell) -> Result<(), StorageError> {
        self.grid_units
            .entry(excavation_id.to_string())
            .or_default()
            .insert((cell.row, cell.col), cell.clone());
        Ok(())
    }

    fn save_measurement(&mut self, measurement: &Measurement) -> Result<(), StorageError> {
        self.measurements.push(measurement.clone());
        Ok(())
    }

    fn list_measurements(&self, site_id: Option<&str>) -> Result<Vec<Measurement>, StorageError> {
        Ok(self
            .measurements
            .iter()
            .filter(|m| site_id.is_none_or(|site| m.site_id.as_deref() == Some(site)))
            .cloned()
            .collect())
    }
}
