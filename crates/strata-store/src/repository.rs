use strata_core::entities::{FindingLocation, GridCell, Measurement};

use crate::error::StorageError;

/// Where finds, grid units and measurements live.
///
/// `excavation_id` is the id of the grid the units belong to.
pub trait SiteRepository {
    /// Latest recorded location of each find of a site, in the order the
    /// finds were first recorded.
    fn list_findings_by_site(&self, site_id: &str) -> Result<Vec<FindingLocation>, StorageError>;

    fn save_finding_location(
        &mut self,
        site_id: &str,
        location: &FindingLocation,
    ) -> Result<(), StorageError>;

    /// Latest state of every saved cell of a grid, ordered by row then column.
    fn list_grid_units(&self, excavation_id: &str) -> Result<Vec<GridCell>, StorageError>;

    /// Save a cell, replacing any earlier state of the same label.
    fn save_grid_unit(&mut self, excavation_id: &str, cell: &GridCell) -> Result<(), StorageError>;

    fn save_measurement(&mut self, measurement: &Measurement) -> Result<(), StorageError>;

    /// Saved measurements, oldest first, optionally only those of one site.
    fn list_measurements(&self, site_id: Option<&str>) -> Result<Vec<Measurement>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` when no measurement has that id.
    fn get_measurement(&self, id: &str) -> Result<Measurement, StorageError> {
        self.list_measurements(None)?
            .into_iter()
            .find(|m| m.id == id)
            .ok_or_else(|| StorageError::NotFound {
                entity_type: "measurement".to_string(),
                id: id.to_string(),
            })
    }
}
