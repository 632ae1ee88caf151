//! Append-only JSONL files under a data directory.
//!
//! ```text
//! {data_dir}/findings.jsonl      FindingRecord per line, replayed last-wins
//! {data_dir}/grid_units.jsonl    GridUnitRecord per line, replayed last-wins
//! {data_dir}/measurements.jsonl  Measurement per line
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use strata_core::entities::{FindingLocation, GridCell, Measurement};

use crate::error::StorageError;
use crate::records::{FindingRecord, GridUnitRecord, latest_by_finding};
use crate::repository::SiteRepository;

const FINDINGS_FILE: &str = "findings.jsonl";
const GRID_UNITS_FILE: &str = "grid_units.jsonl";
const MEASUREMENTS_FILE: &str = "measurements.jsonl";

pub struct JsonlRepository {
    data_dir: PathBuf,
}

impl JsonlRepository {
    /// Open the repository rooted at `data_dir`, creating the directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir).map_err(StorageError::Io)?;
        Ok(Self { data_dir })
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn append<T: Serialize>(&self, file: &str, record: &T) -> Result<(), StorageError> {
        let path = self.data_dir.join(file);
        serde_jsonlines::append_json_lines(&path, [record])
            .map_err(|e| StorageError::from_io(file, e))?;
        tracing::debug!(file, "appended record");
        Ok(())
    }

    /// Every line of `file`; a file that was never written reads as empty.
    fn read_all<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StorageError> {
        let path = self.data_dir.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        serde_jsonlines::json_lines(&path)
            .map_err(|e| StorageError::from_io(file, e))?
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| StorageError::from_io(file, e))
    }
}

impl SiteRepository for JsonlRepository {
    fn list_findings_by_site(&self, site_id: &str) -> Result<Vec<FindingLocation>, StorageError> {
        Ok(latest_by_finding(
            self.read_all::<FindingRecord>(FINDINGS_FILE)?
                .into_iter()
                .filter(|record| record.site_id == site_id)
                .map(|record| record.location),
        ))
    }

    fn save_finding_location(
        &mut self,
        site_id: &str,
        location: &FindingLocation,
    ) -> Result<(), StorageError> {
        self.append(
            FINDINGS_FILE,
            &FindingRecord {
                site_id: site_id.to_string(),
                location: location.clone(),
            },
        )
    }

    fn list_grid_units(&self, excavation_id: &str) -> Result<Vec<GridCell>, StorageError> {
        let mut latest = BTreeMap::new();
        for record in self.read_all::<GridUnitRecord>(GRID_UNITS_FILE)? {
            if record.excavation_id == excavation_id {
                latest.insert((record.cell.row, record.cell.col), record.cell);
            }
        }
        Ok(latest.into_values().collect())
    }

    fn save_grid_unit(&mut self, excavation_id: &str, cell: &GridCell) -> Result<(), StorageError> {
        self.append(
            GRID_UNITS_FILE,
            &GridUnitRecord {
                excavation_id: excavation_id.to_string(),
                cell: cell.clone(),
            },
        )
    }

    fn save_measurement(&mut self, measurement: &Measurement) -> Result<(), StorageError> {
        self.append(MEASUREMENTS_FILE, measurement)
    }

    fn list_measurements(&self, site_id: Option<&str>) -> Result<Vec<Measurement>, StorageError> {
        let mut measurements = self.read_all::<Measurement>(MEASUREMENTS_FILE)?;
        if let Some(site) = site_id {
            measurements.retain(|m| m.site_id.as_deref() == Some(site));
        }
        Ok(measurements)
    }
}
