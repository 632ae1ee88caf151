//! Line formats of the JSONL data files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strata_core::entities::{FindingLocation, GridCell};

/// One line of `findings.jsonl`. A later line for the same finding moves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindingRecord {
    pub site_id: String,
    pub location: FindingLocation,
}

/// Latest location of each finding, in the order finds were first recorded.
pub(crate) fn latest_by_finding(
    locations: impl IntoIterator<Item = FindingLocation>,
) -> Vec<FindingLocation> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut latest: Vec<FindingLocation> = Vec::new();
    for location in locations {
        match slots.get(&location.finding_id) {
            Some(&index) => latest[index] = location,
            None => {
                slots.insert(location.finding_id.clone(), latest.len());
                latest.push(location);
            }
        }
    }
    latest
}

/// One line of `grid_units.jsonl`. Later lines for the same cell supersede
/// earlier ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridUnitRecord {
    pub excavation_id: String,
    pub cell: GridCell,
}
