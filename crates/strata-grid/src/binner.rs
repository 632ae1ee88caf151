use strata_core::entities::{
    BinningReport, CellAggregate, FindingLocation, GridSystem, InvalidDepthWarning,
    UnassignedFindingWarning,
};

use crate::error::GridError;
use crate::frame::GridFrame;

/// Assigns finding locations to the grid cells that contain them.
pub struct SpatialBinner;

impl SpatialBinner {
    /// Bin `locations` into `grid`.
    ///
    /// Cells are tested in lexicographic label order and the first containing
    /// cell wins, which settles points lying exactly on a shared edge.
    /// Locations outside every cell are reported in `unassigned`; nothing is
    /// dropped and nothing is snapped to a nearest cell. Locations with a
    /// negative or non-finite depth are reported in `invalid_depth` and kept
    /// out of the aggregates.
    #[must_use]
    pub fn bin(grid: &GridSystem, locations: &[FindingLocation]) -> BinningReport {
        let mut order: Vec<usize> = (0..grid.cells.len()).collect();
        order.sort_by(|&a, &b| grid.cells[a].label.cmp(&grid.cells[b].label));

        let frame = GridFrame::new(
            grid.origin,
            grid.cell_size,
            grid.rows,
            grid.cols,
            grid.orientation,
        );
        let axis_aligned = grid.orientation == 0.0;
        let bounds: Vec<_> = grid.cells.iter().map(|cell| cell.bounds()).collect();

        let mut cells: Vec<CellAggregate> = grid
            .cells
            .iter()
            .map(|cell| CellAggregate::empty(cell.label.clone()))
            .collect();
        let mut unassigned = Vec::new();
        let mut invalid_depth = Vec::new();

        for location in locations {
            if !(location.depth.is_finite() && location.depth >= 0.0) {
                let warning = InvalidDepthWarning {
                    finding_id: location.finding_id.clone(),
                    depth: location.depth,
                };
                tracing::warn!(grid = %grid.id, "{warning}");
                invalid_depth.push(warning);
                continue;
            }

            let hit = order.iter().copied().find(|&index| {
                if axis_aligned {
                    bounds[index].is_some_and(|b| b.contains(location.coordinate))
                } else {
                    let cell = &grid.cells[index];
                    frame.cell_contains(cell.row, cell.col, location.coordinate)
                }
            });

            match hit {
                Some(index) => accumulate(&mut cells[index], location),
                None => {
                    let warning = UnassignedFindingWarning {
                        finding_id: location.finding_id.clone(),
                        coordinate: location.coordinate,
                        depth: location.depth,
                    };
                    tracing::warn!(grid = %grid.id, "{warning}");
                    unassigned.push(warning);
                }
            }
        }

        tracing::debug!(
            grid = %grid.id,
            locations = locations.len(),
            unassigned = unassigned.len(),
            invalid_depth = invalid_depth.len(),
            "binned finding locations"
        );

        BinningReport {
            cells,
            unassigned,
            invalid_depth,
        }
    }

    /// Write a binning report back into the grid's cell metadata.
    ///
    /// Cells with finds get their finding ids replaced, are marked excavated
    /// and have their depth raised to the deepest find. Cells without finds
    /// keep their excavated flag and depth; a dug cell stays dug.
    ///
    /// The grid is only changed when the whole report applies.
    ///
    /// # Errors
    ///
    /// Returns `GridError::Core` when the report names a cell the grid does not
    /// have or carries an invalid depth.
    pub fn apply(grid: &mut GridSystem, report: &BinningReport) -> Result<(), GridError> {
        let mut staged = grid.clone();
        for aggregate in &report.cells {
            let cell = staged.cell_mut(&aggregate.label)?;
            if let Some(depth) = aggregate.max_depth {
                cell.record_depth(depth)?;
            }
            cell.finding_ids.clone_from(&aggregate.finding_ids);
            if aggregate.excavated {
                cell.mark_excavated();
            }
        }
        *grid = staged;
        Ok(())
    }
}

fn accumulate(aggregate: &mut CellAggregate, location: &FindingLocation) {
    aggregate.finding_count += 1;
    aggregate.excavated = true;
    aggregate.finding_ids.push(location.finding_id.clone());
    aggregate.min_depth = Some(
        aggregate
            .min_depth
            .map_or(location.depth, |d| d.min(location.depth)),
    );
    aggregate.max_depth = Some(
        aggregate
            .max_depth
            .map_or(location.depth, |d| d.max(location.depth)),
    );
}
