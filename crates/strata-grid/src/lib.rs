//! # strata-grid
//!
//! Builds metric excavation grids around a site origin and bins point-located
//! finds into their cells.
//!
//! ```
//! use strata_core::Coordinate;
//! use strata_core::entities::GridConfig;
//! use strata_grid::GridGenerator;
//!
//! let config = GridConfig { cell_size: 5.0, rows: 4, cols: 4, orientation: 0.0 };
//! let grid = GridGenerator::generate(Coordinate::new(-34.6037, -58.3816), &config).unwrap();
//! assert_eq!(grid.cells.len(), 16);
//! assert_eq!(grid.cells[0].label, "A1");
//! ```

mod binner;
mod error;
mod frame;
mod generator;
mod labels;

pub use binner::SpatialBinner;
pub use error::GridError;
pub use generator::{GridGenerator, MAX_CELLS, cell_area, total_area};
pub use labels::{cell_label, row_label};
