mod grid;
mod measure;

pub use grid::{BinArgs, CellArgs, GenerateArgs, GeometryArgs, GridCommands};
pub use measure::{MeasureArgs, MeasureCommands, PathArgs};
