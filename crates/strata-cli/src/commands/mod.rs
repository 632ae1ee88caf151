pub mod dispatch;
pub mod grid;
pub mod layers;
pub mod measure;
pub mod schema;
pub mod shared;
