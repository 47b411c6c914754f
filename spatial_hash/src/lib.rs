pub mod collision_detection;
pub mod error;
pub mod grid;

pub use error::{GridError, GridResult};
pub use grid::{CellCoord, CellRange, EntityHandle, GridConfig, SpatialHashGrid};
