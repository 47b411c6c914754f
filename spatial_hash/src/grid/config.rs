use crate::error::{GridError, GridResult};

#[derive(Debug, Clone)]
pub struct GridConfig {
    pub cell_size: u32,
    pub entity_capacity: usize,
}

impl GridConfig {
    pub(crate) const DEFAULT_CELL_SIZE: u32 = 256;

    pub fn with_cell_size(cell_size: u32) -> Self {
        GridConfig {
            cell_size,
            ..GridConfig::default()
        }
    }

    /// Returns `log2(cell_size)`, or an error when the size is not a positive power of two.
    pub fn cell_size_log2(&self) -> GridResult<u32> {
        if !self.cell_size.is_power_of_two() {
            return Err(GridError::InvalidCellSize {
                cell_size: self.cell_size,
            });
        }
        Ok(self.cell_size.trailing_zeros())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            cell_size: Self::DEFAULT_CELL_SIZE,
            // One frame's worth of entities for a typical simulation tick.
            entity_capacity: 1024,
        }
    }
}
