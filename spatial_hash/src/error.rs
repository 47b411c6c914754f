use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    InvalidCellSize { cell_size: u32 },
}

pub type GridResult<T> = Result<T, GridError>;

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidCellSize { cell_size } => {
                write!(
                    f,
                    "cell size must be a positive power of two (cell_size: {})",
                    cell_size
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
