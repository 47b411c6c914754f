/// Integer coordinate of one grid cell.
///
/// Hashed component-wise, so negative and large coordinates stay distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    #[inline(always)]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    // Arithmetic shift floors toward negative infinity, so -1 lands in cell -1.
    #[inline(always)]
    pub fn from_point(x: i32, y: i32, cell_size_log2: u32) -> Self {
        Self {
            x: x >> cell_size_log2,
            y: y >> cell_size_log2,
        }
    }
}

/// Key for one insertion into the grid; unique until the next `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct EntityHandle(pub(crate) u32);

impl EntityHandle {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Inclusive rectangle of cells covered by a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub min: CellCoord,
    pub max: CellCoord,
}

impl CellRange {
    #[inline(always)]
    pub fn spanning(x: i32, y: i32, width: i32, height: i32, cell_size_log2: u32) -> Self {
        Self {
            min: CellCoord::from_point(x, y, cell_size_log2),
            max: CellCoord::from_point(
                x.saturating_add(width),
                y.saturating_add(height),
                cell_size_log2,
            ),
        }
    }

    pub fn cell_count(&self) -> usize {
        let columns = (self.max.x as i64 - self.min.x as i64 + 1).max(0) as usize;
        let rows = (self.max.y as i64 - self.min.y as i64 + 1).max(0) as usize;
        columns * rows
    }

    pub fn iter(&self) -> impl Iterator<Item = CellCoord> {
        let (min, max) = (self.min, self.max);
        (min.x..=max.x).flat_map(move |i| (min.y..=max.y).map(move |j| CellCoord::new(i, j)))
    }
}
