mod config;
mod types;

pub use config::GridConfig;
pub use types::{CellCoord, CellRange, EntityHandle};

use crate::collision_detection;
use crate::error::GridResult;
use common::shapes::Aabb;
use fxhash::{FxHashMap, FxHashSet};
use log::{debug, trace};
use smallvec::SmallVec;

// Most entities are small relative to a cell, so buckets rarely spill.
type Bucket = SmallVec<[EntityHandle; 8]>;

/// Uniform grid of power-of-two cells used as a collision broad-phase.
///
/// Every insertion registers its handle in each cell its box touches.
/// Queries walk the cells under the query box and test each candidate with a
/// strict overlap check, so boxes that only share an edge are not reported.
/// There is no per-entity removal; call [`SpatialHashGrid::clear`] between ticks.
pub struct SpatialHashGrid {
    cells: FxHashMap<CellCoord, Bucket>,
    aabbs: Vec<Aabb>,
    ids: Vec<u32>,
    cell_size_log2: u32,
    config: GridConfig,
}

impl SpatialHashGrid {
    pub fn new() -> Self {
        let config = GridConfig::default();
        let cell_size_log2 = GridConfig::DEFAULT_CELL_SIZE.trailing_zeros();
        Self::from_parts(config, cell_size_log2)
    }

    pub fn new_with_config(config: GridConfig) -> GridResult<Self> {
        let cell_size_log2 = config.cell_size_log2().map_err(|err| {
            debug!("rejected grid config {:?}: {}", config, err);
            err
        })?;
        Ok(Self::from_parts(config, cell_size_log2))
    }

    fn from_parts(config: GridConfig, cell_size_log2: u32) -> Self {
        debug!(
            "spatial hash grid: cell_size={} entity_capacity={}",
            config.cell_size, config.entity_capacity
        );
        Self {
            cells: FxHashMap::default(),
            aabbs: Vec::with_capacity(config.entity_capacity),
            ids: Vec::with_capacity(config.entity_capacity),
            cell_size_log2,
            config,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn cell_size(&self) -> u32 {
        1 << self.cell_size_log2
    }

    pub fn cell_of(&self, x: i32, y: i32) -> CellCoord {
        CellCoord::from_point(x, y, self.cell_size_log2)
    }

    /// Cells a box with this anchor and size is registered in.
    pub fn cells_spanned(&self, x: i32, y: i32, width: i32, height: i32) -> CellRange {
        CellRange::spanning(x, y, width, height, self.cell_size_log2)
    }

    /// Number of insertions since the last clear.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of cells holding at least one entity.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn entity(&self, handle: EntityHandle) -> Option<(u32, Aabb)> {
        let index = handle.index();
        Some((*self.ids.get(index)?, *self.aabbs.get(index)?))
    }

    pub fn insert(&mut self, x: i32, y: i32, width: i32, height: i32, id: u32) -> EntityHandle {
        debug_assert!(
            width >= 0 && height >= 0,
            "box width/height must be non-negative (width: {}, height: {})",
            width,
            height
        );
        debug_assert!(
            self.ids.len() < u32::MAX as usize,
            "entity handle space exhausted"
        );
        let handle = EntityHandle(self.ids.len() as u32);
        self.aabbs.push(Aabb::new(x, y, width, height));
        self.ids.push(id);

        for cell in self.cells_spanned(x, y, width, height).iter() {
            self.cells.entry(cell).or_default().push(handle);
        }
        handle
    }

    pub fn insert_aabb(&mut self, aabb: Aabb, id: u32) -> EntityHandle {
        self.insert(aabb.x, aabb.y, aabb.width, aabb.height, id)
    }

    /// Ids of every entity strictly overlapping the box, without duplicates and in no
    /// particular order.
    pub fn query(&self, x: i32, y: i32, width: i32, height: i32) -> Vec<u32> {
        let mut result = Vec::new();
        self.query_into(x, y, width, height, &mut result);
        result
    }

    pub fn query_aabb(&self, aabb: &Aabb) -> Vec<u32> {
        self.query(aabb.x, aabb.y, aabb.width, aabb.height)
    }

    /// Same as [`SpatialHashGrid::query`], writing into `result` after clearing it.
    pub fn query_into(&self, x: i32, y: i32, width: i32, height: i32, result: &mut Vec<u32>) {
        result.clear();
        // Handles repeat across cells and ids repeat across handles.
        let mut seen = FxHashSet::default();

        for cell in self.cells_spanned(x, y, width, height).iter() {
            let Some(bucket) = self.cells.get(&cell) else {
                continue;
            };
            for &handle in bucket {
                let entity = &self.aabbs[handle.index()];
                if collision_detection::aabb_aabb_raw(
                    entity.x,
                    entity.y,
                    entity.width,
                    entity.height,
                    x,
                    y,
                    width,
                    height,
                ) {
                    let id = self.ids[handle.index()];
                    if seen.insert(id) {
                        result.push(id);
                    }
                }
            }
        }
    }

    pub fn query_batch(&self, queries: &[Aabb]) -> Vec<Vec<u32>> {
        queries.iter().map(|aabb| self.query_aabb(aabb)).collect()
    }

    /// Drops every entity. Table capacity is kept for the next tick.
    pub fn clear(&mut self) {
        trace!(
            "clearing spatial hash grid: {} entities in {} cells",
            self.ids.len(),
            self.cells.len()
        );
        self.cells.clear();
        self.aabbs.clear();
        self.ids.clear();
    }
}

impl Default for SpatialHashGrid {
    fn default() -> Self {
        Self::new()
    }
}
