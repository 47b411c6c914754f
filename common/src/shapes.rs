use rand::Rng;

/// Axis-aligned box anchored at its top-left corner.
///
/// The occupied region is the half-open range `[x, x + width) × [y, y + height)`.
/// Edges are widened to `i64` so extents near the `i32` limits do not overflow.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Aabb {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Aabb {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn left(&self) -> i64 {
        self.x as i64
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn top(&self) -> i64 {
        self.y as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn top_left(&self) -> (i64, i64) {
        (self.left(), self.top())
    }

    pub fn bottom_right(&self) -> (i64, i64) {
        (self.right(), self.bottom())
    }

    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    // Half-open: the right and bottom edges are outside the box.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        let (x, y) = (x as i64, y as i64);
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    pub fn expand_to_include(&mut self, other: &Aabb) {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        self.x = left as i32;
        self.y = top as i32;
        self.width = (right - left).min(i32::MAX as i64) as i32;
        self.height = (bottom - top).min(i32::MAX as i64) as i32;
    }

    /// Random box inside `self` whose sides are at most `max_size`.
    /// Collapses to a zero-sized box at the anchor when `self` is too small.
    pub fn get_random_aabb_inside<R: Rng>(&self, max_size: i32, rng: &mut R) -> Aabb {
        let width = Self::_safe_randi32(rng, 0, max_size.min(self.width));
        let height = Self::_safe_randi32(rng, 0, max_size.min(self.height));
        Aabb {
            x: Self::_safe_randi32(rng, self.x, self.x.saturating_add(self.width - width)),
            y: Self::_safe_randi32(rng, self.y, self.y.saturating_add(self.height - height)),
            width,
            height,
        }
    }

    fn _safe_randi32<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl From<(i32, i32, i32, i32)> for Aabb {
    fn from((x, y, width, height): (i32, i32, i32, i32)) -> Self {
        Aabb::new(x, y, width, height)
    }
}
