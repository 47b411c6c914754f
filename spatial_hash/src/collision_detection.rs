use common::shapes::Aabb;

// Strict on every edge: boxes that only share a boundary do not collide.
#[inline(always)]
pub fn aabb_aabb_raw(
    entity_x: i32,
    entity_y: i32,
    entity_width: i32,
    entity_height: i32,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) -> bool {
    let (ex, ey) = (entity_x as i64, entity_y as i64);
    let (qx, qy) = (x as i64, y as i64);
    qx < ex + entity_width as i64
        && ex < qx + width as i64
        && qy < ey + entity_height as i64
        && ey < qy + height as i64
}

pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    a.left() < b.right() && b.left() < a.right() && a.top() < b.bottom() && b.top() < a.bottom()
}
