use common::shapes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_getters() {
    let aabb = Aabb::new(2, 3, 4, 6);
    assert_eq!(aabb.width(), 4);
    assert_eq!(aabb.height(), 6);
    assert_eq!(aabb.left(), 2);
    assert_eq!(aabb.right(), 6);
    assert_eq!(aabb.top(), 3);
    assert_eq!(aabb.bottom(), 9);
    assert_eq!(aabb.top_left(), (2, 3));
    assert_eq!(aabb.bottom_right(), (6, 9));
    assert_eq!(aabb.area(), 24);
}

#[test]
fn test_edges_do_not_overflow() {
    let aabb = Aabb::new(i32::MAX, i32::MIN, 10, 10);
    assert_eq!(aabb.right(), i32::MAX as i64 + 10);
    assert_eq!(aabb.bottom(), i32::MIN as i64 + 10);
}

#[test]
fn test_contains_point_is_half_open() {
    let aabb = Aabb::new(0, 0, 10, 10);
    assert!(aabb.contains_point(0, 0));
    assert!(aabb.contains_point(9, 9));
    assert!(!aabb.contains_point(10, 5));
    assert!(!aabb.contains_point(5, 10));
    assert!(!aabb.contains_point(-1, 5));
}

#[test]
fn test_degenerate() {
    assert!(Aabb::new(5, 5, 0, 10).is_degenerate());
    assert!(Aabb::new(5, 5, 10, 0).is_degenerate());
    assert!(!Aabb::new(5, 5, 1, 1).is_degenerate());
}

#[test]
fn test_expand_to_include() {
    let mut aabb = Aabb::new(2, 3, 4, 6);
    let other = Aabb::new(-2, 5, 4, 10);
    aabb.expand_to_include(&other);
    assert_eq!(aabb, Aabb::new(-2, 3, 8, 12));
}

#[test]
fn test_from_tuple() {
    assert_eq!(Aabb::from((1, 2, 3, 4)), Aabb::new(1, 2, 3, 4));
}

#[test]
fn test_get_random_aabb_inside() {
    let bounds = Aabb::new(-50, -50, 100, 100);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..100 {
        let aabb = bounds.get_random_aabb_inside(20, &mut rng);
        assert!(aabb.width >= 0 && aabb.width <= 20);
        assert!(aabb.height >= 0 && aabb.height <= 20);
        assert!(aabb.left() >= bounds.left() && aabb.right() <= bounds.right());
        assert!(aabb.top() >= bounds.top() && aabb.bottom() <= bounds.bottom());
    }
}

#[test]
fn test_get_random_aabb_inside_empty_bounds() {
    let bounds = Aabb::new(7, 9, 0, 0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    let aabb = bounds.get_random_aabb_inside(20, &mut rng);
    assert_eq!(aabb, Aabb::new(7, 9, 0, 0));
}
