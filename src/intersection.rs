// src/intersection.rs

use glam::Vec2;

use crate::geometry::{unit_direction, Line2};

/// Intersection point of two infinite lines, `None` when they are parallel
/// (or either direction is degenerate).
///
/// Directions are reduced to unit length first, so the parallel test does not
/// depend on how long the defining segments are.
pub fn intersect_lines(l1: &Line2, l2: &Line2) -> Option<Vec2> {
    let d1 = unit_direction(l1.direction)?;
    let d2 = unit_direction(l2.direction)?;

    let denominator = d1.perp_dot(d2);
    if denominator.abs() <= f32::EPSILON {
        return None;
    }

    let t = (l2.point - l1.point).perp_dot(d2) / denominator;
    Some(Line2::new(d1, l1.point).point_at(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-5, "expected {a:?} to be close to {b:?}");
    }

    #[test]
    fn crossing_axes_meet_at_origin() {
        let vertical = Line2::through(Vec2::new(0.0, 10.0), Vec2::new(0.0, -10.0));
        let horizontal = Line2::through(Vec2::new(10.0, 0.0), Vec2::new(-10.0, 0.0));
        assert_close(intersect_lines(&vertical, &horizontal).unwrap(), Vec2::ZERO);
    }

    #[test]
    fn diagonals_meet_off_segment() {
        let l1 = Line2::through(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let l2 = Line2::through(Vec2::new(4.0, 0.0), Vec2::new(3.0, 1.0));
        assert_close(intersect_lines(&l1, &l2).unwrap(), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn order_of_lines_does_not_matter() {
        let l1 = Line2::through(Vec2::new(-1.0, 3.0), Vec2::new(2.0, -1.0));
        let l2 = Line2::through(Vec2::new(0.0, -2.0), Vec2::new(1.0, 4.0));
        assert_close(
            intersect_lines(&l1, &l2).unwrap(),
            intersect_lines(&l2, &l1).unwrap(),
        );
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let l1 = Line2::through(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let l2 = Line2::through(Vec2::new(0.0, 1.0), Vec2::new(2.0, 3.0));
        assert_eq!(intersect_lines(&l1, &l2), None);
    }

    #[test]
    fn tiny_segments_still_intersect() {
        let l1 = Line2::through(Vec2::new(0.0, 0.0), Vec2::new(1e-23, 1e-23));
        let l2 = Line2::through(Vec2::new(4e-23, 0.0), Vec2::new(3e-23, 1e-23));
        let p = intersect_lines(&l1, &l2).unwrap();
        assert!((p - Vec2::new(2e-23, 2e-23)).abs().max_element() < 1e-28);
    }

    #[test]
    fn degenerate_direction_does_not_intersect() {
        let point = Line2::new(Vec2::ZERO, Vec2::new(1.0, 1.0));
        let line = Line2::through(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        assert_eq!(intersect_lines(&point, &line), None);
    }
}
