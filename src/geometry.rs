// src/geometry.rs

use glam::Vec2;

/// Infinite line in the plane, stored as a point on the line and a direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2 {
    pub point: Vec2,
    pub direction: Vec2,
}

impl Line2 {
    pub fn new(direction: Vec2, point: Vec2) -> Self {
        Self { point, direction }
    }

    /// Line through `from` heading towards `to`.
    pub fn through(from: Vec2, to: Vec2) -> Self {
        Self::new(to - from, from)
    }

    pub fn point_at(&self, t: f32) -> Vec2 {
        self.point + self.direction * t
    }
}

/// Unit vector along `v`, `None` for a zero or non-finite vector. The vector
/// is rescaled by its largest component first so tiny inputs don't underflow.
pub fn unit_direction(v: Vec2) -> Option<Vec2> {
    let largest = v.abs().max_element();
    if largest == 0.0 || !largest.is_finite() {
        return None;
    }
    Some((v / largest).normalize())
}

/// Distance from the origin without squaring the components.
pub fn magnitude(v: Vec2) -> f32 {
    v.x.hypot(v.y)
}

/// Clock arithmetic: `dividend mod divisor` mapped into `[0, divisor)`,
/// also for negative dividends where `%` would return a negative remainder.
///
/// A zero divisor yields `|dividend|`; a negative divisor flips the sign of
/// both operands.
pub fn modulo(dividend: i32, divisor: i32) -> u32 {
    if divisor == 0 {
        return dividend.unsigned_abs();
    } else if divisor < 0 {
        return modulo(-dividend, -divisor);
    }

    let mut modulus = dividend % divisor;
    if modulus < 0 {
        modulus += divisor;
    }
    modulus as u32
}

/// Shoelace area of a closed ring. Self-overlapping rings count each
/// region with its winding, which is fine for simple star outlines.
pub fn ring_area(vertices: &[Vec2]) -> f32 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..vertices.len() {
        let j = (i + 1) % vertices.len();
        area += vertices[i].x * vertices[j].y;
        area -= vertices[j].x * vertices[i].y;
    }
    area.abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_direction_handles_tiny_and_zero_vectors() {
        let tiny = unit_direction(Vec2::new(3e-24, -4e-24)).unwrap();
        assert!((tiny - Vec2::new(0.6, -0.8)).length() < 1e-6);
        assert_eq!(unit_direction(Vec2::ZERO), None);
        assert_eq!(unit_direction(Vec2::new(f32::NAN, 1.0)), None);
        assert!((magnitude(Vec2::new(3e-24, 4e-24)) - 5e-24).abs() < 1e-29);
    }

    #[test]
    fn modulo_maps_negative_dividends_into_range() {
        let tests = [
            (7, 3, 1),
            (-2, 10, 8),
            (-10, 10, 0),
            (-11, 10, 9),
            (0, 8, 0),
            (15, 8, 7),
        ];

        for (dividend, divisor, expected) in tests {
            let got = modulo(dividend, divisor);
            assert_eq!(
                got, expected,
                "expected {dividend} mod {divisor} to be {expected}, got {got}"
            );
        }
    }

    #[test]
    fn modulo_zero_divisor_returns_abs_dividend() {
        assert_eq!(modulo(-5, 0), 5);
        assert_eq!(modulo(5, 0), 5);
    }

    #[test]
    fn modulo_negative_divisor_negates_both() {
        // (-7) mod (-3) -> 7 mod 3
        assert_eq!(modulo(-7, -3), 1);
        // 7 mod (-3) -> -7 mod 3
        assert_eq!(modulo(7, -3), 2);
    }

    #[test]
    fn line_through_points() {
        let line = Line2::through(Vec2::new(1.0, 1.0), Vec2::new(3.0, 5.0));
        assert_eq!(line.point_at(0.0), Vec2::new(1.0, 1.0));
        assert_eq!(line.point_at(1.0), Vec2::new(3.0, 5.0));
        assert_eq!(line.point_at(0.5), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn ring_area_of_unit_square() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        assert!((ring_area(&square) - 1.0).abs() < 1e-6);
        assert_eq!(ring_area(&square[..2]), 0.0);
    }
}
