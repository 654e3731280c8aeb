// src/point_list.rs

use glam::Vec2;

use crate::star::Star;

/// One list row, numbered from 1 with one decimal per coordinate.
pub fn format_point(index: usize, point: Vec2) -> String {
    format!("{}: ({:.1}, {:.1})", index + 1, point.x, point.y)
}

pub fn point_list(star: &Star) -> Vec<String> {
    star.vertices()
        .iter()
        .enumerate()
        .map(|(i, p)| format_point(i, *p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_one_based() {
        assert_eq!(format_point(0, Vec2::new(0.0, 10.0)), "1: (0.0, 10.0)");
        assert_eq!(format_point(4, Vec2::new(-1.24, 3.04)), "5: (-1.2, 3.0)");
    }

    #[test]
    fn one_row_per_vertex() {
        let star = Star::new(4, 10.0);
        let rows = point_list(&star);
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], "1: (0.0, 10.0)");
        assert_eq!(rows[1], "2: (1.0, 1.0)");
    }
}
