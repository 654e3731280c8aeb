// src/mesh.rs

use glam::{Vec2, Vec3};

use crate::star::Star;

/// Display geometry for one star, as flat lists on the z = 0 plane.
/// `fill`, `points` and `selected` are triangle lists, `outline` is a line list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StarMesh {
    pub fill: Vec<Vec3>,
    pub outline: Vec<Vec3>,
    pub points: Vec<Vec3>,
    pub selected: Vec<Vec3>,
}

impl StarMesh {
    pub fn build(star: &Star, marker_half_size: f32) -> Self {
        let vertices = star.vertices();
        let mut points = Vec::with_capacity(vertices.len() * 6);
        for p in vertices {
            push_marker(&mut points, *p, marker_half_size);
        }
        let mut selected = Vec::new();
        if let Some(p) = star.selected_vertex() {
            push_marker(&mut selected, p, marker_half_size * 2.0);
        }

        Self {
            fill: fill_triangles(vertices),
            outline: outline_segments(vertices),
            points,
            selected,
        }
    }
}

/// One triangle per spike (inner, tip, previous inner) and a fan over the
/// inner polygon, which stays convex because the notches share a circle.
pub fn fill_triangles(vertices: &[Vec2]) -> Vec<Vec3> {
    let count = vertices.len();
    if count < 6 {
        return Vec::new();
    }
    let mut triangles = Vec::with_capacity((count - 2) * 3);

    for i in (1..count).step_by(2).rev() {
        let previous = if i >= 2 { i - 2 } else { count - 1 };
        triangles.push(vertices[i].extend(0.0));
        triangles.push(vertices[i - 1].extend(0.0));
        triangles.push(vertices[previous].extend(0.0));
    }

    let inner: Vec<Vec2> = (1..count).step_by(2).rev().map(|i| vertices[i]).collect();
    for k in 1..inner.len() - 1 {
        triangles.push(inner[0].extend(0.0));
        triangles.push(inner[k].extend(0.0));
        triangles.push(inner[k + 1].extend(0.0));
    }
    triangles
}

/// Closed outline as line-list pairs.
pub fn outline_segments(vertices: &[Vec2]) -> Vec<Vec3> {
    let count = vertices.len();
    let mut lines = Vec::with_capacity(count * 2);
    for i in 0..count {
        lines.push(vertices[i].extend(0.0));
        lines.push(vertices[(i + 1) % count].extend(0.0));
    }
    lines
}

fn push_marker(out: &mut Vec<Vec3>, center: Vec2, half_size: f32) {
    let c = center.extend(0.0);
    let a = c + Vec3::new(-half_size, -half_size, 0.0);
    let b = c + Vec3::new(half_size, -half_size, 0.0);
    let d = c + Vec3::new(half_size, half_size, 0.0);
    let e = c + Vec3::new(-half_size, half_size, 0.0);
    out.extend_from_slice(&[a, b, d, a, d, e]);
}

/// Reference grid on the z = 0 plane with separate x and y axis segments.
#[derive(Clone, Debug, PartialEq)]
pub struct GridMesh {
    pub lines: Vec<Vec3>,
    pub x_axis: [Vec3; 2],
    pub y_axis: [Vec3; 2],
}

impl GridMesh {
    pub fn build(size: f32, step: f32) -> Self {
        let mut lines = Vec::new();
        if step > 0.0 {
            let steps = (size / step).floor() as usize;
            for k in 1..=steps {
                let i = k as f32 * step;
                // parallel to x
                lines.extend_from_slice(&[Vec3::new(-size, i, 0.0), Vec3::new(size, i, 0.0)]);
                lines.extend_from_slice(&[Vec3::new(-size, -i, 0.0), Vec3::new(size, -i, 0.0)]);
                // parallel to y
                lines.extend_from_slice(&[Vec3::new(i, -size, 0.0), Vec3::new(i, size, 0.0)]);
                lines.extend_from_slice(&[Vec3::new(-i, -size, 0.0), Vec3::new(-i, size, 0.0)]);
            }
        }

        Self {
            lines,
            x_axis: [Vec3::new(-size, 0.0, 0.0), Vec3::new(size, 0.0, 0.0)],
            y_axis: [Vec3::new(0.0, -size, 0.0), Vec3::new(0.0, size, 0.0)],
        }
    }
}
