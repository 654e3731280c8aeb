// src/star.rs

use std::fmt;

use glam::{Vec2, Vec3};
use log::{debug, warn};

use crate::error::{Result, StarError};
use crate::geometry::{magnitude, modulo, ring_area, unit_direction, Line2};
use crate::intersection::intersect_lines;

pub const MIN_POINT_COUNT: u32 = 4;
pub const DEFAULT_POINT_COUNT: u32 = 5;
pub const DEFAULT_RADIUS: f32 = 1.0;

/// Inner radius of the four-pointed star as a fraction of the outer radius.
const FOUR_POINT_INNER_RATIO: f32 = 0.2;

/// An N-pointed star on the z = 0 plane.
///
/// The ring holds `2 * N` vertices starting at the top spike `(0, radius)` and
/// running clockwise, outer tips on even indices and inner notches on odd ones.
/// A 3D copy of the ring is kept in lockstep for renderers that want `Vec3`.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    point_count: u32,
    outer_radius: f32,
    inner_radius: f32,
    vertices: Vec<Vec2>,
    vertices_3d: Vec<Vec3>,
    selected: Option<usize>,
}

impl Default for Star {
    fn default() -> Self {
        let mut star = Self {
            point_count: DEFAULT_POINT_COUNT,
            outer_radius: DEFAULT_RADIUS,
            inner_radius: 0.0,
            vertices: Vec::new(),
            vertices_3d: Vec::new(),
            selected: None,
        };
        star.regenerate();
        star
    }
}

fn is_valid_radius(radius: f32) -> bool {
    // also rejects NaN
    radius >= 0.0
}

impl Star {
    /// Builds a star with `point_count` spikes (raised to at least 4).
    /// A negative radius leaves the default 5-pointed unit star.
    pub fn new(point_count: u32, radius: f32) -> Self {
        let mut star = Self::default();
        star.set_shape(point_count, radius);
        star
    }

    /// Full regeneration from a point count and an outer radius. Any inner
    /// radius set through [`Star::set_inner_radius`] is replaced by the
    /// derived one.
    pub fn set_shape(&mut self, point_count: u32, radius: f32) {
        if !is_valid_radius(radius) {
            warn!("Ignoring star shape with invalid radius {radius}");
            return;
        }
        self.outer_radius = radius;
        self.point_count = point_count.max(MIN_POINT_COUNT);
        self.regenerate();
    }

    pub fn set_point_count(&mut self, point_count: u32) {
        let point_count = point_count.max(MIN_POINT_COUNT);
        if point_count == self.point_count {
            return;
        }
        self.point_count = point_count;
        self.regenerate();
    }

    pub fn set_outer_radius(&mut self, radius: f32) {
        if !is_valid_radius(radius) {
            warn!("Ignoring invalid outer radius {radius}");
            return;
        }
        if radius == self.outer_radius {
            return;
        }
        self.outer_radius = radius;
        self.regenerate();
    }

    /// Moves only the inner vertices so they sit `radius` away from the
    /// origin along their current direction. Outer vertices are untouched.
    /// An inner vertex sitting on the origin has no direction and stays put.
    pub fn set_inner_radius(&mut self, radius: f32) {
        if !is_valid_radius(radius) {
            warn!("Ignoring invalid inner radius {radius}");
            return;
        }

        self.inner_radius = radius;
        for i in (1..self.vertices.len()).step_by(2) {
            let p = unit_direction(self.vertices[i]).unwrap_or(Vec2::ZERO) * radius;
            self.write_vertex(i, p);
        }
    }

    /// Highlights one vertex. Anything outside the ring clears the selection.
    pub fn set_selected_index(&mut self, index: isize) {
        self.selected = usize::try_from(index)
            .ok()
            .filter(|&i| i < self.vertices.len());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Snaps every coordinate of both rings to the nearest integer.
    pub fn round_to_integer(&mut self) {
        for i in 0..self.vertices.len() {
            let p = self.vertices[i].round();
            self.write_vertex(i, p);
        }
    }

    pub fn point_count(&self) -> u32 {
        self.point_count
    }

    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    /// Number of ring vertices, always `2 * point_count`.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn vertices_3d(&self) -> &[Vec3] {
        &self.vertices_3d
    }

    pub fn vertex(&self, index: usize) -> Result<Vec2> {
        self.vertices
            .get(index)
            .copied()
            .ok_or(StarError::VertexOutOfRange {
                index,
                len: self.vertices.len(),
            })
    }

    pub fn vertex_3d(&self, index: usize) -> Result<Vec3> {
        self.vertices_3d
            .get(index)
            .copied()
            .ok_or(StarError::VertexOutOfRange {
                index,
                len: self.vertices_3d.len(),
            })
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_vertex(&self) -> Option<Vec2> {
        self.selected.and_then(|i| self.vertices.get(i).copied())
    }

    pub fn area(&self) -> f32 {
        ring_area(&self.vertices)
    }

    fn write_vertex(&mut self, index: usize, p: Vec2) {
        self.vertices[index] = p;
        self.vertices_3d[index] = p.extend(0.0);
    }

    /// Writes `p` at `index` and its reflection over the y axis at `2N - index`.
    fn write_mirrored(&mut self, index: usize, p: Vec2) {
        self.write_vertex(index, p);
        let n = self.point_count as usize;
        if index > 0 && index < n {
            self.write_vertex(2 * n - index, Vec2::new(-p.x, p.y));
        }
    }

    //       0
    //    9 / \ 1
    // 8---+---+---2
    //   \ |   | /
    //    \|   |/
    //    7+   +3
    //     |\ /|
    //     | + |
    //     |/5\|
    //     6   4
    fn regenerate(&mut self) {
        let n = self.point_count as usize;
        let ring = 2 * n;
        self.vertices.resize(ring, Vec2::ZERO);
        self.vertices_3d.resize(ring, Vec3::ZERO);

        // outer tips, right half, mirrored onto the left
        let step = (360.0 / self.point_count as f32).to_radians();
        for i in (0..=n).step_by(2) {
            let angle = (i / 2) as f32 * step;
            let p = Vec2::new(angle.sin(), angle.cos()) * self.outer_radius;
            self.write_mirrored(i, p);
        }

        // inner notches where neighbouring spike edges cross
        for i in (1..=n).step_by(2) {
            let l1 = Line2::through(self.vertices[i - 1], self.vertices[i + 3]);
            let back = modulo(i as i32 - 3, ring as i32) as usize;
            let l2 = Line2::through(self.vertices[i + 1], self.vertices[back]);
            let p = intersect_lines(&l1, &l2).unwrap_or_else(|| {
                debug!("Spike edges around vertex {i} are parallel, using origin");
                Vec2::ZERO
            });
            self.write_mirrored(i, p);
        }

        self.inner_radius = magnitude(self.vertices[1]);

        // The crossing construction collapses to the centre for four points,
        // so that shape uses fixed notches instead.
        if self.point_count == MIN_POINT_COUNT {
            self.inner_radius = self.outer_radius * FOUR_POINT_INNER_RATIO;
            let side = (self.inner_radius * 0.5).sqrt();
            self.write_vertex(1, Vec2::new(side, side));
            self.write_vertex(3, Vec2::new(side, -side));
            self.write_vertex(5, Vec2::new(-side, -side));
            self.write_vertex(7, Vec2::new(-side, side));
        }

        if self.selected.is_some_and(|i| i >= ring) {
            self.selected = None;
        }

        debug!(
            "Generated {}-pointed star, outer radius {}, inner radius {}",
            self.point_count, self.outer_radius, self.inner_radius
        );
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Star")?;
        writeln!(f, "====")?;
        for (i, p) in self.vertices.iter().enumerate() {
            writeln!(f, "{i}: ({}, {})", p.x, p.y)?;
        }
        Ok(())
    }
}
