// src/engine_lib/camera.rs

use glam::{Mat4, Vec3};

pub const DEFAULT_DISTANCE: f32 = 20.0;
const PITCH_LIMIT_DEG: f32 = 89.0;
const ROTATE_DEG_PER_PIXEL: f32 = 0.5;
const ZOOM_PER_PIXEL: f32 = 0.2;

/// Camera orbiting the origin: heading and pitch in degrees, then a pull-back
/// along the view axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub pitch_deg: f32,
    pub heading_deg: f32,
    pub distance: f32,
    pub fov_y_rad: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(fov_y_deg: f32, znear: f32, zfar: f32) -> Self {
        Self {
            pitch_deg: 0.0,
            heading_deg: 0.0,
            distance: DEFAULT_DISTANCE,
            fov_y_rad: fov_y_deg.to_radians(),
            znear,
            zfar,
        }
    }

    /// Orbit by a mouse drag of `(dx, dy)` pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.heading_deg -= dx * ROTATE_DEG_PER_PIXEL;
        self.pitch_deg -= dy * ROTATE_DEG_PER_PIXEL;
        self.pitch_deg = self.pitch_deg.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    }

    /// Zoom by a vertical mouse drag of `dy` pixels.
    pub fn zoom(&mut self, dy: f32) {
        self.zoom_delta(-dy * ZOOM_PER_PIXEL);
    }

    /// Move the camera `delta` units further away (negative moves closer).
    pub fn zoom_delta(&mut self, delta: f32) {
        self.distance = (self.distance + delta).clamp(self.znear, self.zfar);
    }

    pub fn reset(&mut self, grid_size: f32) {
        self.pitch_deg = 0.0;
        self.heading_deg = 0.0;
        self.distance = (grid_size * 2.0).clamp(self.znear, self.zfar);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance))
            * Mat4::from_rotation_x(-self.pitch_deg.to_radians())
            * Mat4::from_rotation_y(-self.heading_deg.to_radians())
    }

    pub fn projection_matrix(&self, screen_width: f32, screen_height: f32) -> Mat4 {
        let aspect_ratio = if screen_height > 0.0 { screen_width / screen_height } else { 1.0 };
        Mat4::perspective_rh(self.fov_y_rad, aspect_ratio, self.znear, self.zfar)
    }

    pub fn view_projection(&self, screen_width: f32, screen_height: f32) -> Mat4 {
        self.projection_matrix(screen_width, screen_height) * self.view_matrix()
    }

    /// World-space length covering roughly `pixels` on screen at the origin,
    /// used to keep point markers a constant size while zooming.
    pub fn world_size_of_pixels(&self, pixels: f32, screen_height: f32) -> f32 {
        if screen_height <= 0.0 {
            return 0.0;
        }
        let visible_height = 2.0 * self.distance * (self.fov_y_rad / 2.0).tan();
        pixels * visible_height / screen_height
    }
}
