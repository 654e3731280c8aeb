// src/engine_lib/controller.rs

use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::engine_lib::camera::Camera;

/// Wheel pixels treated as one line on touchpads that report pixel deltas.
const PIXELS_PER_LINE: f32 = 40.0;

/// Turns mouse input over the viewport into orbit and zoom.
/// Left drag orbits, right drag zooms, the wheel zooms in steps.
#[derive(Debug, Default)]
pub struct CameraController {
    left_down: bool,
    right_down: bool,
    last_cursor: Option<(f32, f32)>,
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the event changed the camera.
    pub fn handle_window_event(&mut self, event: &WindowEvent, camera: &mut Camera) -> bool {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                let pressed = *state == ElementState::Pressed;
                match button {
                    MouseButton::Left => self.left_down = pressed,
                    MouseButton::Right => self.right_down = pressed,
                    _ => {}
                }
                false
            }
            WindowEvent::CursorMoved { position, .. } => {
                let current = (position.x as f32, position.y as f32);
                let previous = self.last_cursor.replace(current);
                let Some((last_x, last_y)) = previous else {
                    return false;
                };
                let (dx, dy) = (current.0 - last_x, current.1 - last_y);
                if self.left_down {
                    camera.rotate(dx, dy);
                    true
                } else if self.right_down {
                    camera.zoom(dy);
                    true
                } else {
                    false
                }
            }
            WindowEvent::CursorLeft { .. } => {
                self.last_cursor = None;
                false
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_LINE,
                };
                camera.zoom_delta(-lines);
                true
            }
            WindowEvent::Focused(false) => {
                self.left_down = false;
                self.right_down = false;
                false
            }
            _ => false,
        }
    }
}
