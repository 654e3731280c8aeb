// src/engine_lib/mod.rs
pub mod camera;
pub mod controller;

pub use camera::Camera;
pub use controller::CameraController;
