// src/app.rs

use std::sync::Arc;

use log::{debug, info};
use winit::{
    event::{ElementState, WindowEvent},
    window::Window,
};

use star_generator::mesh::GridMesh;
use star_generator::{SliderConfig, Star, StarCommand};

use crate::engine_lib::camera::Camera;
use crate::engine_lib::controller::CameraController;
use crate::rendering_lib::renderer::{Renderer, SceneColors};
use crate::rendering_lib::shader::WGSL_SHADER_SOURCE;
use crate::ui::{build_ui, UiAction, UiState};

const STARTUP_POINT_COUNT: u32 = 5;
const STARTUP_RADIUS: f32 = 10.0;
const GRID_STEP: f32 = 1.0;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter found")]
    NoAdapter,
    #[error("device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

pub struct StarApp {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    renderer: Renderer,
    colors: SceneColors,
    star: Star,
    slider_config: SliderConfig,
    grid: GridMesh,
    ui_state: UiState,
    camera: Camera,
    camera_controller: CameraController,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl StarApp {
    pub async fn new(window: Arc<Window>) -> Result<Self, AppError> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(AppError::NoAdapter)?;
        info!("Using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps.formats.iter().copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or(AppError::NoSurfaceFormat)?;
        let alpha_mode = surface_caps.alpha_modes.first().copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = Renderer::new(&device, config.format, WGSL_SHADER_SOURCE);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(), egui::ViewportId::ROOT, &window,
            Some(window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &device, config.format, None, 1,
        );

        info!("Generating a default {STARTUP_POINT_COUNT} pointed star");
        let star = Star::new(STARTUP_POINT_COUNT, STARTUP_RADIUS);
        debug!("{star}");

        let slider_config = SliderConfig::default();
        let ui_state = UiState::new(&star, &slider_config);
        let grid = GridMesh::build(slider_config.grid_size(), GRID_STEP);
        let mut camera = Camera::new(60.0, 0.1, 1000.0);
        camera.reset(slider_config.grid_size());

        Ok(Self {
            surface, device, queue, config, size,
            renderer,
            colors: SceneColors::default(),
            star, slider_config, grid, ui_state,
            camera,
            camera_controller: CameraController::new(),
            egui_ctx, egui_state, egui_renderer,
        })
    }

    pub fn get_size(&self) -> winit::dpi::PhysicalSize<u32> { self.size }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::Star(command) => self.apply_star_command(command),
            UiAction::ResetCamera => self.camera.reset(self.slider_config.grid_size()),
            UiAction::ApplyLimits { max_points, max_radius } => {
                self.slider_config.set_limits(max_points, max_radius);
                info!(
                    "Slider limits: {} points, radius {}",
                    self.slider_config.max_points(),
                    self.slider_config.max_radius()
                );
                if self.star.point_count() > self.slider_config.max_points() {
                    self.apply_star_command(StarCommand::SetPointCount(self.slider_config.max_points()));
                }
                self.grid = GridMesh::build(self.slider_config.grid_size(), GRID_STEP);
                self.camera.reset(self.slider_config.grid_size());
                self.ui_state.sync_sliders(&self.star, &self.slider_config);
            }
        }
    }

    fn apply_star_command(&mut self, command: StarCommand) {
        if !self.star.apply(command) {
            return;
        }
        // a changed ring invalidates the list selection
        self.star.clear_selection();
        if command.regenerates() {
            self.ui_state.sync_sliders(&self.star, &self.slider_config);
        }
        self.ui_state.refresh_points(&self.star);
        debug!("{:?} -> inner radius {}", command, self.star.inner_radius());
    }

    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        let raw_input = self.egui_state.take_egui_input(window);
        let mut actions = Vec::new();
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            actions = build_ui(ctx, &mut self.ui_state, &self.star, &self.slider_config);
        });
        for action in actions {
            self.apply_action(action);
        }

        let output_texture = self.surface.get_current_texture()?;
        let view = output_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Main Command Encoder"),
        });

        self.renderer.render_scene(
            &self.device, &self.queue, &mut encoder, &view,
            &self.star, &self.grid, &self.ui_state.options, &self.camera,
            self.size.width as f32, self.size.height as f32,
            &self.colors,
        );

        self.egui_state.handle_platform_output(window, full_output.platform_output);
        let tris = self.egui_ctx.tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };
        self.egui_renderer.update_buffers(&self.device, &self.queue, &mut encoder, &tris, &screen_descriptor);
        {
            let mut gui_render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("GUI Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view, resolve_target: None,
                    ops: wgpu::Operations { load: wgpu::LoadOp::Load, store: wgpu::StoreOp::Store },
                })],
                depth_stencil_attachment: None, occlusion_query_set: None, timestamp_writes: None,
            });
            self.egui_renderer.render(&mut gui_render_pass, &tris, &screen_descriptor);
        }
        for tex_id in &full_output.textures_delta.free { self.egui_renderer.free_texture(tex_id); }

        self.queue.submit(std::iter::once(encoder.finish()));
        output_texture.present();
        Ok(())
    }

    /// Returns true when the event was consumed by the UI or the camera.
    pub fn handle_window_event(&mut self, event: &WindowEvent, window: &Window) -> bool {
        if self.egui_state.on_window_event(window, event).consumed { return true; }
        let starts_gesture = matches!(
            event,
            WindowEvent::MouseInput { state: ElementState::Pressed, .. } | WindowEvent::MouseWheel { .. }
        );
        if starts_gesture && self.egui_ctx.is_pointer_over_area() {
            return false;
        }
        self.camera_controller.handle_window_event(event, &mut self.camera)
    }
}
