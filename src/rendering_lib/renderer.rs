// src/rendering_lib/renderer.rs

use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use log::debug;
use wgpu::util::DeviceExt;

use star_generator::mesh::{GridMesh, StarMesh};
use star_generator::{DisplayOptions, Star};

use super::vertex::Vertex;
use crate::engine_lib::camera::Camera;

const INITIAL_VERTEX_CAPACITY: usize = 4096;
const POINT_SIZE_PIXELS: f32 = 7.0;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

#[derive(Debug, Clone, Copy)]
pub struct SceneColors {
    pub clear: wgpu::Color,
    pub fill: [f32; 4],
    pub edge: [f32; 4],
    pub point: [f32; 4],
    pub selected: [f32; 4],
    pub grid: [f32; 4],
    pub x_axis: [f32; 4],
    pub y_axis: [f32; 4],
}

impl Default for SceneColors {
    fn default() -> Self {
        Self {
            clear: wgpu::Color::BLACK,
            fill: [0.8, 0.8, 0.8, 1.0],
            edge: [1.0, 1.0, 0.0, 1.0],
            point: [0.0, 1.0, 0.0, 1.0],
            selected: [1.0, 0.0, 0.0, 1.0],
            grid: [0.5, 0.5, 0.5, 0.5],
            x_axis: [1.0, 0.0, 0.0, 0.5],
            y_axis: [0.0, 0.0, 1.0, 0.5],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topology {
    Triangles,
    Lines,
}

pub struct Renderer {
    triangle_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,

    frame_vertices: Vec<Vertex>,
    draws: Vec<(Topology, Range<u32>)>,

    camera_uniform_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader_module: &wgpu::ShaderModule,
    surface_format: wgpu::TextureFormat,
    topology: wgpu::PrimitiveTopology,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader_module,
            entry_point: "vs_main",
            buffers: &[Vertex::desc()],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader_module,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
    })
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Star Vertex Buffer"),
        size: (capacity * std::mem::size_of::<Vertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl Renderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shader_source: &str,
    ) -> Self {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Renderer Shader Module"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let camera_uniform = CameraUniform {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
        };
        let camera_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Uniform Buffer"),
            contents: bytemuck::bytes_of(&camera_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("camera_bind_group_layout"),
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_uniform_buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Renderer Pipeline Layout"),
                bind_group_layouts: &[&camera_bind_group_layout],
                push_constant_ranges: &[],
            });

        let triangle_pipeline = create_pipeline(
            device,
            &render_pipeline_layout,
            &shader_module,
            surface_format,
            wgpu::PrimitiveTopology::TriangleList,
            "Triangle Pipeline",
        );
        let line_pipeline = create_pipeline(
            device,
            &render_pipeline_layout,
            &shader_module,
            surface_format,
            wgpu::PrimitiveTopology::LineList,
            "Line Pipeline",
        );

        Self {
            triangle_pipeline,
            line_pipeline,
            vertex_buffer: create_vertex_buffer(device, INITIAL_VERTEX_CAPACITY),
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            frame_vertices: Vec::with_capacity(INITIAL_VERTEX_CAPACITY),
            draws: Vec::new(),
            camera_uniform_buffer,
            camera_bind_group,
        }
    }

    fn push_draw(&mut self, topology: Topology, positions: &[Vec3], color: [f32; 4]) {
        if positions.is_empty() {
            return;
        }
        let start = self.frame_vertices.len() as u32;
        self.frame_vertices
            .extend(positions.iter().map(|p| Vertex::new(*p, color)));
        let end = self.frame_vertices.len() as u32;
        self.draws.push((topology, start..end));
    }

    /// Grid first, then fill, edges and points, so later layers draw on top.
    fn build_frame(
        &mut self,
        star: &Star,
        grid: &GridMesh,
        options: &DisplayOptions,
        colors: &SceneColors,
        marker_half_size: f32,
    ) {
        self.frame_vertices.clear();
        self.draws.clear();

        if options.grid {
            self.push_draw(Topology::Lines, &grid.lines, colors.grid);
            self.push_draw(Topology::Lines, &grid.x_axis, colors.x_axis);
            self.push_draw(Topology::Lines, &grid.y_axis, colors.y_axis);
        }

        let mesh = StarMesh::build(star, marker_half_size);
        if options.fill {
            self.push_draw(Topology::Triangles, &mesh.fill, colors.fill);
        }
        if options.edge {
            self.push_draw(Topology::Lines, &mesh.outline, colors.edge);
        }
        if options.point {
            self.push_draw(Topology::Triangles, &mesh.points, colors.point);
            self.push_draw(Topology::Triangles, &mesh.selected, colors.selected);
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn render_scene(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        star: &Star,
        grid: &GridMesh,
        options: &DisplayOptions,
        camera: &Camera,
        screen_width: f32,
        screen_height: f32,
        colors: &SceneColors,
    ) {
        let camera_uniform = CameraUniform {
            view_proj: camera
                .view_projection(screen_width, screen_height)
                .to_cols_array_2d(),
        };
        queue.write_buffer(&self.camera_uniform_buffer, 0, bytemuck::bytes_of(&camera_uniform));

        let marker_half_size = camera.world_size_of_pixels(POINT_SIZE_PIXELS, screen_height) / 2.0;
        self.build_frame(star, grid, options, colors, marker_half_size);

        if self.frame_vertices.len() > self.vertex_capacity {
            self.vertex_capacity = self.frame_vertices.len().next_power_of_two();
            debug!("Growing vertex buffer to {} vertices", self.vertex_capacity);
            self.vertex_buffer = create_vertex_buffer(device, self.vertex_capacity);
        }
        if !self.frame_vertices.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.frame_vertices));
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Star Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output_view,
                resolve_target: None,
                ops: wgpu::Operations { load: wgpu::LoadOp::Clear(colors.clear), store: wgpu::StoreOp::Store },
            })],
            depth_stencil_attachment: None, occlusion_query_set: None, timestamp_writes: None,
        });

        if self.draws.is_empty() {
            return;
        }

        let used_bytes = (self.frame_vertices.len() * std::mem::size_of::<Vertex>()) as u64;
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..used_bytes));
        for (topology, range) in &self.draws {
            match topology {
                Topology::Triangles => render_pass.set_pipeline(&self.triangle_pipeline),
                Topology::Lines => render_pass.set_pipeline(&self.line_pipeline),
            }
            render_pass.draw(range.clone(), 0..1);
        }
    }
}
