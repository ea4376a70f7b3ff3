//! Segment-Renderer mit GPU-Instancing: eine Quad-Instanz pro Zeichenbefehl.

use super::types::{draw_command_desc, Vertex, UNIT_QUAD, UNIT_QUAD_INDICES};
use crate::shared::RenderScene;
use eframe::{egui_wgpu, wgpu};
use wgpu::util::DeviceExt;

/// Renderer für Vorschau und Netzwerk-Segmente
pub struct SegmentRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    instance_buffer: Option<wgpu::Buffer>,
    instance_capacity: usize,
}

impl SegmentRenderer {
    /// Erstellt einen neuen Segment-Renderer
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        // Keine Uniforms: jede Instanz bringt ihre volle Clip-Transformation mit
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Segment Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Segment Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_segment"),
                buffers: &[Vertex::desc(), draw_command_desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_segment"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: render_state.target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 4,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Segment Vertex Buffer"),
            contents: bytemuck::cast_slice(&UNIT_QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Segment Index Buffer"),
            contents: bytemuck::cast_slice(&UNIT_QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            instance_buffer: None,
            instance_capacity: 0,
        }
    }

    /// Zeichnet alle Befehle der Szene in einem Instanced-Draw.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        render_pass: &mut wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        if scene.is_empty() {
            return;
        }

        let needed_capacity = scene.len();
        if self.instance_buffer.is_none() || self.instance_capacity < needed_capacity {
            let new_capacity = needed_capacity.max(64).next_power_of_two();
            self.instance_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Segment Instance Buffer"),
                size: (new_capacity * std::mem::size_of::<crate::shared::DrawCommand>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.instance_capacity = new_capacity;
            log::debug!("Segment-Instanzpuffer auf {} vergrößert", new_capacity);
        }

        let Some(buffer) = &self.instance_buffer else {
            return;
        };
        queue.write_buffer(buffer, 0, scene.instance_bytes());

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(
            0..UNIT_QUAD_INDICES.len() as u32,
            0,
            0..scene.len() as u32,
        );
    }
}
