//! GPU-Rendering mit wgpu.

mod callback;
mod segment_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use callback::{WgpuRenderCallback, WgpuRenderData};
pub(crate) use segment_renderer::SegmentRenderer;

use eframe::egui_wgpu;

/// Haupt-Renderer für das Segment-Netzwerk.
///
/// Hält Pipeline und GPU-Buffer; pro Frame wird nur die fertige
/// [`RenderScene`] übergeben.
pub struct Renderer {
    segment_renderer: SegmentRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let shader = render_state
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Segment Shader"),
                source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
            });

        Self {
            segment_renderer: SegmentRenderer::new(render_state, &shader),
        }
    }

    /// Rendert die komplette Szene (Vorschau und Segmente)
    pub fn render_scene(
        &mut self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        log::trace!("render_scene: {} Befehle", scene.len());
        self.segment_renderer
            .render(device, queue, render_pass, scene);
    }
}
