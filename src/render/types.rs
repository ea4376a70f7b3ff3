//! Vertex- und Instanz-Layouts für den Segment-Renderer.

use crate::shared::DrawCommand;
use bytemuck::{Pod, Zeroable};

/// Vertex des Einheits-Quads
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position im Modellraum
    pub position: [f32; 2],
}

impl Vertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[eframe::wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: eframe::wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Einheits-Quad über x ∈ [0, 1], y ∈ [-0.5, 0.5]. Die Segment-Transformation
/// streckt es entlang x auf die Segmentlänge; die Dicke bleibt 1 Welteinheit.
pub const UNIT_QUAD: [Vertex; 4] = [
    Vertex {
        position: [0.0, -0.5],
    },
    Vertex {
        position: [1.0, -0.5],
    },
    Vertex {
        position: [0.0, 0.5],
    },
    Vertex {
        position: [1.0, 0.5],
    },
];

/// Zwei Dreiecke über [`UNIT_QUAD`]
pub const UNIT_QUAD_INDICES: [u16; 6] = [0, 1, 2, 1, 2, 3];

/// Instanz-Attribute eines [`DrawCommand`]: vier Matrix-Spalten, dann die Farbe.
const DRAW_COMMAND_ATTRIBUTES: [eframe::wgpu::VertexAttribute; 5] = eframe::wgpu::vertex_attr_array![
    1 => Float32x4,
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
];

/// Instanz-Layout eines [`DrawCommand`].
pub const fn draw_command_desc() -> eframe::wgpu::VertexBufferLayout<'static> {
    eframe::wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<DrawCommand>() as eframe::wgpu::BufferAddress,
        step_mode: eframe::wgpu::VertexStepMode::Instance,
        attributes: &DRAW_COMMAND_ATTRIBUTES,
    }
}
