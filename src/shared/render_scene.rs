//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use bytemuck::{Pod, Zeroable};

/// Ein Zeichenbefehl: Einheits-Segment-Quad mit vollständiger
/// Clip-Space-Transformation und Farbe.
///
/// Das Layout entspricht 1:1 einer GPU-Instanz (5 × `vec4<f32>`).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DrawCommand {
    /// Model-View-Projection-Matrix (spaltenweise)
    pub transform: [[f32; 4]; 4],
    /// RGBA-Farbe
    pub color: [f32; 4],
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Hintergrundfarbe, mit der der Frame gelöscht wird
    pub clear_color: [f32; 4],
    /// Zeichenbefehle in Zeichenreihenfolge (Vorschau zuerst)
    pub commands: Vec<DrawCommand>,
}

impl RenderScene {
    /// Anzahl der Zeichenbefehle.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Befehle als Byte-Slice für den Instanz-Buffer.
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.commands)
    }
}
