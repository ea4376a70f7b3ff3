//! Viewport-Input-Handling: Maus und Tastatur → `FrameInput`.

mod pointer;

use super::keyboard;
use crate::app::FrameInput;
use crate::core::{FollowCamera, Viewport};
use glam::Vec2;

/// Verwaltet den Input-Zustand für das Viewport.
///
/// Merkt sich die letzte Cursor-Weltposition, damit die Vorschau stehen
/// bleibt, wenn der Zeiger die Zeichenfläche verlässt.
#[derive(Debug, Default)]
pub struct InputState {
    last_cursor_world: Vec2,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt den Eingabe-Schnappschuss des aktuellen Frames.
    ///
    /// `viewport` und `camera` sind der Stand vor diesem Frame; eine neue
    /// Flächengröße wird für die Cursor-Umrechnung bereits berücksichtigt.
    pub fn collect_frame_input(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport: &Viewport,
        camera: &FollowCamera,
    ) -> FrameInput {
        let size = [response.rect.width(), response.rect.height()];
        let mut current_viewport = *viewport;
        current_viewport.size_px = size;

        if let Some(hover_pos) = response.hover_pos() {
            self.last_cursor_world =
                pointer::screen_pos_to_world(hover_pos, response.rect, &current_viewport, camera);
        }

        let mut input = FrameInput::at(self.last_cursor_world);
        if viewport.size_px != size {
            input.viewport_size = Some(size);
        }

        pointer::apply_buttons(ui, response, &mut input);
        keyboard::apply_keyboard(ui, &mut input);

        input
    }
}
