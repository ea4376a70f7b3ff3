//! Keyboard-Shortcuts für den Viewport.
//!
//! Setzt die Tasten-Flags des `FrameInput`. Solange ein Textfeld den
//! Fokus hat, werden keine Shortcuts ausgewertet.

use crate::app::FrameInput;

/// Überträgt gedrückte Shortcut-Tasten in den Eingabe-Schnappschuss.
pub(super) fn apply_keyboard(ui: &egui::Ui, input: &mut FrameInput) {
    if ui.ctx().wants_keyboard_input() {
        return;
    }

    let (space, f11) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Space),
            i.key_pressed(egui::Key::F11),
        )
    });

    input.reset_camera_requested |= space;
    input.fullscreen_requested |= f11;
}

#[cfg(test)]
mod tests;
