//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport.size_px = size;
}

/// Schaltet den Vollbild-Wunsch um. Der Host setzt ihn am Fenster um.
pub fn toggle_fullscreen(state: &mut AppState) {
    state.view.fullscreen = !state.view.fullscreen;
}
