//! Use-Case-Funktionen für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::LinesOptions;
use anyhow::Context;

/// Prüft und übernimmt neue Optionen.
///
/// Ungültige Optionen werden abgelehnt; die bisherigen bleiben aktiv.
pub fn apply_options(state: &mut AppState, options: LinesOptions) -> anyhow::Result<()> {
    options
        .validate()
        .context("Optionen wurden nicht übernommen")?;

    state.view.camera.anchor_smoothing = options.anchor_smoothing;
    state.view.camera.camera_smoothing = options.camera_smoothing;
    state.view.viewport.view_height_world = options.view_height_world;
    state.options = options;
    Ok(())
}

/// Schreibt die aktuellen Optionen in die Konfigurationsdatei.
pub fn save_options(state: &AppState) -> anyhow::Result<()> {
    state
        .options
        .save_to_file(&state.options_path)
        .with_context(|| format!("Optionen nach {} speichern", state.options_path.display()))
}

/// Öffnet den Options-Dialog.
pub fn open_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Options-Dialog.
pub fn close_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}
