//! Top-Menü (Datei, Ansicht, Optionen).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Kamera zurücksetzen (Leertaste)").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                let fullscreen_label = if state.view.fullscreen {
                    "Vollbild verlassen (F11)"
                } else {
                    "Vollbild (F11)"
                };
                if ui.button(fullscreen_label).clicked() {
                    events.push(AppIntent::ToggleFullscreenRequested);
                    ui.close();
                }
            });

            ui.menu_button("Optionen", |ui| {
                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
