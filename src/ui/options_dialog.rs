//! Optionen-Dialog für Zeichnen, Kamera, Bestückung und Farben.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Zeichnen ────────────────────────────────────
                    ui.collapsing("Zeichnen", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Max. Segmentlänge:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.max_segment_length)
                                        .range(1.0..=200.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Sichtbare Höhe (Welt):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.view_height_world)
                                        .range(10.0..=1000.0)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Fokus Richtung Cursor:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.anchor_smoothing)
                                        .range(0.0..=1.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Nachführung pro Frame:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_smoothing)
                                        .range(0.001..=1.0)
                                        .speed(0.005),
                                )
                                .changed();
                        });
                    });

                    // ── Bestückung ──────────────────────────────────
                    ui.collapsing("Bestückung", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Anzahl Kandidaten:");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.seed_count).range(0..=5000))
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Halbe Ausdehnung:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.seed_half_extent)
                                        .range(1.0..=2000.0)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Länge min/max:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.seed_length_min)
                                        .range(0.1..=500.0)
                                        .speed(0.5),
                                )
                                .changed();
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.seed_length_max)
                                        .range(0.1..=500.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                    });

                    // ── Farben ──────────────────────────────────────
                    ui.collapsing("Farben", |ui| {
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.clear_color);
                        changed |= color_edit(ui, "Ungesättigt:", &mut opts.color_unsaturated);
                        changed |= color_edit(ui, "Gesättigt:", &mut opts.color_saturated);
                        changed |= color_edit(
                            ui,
                            "Vorschau (zulässig):",
                            &mut opts.preview_color_admissible,
                        );
                        changed |= color_edit(
                            ui,
                            "Vorschau (abgewiesen):",
                            &mut opts.preview_color_refused,
                        );
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
