//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Segmente: {} | Kreuzungen: {}",
                state.segment_count(),
                state.network.total_crossings()
            ));

            ui.separator();

            let anchor = state.drawing.anchor;
            let center = state.view.camera.center();
            ui.label(format!(
                "Anker: ({:.1}, {:.1}) | Kamera: ({:.1}, {:.1})",
                anchor.x, anchor.y, center.x, center.y
            ));

            ui.separator();

            let stats = state.stats;
            ui.label(format!(
                "Gezeichnet: {} | Abgewiesen: {} | Verdrängt: {}",
                stats.committed, stats.refused, stats.evicted
            ));

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
