//! Zeiger-Events: Position → Welt, Tastenfreigaben → Commit / Anker.

use crate::app::FrameInput;
use crate::core::{FollowCamera, Viewport};
use glam::Vec2;

/// Bildschirmposition (egui, absolut) → Weltkoordinaten.
pub(super) fn screen_pos_to_world(
    pos: egui::Pos2,
    rect: egui::Rect,
    viewport: &Viewport,
    camera: &FollowCamera,
) -> Vec2 {
    let local = pos - rect.min;
    viewport.screen_to_world(Vec2::new(local.x, local.y), camera)
}

/// Primär-Freigabe übernimmt das Segment, Sekundär-Freigabe setzt den Anker.
pub(super) fn apply_buttons(ui: &egui::Ui, response: &egui::Response, input: &mut FrameInput) {
    if !response.hovered() {
        return;
    }

    let (primary_released, secondary_released) = ui.input(|i| {
        (
            i.pointer.button_released(egui::PointerButton::Primary),
            i.pointer.button_released(egui::PointerButton::Secondary),
        )
    });

    input.commit_requested |= primary_released;
    input.reposition_requested |= secondary_released;
}
