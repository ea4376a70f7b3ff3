use super::*;
use crate::app::AppIntent;
use glam::Vec2;

fn key_event(key: egui::Key) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::default(),
    }
}

fn collect_with_key_event(event: egui::Event) -> FrameInput {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.events.push(event);

    let mut input = FrameInput::at(Vec2::ZERO);
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            apply_keyboard(ui, &mut input);
        });
    });

    input
}

#[test]
fn test_space_resets_camera() {
    let input = collect_with_key_event(key_event(egui::Key::Space));

    assert!(input.reset_camera_requested);
    assert_eq!(input.intents(), vec![AppIntent::ResetCameraRequested]);
}

#[test]
fn test_f11_toggles_fullscreen() {
    let input = collect_with_key_event(key_event(egui::Key::F11));

    assert!(input.fullscreen_requested);
    assert_eq!(input.intents(), vec![AppIntent::ToggleFullscreenRequested]);
}

#[test]
fn test_removed_network_keys_set_nothing() {
    for key in [egui::Key::R, egui::Key::C, egui::Key::Delete] {
        let input = collect_with_key_event(key_event(key));
        assert!(input.intents().is_empty(), "{key:?} darf nichts auslösen");
    }
}

#[test]
fn test_escape_does_not_exit() {
    let input = collect_with_key_event(key_event(egui::Key::Escape));

    assert!(input.intents().is_empty());
}

#[test]
fn test_unbound_key_sets_nothing() {
    let input = collect_with_key_event(key_event(egui::Key::Q));

    assert!(input.intents().is_empty());
}
