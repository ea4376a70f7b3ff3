//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;

/// Ein Frame Kamera-Nachführung Richtung Anker/Cursor.
pub fn follow_cursor(state: &mut AppState) {
    let anchor = state.drawing.anchor;
    let cursor = state.drawing.cursor_world;
    state.view.camera.follow(anchor, cursor);
}

/// Setzt die Kamera auf den Ursprung zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera.reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn follow_cursor_moves_towards_focus() {
        let mut state = AppState::new();
        state.drawing.cursor_world = Vec2::new(40.0, 0.0);

        follow_cursor(&mut state);

        // Fokus (10, 0), 5 % davon
        let center = state.view.camera.center();
        assert!((center.x - 0.5).abs() < 1e-5);
        assert_eq!(state.drawing.anchor, Vec2::ZERO);
    }

    #[test]
    fn reset_camera_returns_to_origin() {
        let mut state = AppState::new();
        state.drawing.cursor_world = Vec2::new(40.0, 40.0);
        follow_cursor(&mut state);

        reset_camera(&mut state);

        assert_eq!(state.view.camera.center(), Vec2::ZERO);
    }
}
