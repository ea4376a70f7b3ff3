//! Nachführende 2D-Kamera mit exponentieller Glättung.

use super::transform::Transform4;
use crate::shared::options::{ANCHOR_SMOOTHING, CAMERA_SMOOTHING};
use glam::Vec2;

/// Kamera, die pro Frame weich auf den Zeichenpunkt zuläuft.
///
/// Der Zustand ist eine reine View-Translation (`transform`). Ein Sprung
/// passiert nur über [`FollowCamera::reset`].
#[derive(Debug, Clone)]
pub struct FollowCamera {
    /// Aktuelle View-Transformation
    pub transform: Transform4,
    /// Anteil, um den der Fokus vom Anker Richtung Cursor rückt
    pub anchor_smoothing: f32,
    /// Anteil, um den die Kamera pro Frame Richtung Ziel rückt
    pub camera_smoothing: f32,
}

impl FollowCamera {
    /// Erstellt eine Kamera am Ursprung
    pub fn new() -> Self {
        Self::with_smoothing(ANCHOR_SMOOTHING, CAMERA_SMOOTHING)
    }

    pub fn with_smoothing(anchor_smoothing: f32, camera_smoothing: f32) -> Self {
        Self {
            transform: Transform4::IDENTITY,
            anchor_smoothing,
            camera_smoothing,
        }
    }

    /// Fokuspunkt zwischen Anker und Cursor. Der Anker selbst bleibt unverändert.
    pub fn focus_point(&self, anchor: Vec2, cursor_world: Vec2) -> Vec2 {
        anchor.lerp(cursor_world, self.anchor_smoothing)
    }

    /// Ziel-Transformation, die `focus` in die Bildmitte legt.
    pub fn target_for(focus: Vec2) -> Transform4 {
        Transform4::translation(-focus.x, -focus.y, 0.0)
    }

    /// Ein Frame Nachführung Richtung Fokus.
    pub fn follow(&mut self, anchor: Vec2, cursor_world: Vec2) {
        let target = Self::target_for(self.focus_point(anchor, cursor_world));
        let current = self.transform;
        current.lerp_into(&target, self.camera_smoothing, &mut self.transform);
    }

    /// View-Projektion: zuerst Kamera, dann Projektion.
    pub fn view_projection(&self, projection: &Transform4) -> Transform4 {
        self.transform.then(projection)
    }

    /// Weltpunkt, der aktuell in der Bildmitte liegt.
    pub fn center(&self) -> Vec2 {
        -self.transform.translation_part().truncate()
    }

    /// Springt zurück auf den Ursprung.
    pub fn reset(&mut self) {
        self.transform = Transform4::IDENTITY;
    }
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_focus_point_is_quarter_way_to_cursor() {
        let camera = FollowCamera::new();
        let focus = camera.focus_point(Vec2::new(0.0, 0.0), Vec2::new(40.0, -8.0));
        assert_relative_eq!(focus.x, 10.0);
        assert_relative_eq!(focus.y, -2.0);
    }

    #[test]
    fn test_follow_converges_without_overshoot() {
        let mut camera = FollowCamera::new();
        let anchor = Vec2::new(20.0, 0.0);
        let cursor = Vec2::new(60.0, 40.0);
        let target = FollowCamera::target_for(camera.focus_point(anchor, cursor));

        let mut distance = camera.transform.max_abs_diff(&target);
        for _ in 0..100 {
            camera.follow(anchor, cursor);
            let next = camera.transform.max_abs_diff(&target);
            assert!(next < distance);
            assert_relative_eq!(next, distance * 0.95, max_relative = 1e-3);
            distance = next;
        }

        // Fokus (30, 10): nie überschossen, nur angenähert
        let center = camera.center();
        assert!(center.x > 0.0 && center.x < 30.0);
        assert!(center.y > 0.0 && center.y < 10.0);
        assert_relative_eq!(center.x, 30.0, epsilon = 0.2);
    }

    #[test]
    fn test_view_projection_applies_camera_first() {
        let mut camera = FollowCamera::new();
        camera.transform = FollowCamera::target_for(Vec2::new(10.0, 0.0));
        let projection = Transform4::orthographic(100.0, 100.0, 0.0, 1.0);
        let vp = camera.view_projection(&projection);
        // der Fokuspunkt landet in der Bildmitte
        let ndc = vp.transform_point2(Vec2::new(10.0, 0.0));
        assert_relative_eq!(ndc.x, 0.0);
        assert_relative_eq!(ndc.y, 0.0);
    }

    #[test]
    fn test_reset_snaps_to_origin() {
        let mut camera = FollowCamera::new();
        camera.follow(Vec2::ZERO, Vec2::new(100.0, 100.0));
        assert!(camera.center() != Vec2::ZERO);
        camera.reset();
        assert_eq!(camera.center(), Vec2::ZERO);
    }
}
