//! Viewport: Projektion und Umrechnung Screen → Welt.

use super::camera::FollowCamera;
use super::transform::Transform4;
use crate::shared::options::VIEW_HEIGHT_WORLD;
use glam::Vec2;

/// Zeichenfläche in Pixeln plus sichtbare Welthöhe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Größe in Pixeln [width, height]
    pub size_px: [f32; 2],
    /// Sichtbare Welthöhe (die Breite folgt aus dem Seitenverhältnis)
    pub view_height_world: f32,
}

impl Viewport {
    pub fn new(size_px: [f32; 2], view_height_world: f32) -> Self {
        Self {
            size_px,
            view_height_world,
        }
    }

    /// Seitenverhältnis Breite/Höhe; 1.0 bei leerer Fläche.
    pub fn aspect(&self) -> f32 {
        let [w, h] = self.size_px;
        if w > 0.0 && h > 0.0 {
            w / h
        } else {
            1.0
        }
    }

    pub fn view_width_world(&self) -> f32 {
        self.view_height_world * self.aspect()
    }

    /// Halbe sichtbare Ausdehnung in Welteinheiten.
    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(self.view_width_world(), self.view_height_world) * 0.5
    }

    /// Orthographische Projektion des sichtbaren Ausschnitts.
    pub fn projection(&self) -> Transform4 {
        Transform4::orthographic(self.view_width_world(), self.view_height_world, 0.0, 1.0)
    }

    /// Pixel (Ursprung oben links, y nach unten) → NDC (y nach oben).
    pub fn screen_to_ndc(&self, pos_px: Vec2) -> Vec2 {
        let [w, h] = self.size_px;
        if w <= 0.0 || h <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(2.0 * pos_px.x / w - 1.0, 1.0 - 2.0 * pos_px.y / h)
    }

    /// Pixel → Weltkoordinaten unter Berücksichtigung der Kamera-Translation.
    pub fn screen_to_world(&self, pos_px: Vec2, camera: &FollowCamera) -> Vec2 {
        let ndc = self.screen_to_ndc(pos_px);
        ndc * self.half_extent() - camera.transform.translation_part().truncate()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new([0.0, 0.0], VIEW_HEIGHT_WORLD)
    }
}
