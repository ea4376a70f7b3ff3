//! Segment-Entität und Kandidaten-Formung.

use super::transform::Transform4;
use glam::Vec2;
use std::fmt;

/// Eindeutige, pro Netzwerk monoton vergebene Segment-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub u64);

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Gerichtete Strecke zwischen zwei festen Punkten.
///
/// Endpunkte und Richtung ändern sich nach der Erzeugung nicht mehr,
/// nur die Sättigung wird vom Netzwerk gepflegt.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    id: SegmentId,
    start: Vec2,
    end: Vec2,
    direction: Vec2,
    saturation: u8,
}

impl Segment {
    /// Erzeugt ein Segment mit Sättigung 0. Nur das Netzwerk legt Segmente an.
    pub(crate) fn new(id: SegmentId, start: Vec2, end: Vec2) -> Self {
        Self {
            id,
            start,
            end,
            direction: end - start,
            saturation: 0,
        }
    }

    pub fn id(&self) -> SegmentId {
        self.id
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Gecachte Richtung `end - start`.
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Anzahl aktuell verbuchter Kreuzungspartner (0..=2).
    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    pub fn length(&self) -> f32 {
        self.direction.length()
    }

    pub(crate) fn increment_saturation(&mut self) {
        self.saturation += 1;
    }

    pub(crate) fn decrement_saturation(&mut self) {
        debug_assert!(self.saturation > 0, "Sättigung von {} unterläuft", self.id);
        self.saturation = self.saturation.saturating_sub(1);
    }

    /// Modell-Transformation, die das Einheits-Segment-Quad auf diese Strecke legt.
    pub fn model_transform(&self) -> Transform4 {
        segment_transform(self.start, self.direction)
    }
}

/// Skaliert das Einheits-Quad auf die Länge von `direction`, dreht es in
/// deren Richtung und verschiebt es nach `start`.
pub fn segment_transform(start: Vec2, direction: Vec2) -> Transform4 {
    let mut m = Transform4::IDENTITY;
    m.scale_x(direction.length())
        .rotate_z(direction.y.atan2(direction.x))
        .translate(start.x, start.y, 0.0);
    m
}

/// Formt den Endpunkt eines Kandidaten-Segments.
///
/// Liegt `cursor` weiter als `max_length` vom `anchor` entfernt, wird der
/// Endpunkt entlang derselben Richtung auf genau `max_length` gekürzt;
/// sonst bleibt `cursor` unverändert.
pub fn shape_candidate(anchor: Vec2, cursor: Vec2, max_length: f32) -> Vec2 {
    let delta = cursor - anchor;
    let length = delta.length();
    if length > max_length {
        anchor + delta * (max_length / length)
    } else {
        cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_segment_caches_direction() {
        let s = Segment::new(SegmentId(7), Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0));
        assert_eq!(s.direction(), Vec2::new(3.0, 4.0));
        assert_eq!(s.saturation(), 0);
        assert_relative_eq!(s.length(), 5.0);
        assert_eq!(s.id().to_string(), "#7");
    }

    #[test]
    fn test_shape_candidate_clamps_to_max_length() {
        let anchor = Vec2::new(10.0, 10.0);
        let cursor = Vec2::new(10.0 + 60.0, 10.0 + 80.0);
        let end = shape_candidate(anchor, cursor, 30.0);
        assert_relative_eq!((end - anchor).length(), 30.0, epsilon = 1e-4);
        assert_relative_eq!(end.x, 28.0, epsilon = 1e-4);
        assert_relative_eq!(end.y, 34.0, epsilon = 1e-4);
    }

    #[test]
    fn test_shape_candidate_keeps_short_candidate() {
        let anchor = Vec2::new(0.0, 0.0);
        let cursor = Vec2::new(18.0, -24.0);
        assert_eq!(shape_candidate(anchor, cursor, 30.0), cursor);
        assert_eq!(shape_candidate(anchor, anchor, 30.0), anchor);
    }

    #[test]
    fn test_model_transform_maps_unit_quad_onto_segment() {
        let s = Segment::new(SegmentId(1), Vec2::new(2.0, 3.0), Vec2::new(2.0, 13.0));
        let m = s.model_transform();
        let p0 = m.transform_point2(Vec2::ZERO);
        let p1 = m.transform_point2(Vec2::X);
        assert_relative_eq!(p0.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(p0.y, 3.0, epsilon = 1e-5);
        assert_relative_eq!(p1.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(p1.y, 13.0, epsilon = 1e-5);
    }
}
