//! Schnitt-Test zwischen zwei Strecken (parametrische Geradengleichung).
//!
//! Beide Einstiegspunkte (`points_cross` mit rohen Endpunkten und
//! `segments_cross` mit gecachten Richtungen) rechnen über dieselbe Routine
//! und liefern für dieselbe Geometrie bitgleiche Ergebnisse.

use super::segment::Segment;
use glam::Vec2;

/// Relative Toleranz für (nahezu) parallele Strecken.
///
/// Verglichen wird `|dA × dB|` gegen `PARALLEL_EPSILON * |dA| * |dB|`, also
/// der Sinus des Zwischenwinkels. Darunter gilt das Paar als nicht kreuzend.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Prüft, ob sich die Strecken `a0→a1` und `b0→b1` echt kreuzen.
///
/// Berührungen an Endpunkten zählen nicht (strikt `0 < t < 1`).
pub fn points_cross(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> bool {
    cross_params(a0, a1 - a0, b0, b1 - b0).is_some_and(is_interior)
}

/// Wie [`points_cross`], aber mit den gecachten Richtungen zweier Segmente.
pub fn segments_cross(a: &Segment, b: &Segment) -> bool {
    cross_params(a.start(), a.direction(), b.start(), b.direction()).is_some_and(is_interior)
}

/// Schnittparameter `(tA, tB)` entlang beider Strecken.
///
/// `None` bei parallelen, kollinearen, entarteten (Länge 0) oder nicht
/// endlichen Strecken; dann wird nicht dividiert.
pub fn cross_params(a0: Vec2, da: Vec2, b0: Vec2, db: Vec2) -> Option<(f32, f32)> {
    let denom_b = da.x * db.y - da.y * db.x;
    // Produkt der Längen zuerst: Toleranz unabhängig von der Argument-Reihenfolge
    let tolerance = PARALLEL_EPSILON * (da.length() * db.length());
    if !denom_b.is_finite() || denom_b.abs() <= tolerance {
        return None;
    }
    let denom_a = db.x * da.y - db.y * da.x;

    let ta = (db.x * (b0.y - a0.y) + db.y * (a0.x - b0.x)) / denom_a;
    let tb = (da.x * (a0.y - b0.y) + da.y * (b0.x - a0.x)) / denom_b;
    Some((ta, tb))
}

#[inline]
fn is_interior((ta, tb): (f32, f32)) -> bool {
    ta > 0.0 && ta < 1.0 && tb > 0.0 && tb < 1.0
}
