//! Vektor-Operationen mit expliziter In-Place-Variante.
//!
//! Die allozierenden Formen liefert `glam` direkt (`a + b`, `a * s`,
//! `a.normalize()`, `a.lerp(b, t)`). `VectorOps` ergänzt für jede Operation
//! eine `*_into`-Form, die in einen vom Aufrufer gestellten Ausgabewert
//! schreibt. Beide Formen rechnen identisch.

use glam::{Vec2, Vec3, Vec4};

/// Gemeinsame Vektor-Operationen für `Vec2`, `Vec3` und `Vec4`.
pub trait VectorOps: Copy {
    /// Summe `self + other`, geschrieben nach `out`.
    fn add_into(self, other: Self, out: &mut Self);
    /// Differenz `self - other`, geschrieben nach `out`.
    fn sub_into(self, other: Self, out: &mut Self);
    /// Skalierung `self * factor`, geschrieben nach `out`.
    fn scale_into(self, factor: f32, out: &mut Self);
    /// Einheitsvektor, geschrieben nach `out`.
    ///
    /// Ein Nullvektor liefert nicht-endliche Komponenten (wie `normalize`).
    fn normalize_into(self, out: &mut Self);
    /// Vektor gleicher Richtung mit Länge `length` (allozierend).
    fn resized(self, length: f32) -> Self;
    /// Wie [`VectorOps::resized`], geschrieben nach `out`.
    fn resize_into(self, length: f32, out: &mut Self);
    /// Lineare Interpolation `self + (other - self) * t`, geschrieben nach `out`.
    fn lerp_into(self, other: Self, t: f32, out: &mut Self);
}

macro_rules! impl_vector_ops {
    ($($ty:ty),*) => {$(
        impl VectorOps for $ty {
            #[inline]
            fn add_into(self, other: Self, out: &mut Self) {
                *out = self + other;
            }

            #[inline]
            fn sub_into(self, other: Self, out: &mut Self) {
                *out = self - other;
            }

            #[inline]
            fn scale_into(self, factor: f32, out: &mut Self) {
                *out = self * factor;
            }

            #[inline]
            fn normalize_into(self, out: &mut Self) {
                *out = self.normalize();
            }

            #[inline]
            fn resized(self, length: f32) -> Self {
                self * (length / self.length())
            }

            #[inline]
            fn resize_into(self, length: f32, out: &mut Self) {
                *out = self.resized(length);
            }

            #[inline]
            fn lerp_into(self, other: Self, t: f32, out: &mut Self) {
                *out = self + (other - self) * t;
            }
        }
    )*};
}

impl_vector_ops!(Vec2, Vec3, Vec4);

/// Kreuzprodukt für 3D-Vektoren, geschrieben nach `out` (allozierend: `a.cross(b)`).
#[inline]
pub fn cross_into(a: Vec3, b: Vec3, out: &mut Vec3) {
    *out = a.cross(b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_in_place_matches_allocating_vec2() {
        let a = Vec2::new(3.0, -4.0);
        let b = Vec2::new(0.5, 2.0);
        let mut out = Vec2::ZERO;

        a.add_into(b, &mut out);
        assert_eq!(out, a + b);
        a.sub_into(b, &mut out);
        assert_eq!(out, a - b);
        a.scale_into(2.5, &mut out);
        assert_eq!(out, a * 2.5);
        a.lerp_into(b, 0.25, &mut out);
        assert_eq!(out, a + (b - a) * 0.25);
        a.resize_into(10.0, &mut out);
        assert_eq!(out, a.resized(10.0));
    }

    #[test]
    fn test_in_place_matches_allocating_vec3_vec4() {
        let a = Vec3::new(1.0, 2.0, 2.0);
        let mut out3 = Vec3::ZERO;
        a.normalize_into(&mut out3);
        assert_relative_eq!(out3.length(), 1.0, epsilon = 1e-6);
        assert_eq!(out3, a.normalize());

        let b = Vec4::new(1.0, 0.0, 0.0, 1.0);
        let c = Vec4::new(0.0, 1.0, 0.0, 1.0);
        let mut out4 = Vec4::ZERO;
        b.lerp_into(c, 0.5, &mut out4);
        assert_eq!(out4, Vec4::new(0.5, 0.5, 0.0, 1.0));
        assert_relative_eq!(b.dot(c), 1.0);
    }

    #[test]
    fn test_resized_keeps_direction() {
        let v = Vec2::new(30.0, 40.0);
        let r = v.resized(5.0);
        assert_relative_eq!(r.x, 3.0, epsilon = 1e-5);
        assert_relative_eq!(r.y, 4.0, epsilon = 1e-5);
        assert_relative_eq!(r.length(), 5.0, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_vector_normalize_is_not_finite() {
        let mut out = Vec2::ONE;
        Vec2::ZERO.normalize_into(&mut out);
        assert!(!out.is_finite());
        assert!(!Vec2::ZERO.resized(3.0).is_finite());
    }

    #[test]
    fn test_cross_into() {
        let mut out = Vec3::ZERO;
        cross_into(Vec3::X, Vec3::Y, &mut out);
        assert_eq!(out, Vec3::Z);
    }
}
