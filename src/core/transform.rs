//! Affine 4×4-Transformationen für die 2D-Szene.
//!
//! `Transform4` kapselt eine spaltenweise gespeicherte `glam::Mat4`
//! (Spalten x, y, z, w; die w-Spalte trägt die Translation).
//! Komposition folgt der Lesereihenfolge: `a.then(b)` wendet zuerst `a`,
//! danach `b` auf einen Punkt an (Matrixprodukt `b · a`).

use glam::{Mat4, Vec2, Vec3, Vec4};
use std::fmt;

/// Affine Transformation (4×4, Spaltenvektoren).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform4(pub Mat4);

impl Default for Transform4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform4 {
    /// Identität.
    pub const IDENTITY: Self = Self(Mat4::IDENTITY);

    // ── Konstruktoren ───────────────────────────────────────────────

    /// Orthographische Projektion eines `width × height` großen, zentrierten Ausschnitts.
    pub fn orthographic(width: f32, height: f32, near: f32, far: f32) -> Self {
        Self(Mat4::from_cols(
            Vec4::new(2.0 / width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / height, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 2.0 / (near - far), 0.0),
            Vec4::new(0.0, 0.0, -(far + near) / (far - near), 1.0),
        ))
    }

    /// Flache 2D-Projektion: wie `orthographic`, aber z wird konstant auf -1 gelegt.
    pub fn screen_2d(width: f32, height: f32) -> Self {
        Self(Mat4::from_cols(
            Vec4::new(2.0 / width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / height, 0.0, 0.0),
            Vec4::ZERO,
            Vec4::new(0.0, 0.0, -1.0, 1.0),
        ))
    }

    /// Perspektivische Projektion (OpenGL-Konvention, Blickrichtung -z).
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let t = (fov_y / 2.0).tan();
        Self(Mat4::from_cols(
            Vec4::new(1.0 / (aspect * t), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0 / t, 0.0, 0.0),
            Vec4::new(0.0, 0.0, (far + near) / (near - far), -1.0),
            Vec4::new(0.0, 0.0, 2.0 * far * near / (near - far), 0.0),
        ))
    }

    /// Rotation um die x-Achse (Bogenmaß).
    pub fn rotation_x(theta: f32) -> Self {
        Self(Mat4::from_rotation_x(theta))
    }

    /// Rotation um die y-Achse (Bogenmaß).
    pub fn rotation_y(theta: f32) -> Self {
        Self(Mat4::from_rotation_y(theta))
    }

    /// Rotation um die z-Achse (Bogenmaß).
    pub fn rotation_z(theta: f32) -> Self {
        Self(Mat4::from_rotation_z(theta))
    }

    /// Verschiebung um `(dx, dy, dz)`.
    pub fn translation(dx: f32, dy: f32, dz: f32) -> Self {
        Self(Mat4::from_translation(Vec3::new(dx, dy, dz)))
    }

    pub fn translation_x(dx: f32) -> Self {
        Self::translation(dx, 0.0, 0.0)
    }

    pub fn translation_y(dy: f32) -> Self {
        Self::translation(0.0, dy, 0.0)
    }

    pub fn translation_z(dz: f32) -> Self {
        Self::translation(0.0, 0.0, dz)
    }

    /// Gleichmäßige Skalierung von x, y und z (w bleibt 1).
    pub fn uniform_scale(c: f32) -> Self {
        Self(Mat4::from_scale(Vec3::splat(c)))
    }

    pub fn scale_x_by(c: f32) -> Self {
        Self(Mat4::from_scale(Vec3::new(c, 1.0, 1.0)))
    }

    pub fn scale_y_by(c: f32) -> Self {
        Self(Mat4::from_scale(Vec3::new(1.0, c, 1.0)))
    }

    pub fn scale_z_by(c: f32) -> Self {
        Self(Mat4::from_scale(Vec3::new(1.0, 1.0, c)))
    }

    // ── Produkte ────────────────────────────────────────────────────

    /// Transformiert einen homogenen Vektor.
    pub fn mul_vec4(&self, v: Vec4) -> Vec4 {
        self.0 * v
    }

    /// Wie [`Transform4::mul_vec4`], geschrieben nach `out`.
    pub fn mul_vec4_into(&self, v: Vec4, out: &mut Vec4) {
        *out = self.0 * v;
    }

    /// Transformiert einen 2D-Punkt (z = 0, w = 1) und liefert x/y.
    pub fn transform_point2(&self, p: Vec2) -> Vec2 {
        self.mul_vec4(p.extend(0.0).extend(1.0)).truncate().truncate()
    }

    /// Komposition: zuerst `self`, danach `next`.
    pub fn then(&self, next: &Transform4) -> Transform4 {
        Self(next.0 * self.0)
    }

    /// Wie [`Transform4::then`], geschrieben nach `out`.
    pub fn then_into(&self, next: &Transform4, out: &mut Transform4) {
        out.0 = next.0 * self.0;
    }

    // ── In-Place-Helfer (self = self.then(T)) ───────────────────────

    pub fn rotate_x(&mut self, theta: f32) -> &mut Self {
        self.append(Self::rotation_x(theta))
    }

    pub fn rotate_y(&mut self, theta: f32) -> &mut Self {
        self.append(Self::rotation_y(theta))
    }

    pub fn rotate_z(&mut self, theta: f32) -> &mut Self {
        self.append(Self::rotation_z(theta))
    }

    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) -> &mut Self {
        self.append(Self::translation(dx, dy, dz))
    }

    pub fn translate_x(&mut self, dx: f32) -> &mut Self {
        self.append(Self::translation_x(dx))
    }

    pub fn translate_y(&mut self, dy: f32) -> &mut Self {
        self.append(Self::translation_y(dy))
    }

    pub fn translate_z(&mut self, dz: f32) -> &mut Self {
        self.append(Self::translation_z(dz))
    }

    pub fn scale(&mut self, c: f32) -> &mut Self {
        self.append(Self::uniform_scale(c))
    }

    pub fn scale_x(&mut self, c: f32) -> &mut Self {
        self.append(Self::scale_x_by(c))
    }

    pub fn scale_y(&mut self, c: f32) -> &mut Self {
        self.append(Self::scale_y_by(c))
    }

    pub fn scale_z(&mut self, c: f32) -> &mut Self {
        self.append(Self::scale_z_by(c))
    }

    fn append(&mut self, next: Transform4) -> &mut Self {
        self.0 = next.0 * self.0;
        self
    }

    // ── Interpolation & Zugriff ─────────────────────────────────────

    /// Komponentenweise lineare Interpolation.
    pub fn lerp(&self, other: &Transform4, t: f32) -> Transform4 {
        Self(self.0 + (other.0 - self.0) * t)
    }

    /// Wie [`Transform4::lerp`], geschrieben nach `out`.
    pub fn lerp_into(&self, other: &Transform4, t: f32, out: &mut Transform4) {
        out.0 = self.0 + (other.0 - self.0) * t;
    }

    /// Translationsanteil (xyz der w-Spalte).
    pub fn translation_part(&self) -> Vec3 {
        self.0.w_axis.truncate()
    }

    /// Spaltenweises Array für GPU-Uploads.
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        self.0.to_cols_array_2d()
    }

    /// Größte absolute Komponenten-Differenz zu `other`.
    pub fn max_abs_diff(&self, other: &Transform4) -> f32 {
        (self.0 - other.0)
            .to_cols_array()
            .iter()
            .fold(0.0_f32, |acc, d| acc.max(d.abs()))
    }
}

impl fmt::Display for Transform4 {
    /// Zeilenweise Ausgabe, eine `[a b c d]`-Zeile pro Matrixzeile.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            let r = self.0.row(row);
            writeln!(f, "[{} {} {} {}]", r.x, r.y, r.z, r.w)?;
        }
        Ok(())
    }
}
