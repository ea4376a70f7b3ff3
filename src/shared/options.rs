//! Zentrale Konfiguration für Crossed Lines.
//!
//! `LinesOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::ensure;
use serde::{Deserialize, Serialize};

// ── Zeichnen ────────────────────────────────────────────────────────

/// Maximale Länge eines gezeichneten Segments (Welteinheiten).
pub const MAX_SEGMENT_LENGTH: f32 = 30.0;

// ── Kamera ──────────────────────────────────────────────────────────

/// Sichtbare Welthöhe (die Breite folgt aus dem Seitenverhältnis).
pub const VIEW_HEIGHT_WORLD: f32 = 100.0;
/// Anteil, um den der Kamera-Fokus vom Anker Richtung Cursor rückt.
pub const ANCHOR_SMOOTHING: f32 = 0.25;
/// Anteil, um den die Kamera pro Frame Richtung Ziel rückt.
pub const CAMERA_SMOOTHING: f32 = 0.05;

// ── Zufalls-Bestückung ─────────────────────────────────────────────

/// Anzahl Zufallskandidaten beim Start und beim Neu-Bestücken.
pub const SEED_COUNT: usize = 200;
/// Halbe Kantenlänge des Streu-Quadrats um den Mittelpunkt.
pub const SEED_HALF_EXTENT: f32 = 300.0;
/// Minimale Länge zufälliger Segmente.
pub const SEED_LENGTH_MIN: f32 = 25.0;
/// Maximale Länge zufälliger Segmente (exklusiv).
pub const SEED_LENGTH_MAX: f32 = 50.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Hintergrundfarbe (RGBA: Dunkelgrau).
pub const CLEAR_COLOR: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
/// Segment ohne Kreuzung (RGBA: Grün).
pub const COLOR_UNSATURATED: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Segment mit zwei Kreuzungen (RGBA: Rot).
pub const COLOR_SATURATED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Vorschau, wenn der Kandidat zugelassen würde (RGBA: Grün).
pub const PREVIEW_COLOR_ADMISSIBLE: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Vorschau, wenn der Kandidat abgewiesen würde (RGBA: Hellgrau).
pub const PREVIEW_COLOR_REFUSED: [f32; 4] = [0.7, 0.7, 0.7, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `crossed_lines.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinesOptions {
    // ── Zeichnen ────────────────────────────────────────────────
    /// Maximale Segmentlänge in Welteinheiten
    pub max_segment_length: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Sichtbare Welthöhe
    pub view_height_world: f32,
    /// Fokus-Glättung Anker → Cursor (0..=1)
    pub anchor_smoothing: f32,
    /// Kamera-Glättung pro Frame (0..=1)
    pub camera_smoothing: f32,

    // ── Zufalls-Bestückung ─────────────────────────────────────
    /// Anzahl Zufallskandidaten
    pub seed_count: usize,
    /// Halbe Kantenlänge des Streu-Quadrats
    pub seed_half_extent: f32,
    /// Minimale Zufallslänge
    pub seed_length_min: f32,
    /// Maximale Zufallslänge (exklusiv)
    pub seed_length_max: f32,
    /// Fester Seed für reproduzierbare Sitzungen (None = Entropie)
    #[serde(default)]
    pub rng_seed: Option<u64>,

    // ── Farben ──────────────────────────────────────────────────
    /// Hintergrundfarbe
    pub clear_color: [f32; 4],
    /// Farbe bei Sättigung 0
    pub color_unsaturated: [f32; 4],
    /// Farbe bei Sättigung 2
    pub color_saturated: [f32; 4],
    /// Vorschau-Farbe, wenn zulässig
    #[serde(default = "default_preview_color_admissible")]
    pub preview_color_admissible: [f32; 4],
    /// Vorschau-Farbe, wenn abgewiesen
    #[serde(default = "default_preview_color_refused")]
    pub preview_color_refused: [f32; 4],
}

impl Default for LinesOptions {
    fn default() -> Self {
        Self {
            max_segment_length: MAX_SEGMENT_LENGTH,

            view_height_world: VIEW_HEIGHT_WORLD,
            anchor_smoothing: ANCHOR_SMOOTHING,
            camera_smoothing: CAMERA_SMOOTHING,

            seed_count: SEED_COUNT,
            seed_half_extent: SEED_HALF_EXTENT,
            seed_length_min: SEED_LENGTH_MIN,
            seed_length_max: SEED_LENGTH_MAX,
            rng_seed: None,

            clear_color: CLEAR_COLOR,
            color_unsaturated: COLOR_UNSATURATED,
            color_saturated: COLOR_SATURATED,
            preview_color_admissible: PREVIEW_COLOR_ADMISSIBLE,
            preview_color_refused: PREVIEW_COLOR_REFUSED,
        }
    }
}

/// Serde-Default für `preview_color_admissible` (Abwärtskompatibilität).
fn default_preview_color_admissible() -> [f32; 4] {
    PREVIEW_COLOR_ADMISSIBLE
}

/// Serde-Default für `preview_color_refused` (Abwärtskompatibilität).
fn default_preview_color_refused() -> [f32; 4] {
    PREVIEW_COLOR_REFUSED
}

impl LinesOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {:#}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("crossed_lines"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("crossed_lines.toml")
    }

    /// Prüft Wertebereiche. Ungültige Optionen werden nie übernommen.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.max_segment_length.is_finite() && self.max_segment_length > 0.0,
            "max_segment_length muss positiv sein (ist {})",
            self.max_segment_length
        );
        ensure!(
            self.view_height_world.is_finite() && self.view_height_world > 0.0,
            "view_height_world muss positiv sein (ist {})",
            self.view_height_world
        );
        for (name, value) in [
            ("anchor_smoothing", self.anchor_smoothing),
            ("camera_smoothing", self.camera_smoothing),
        ] {
            ensure!(
                (0.0..=1.0).contains(&value),
                "{} muss in [0, 1] liegen (ist {})",
                name,
                value
            );
        }
        ensure!(
            self.seed_half_extent.is_finite() && self.seed_half_extent >= 0.0,
            "seed_half_extent darf nicht negativ sein (ist {})",
            self.seed_half_extent
        );
        ensure!(
            self.seed_length_min.is_finite()
                && self.seed_length_max.is_finite()
                && 0.0 <= self.seed_length_min
                && self.seed_length_min <= self.seed_length_max,
            "Zufallslängen ungültig: [{}, {})",
            self.seed_length_min,
            self.seed_length_max
        );
        Ok(())
    }

    /// Farbe eines Segments mit `saturation` Kreuzungen (linear zwischen den Stützfarben).
    pub fn saturation_color(&self, saturation: u8) -> [f32; 4] {
        let t = (f32::from(saturation) / 2.0).clamp(0.0, 1.0);
        let mut color = [0.0; 4];
        for (i, c) in color.iter_mut().enumerate() {
            *c = self.color_unsaturated[i] + (self.color_saturated[i] - self.color_unsaturated[i]) * t;
        }
        color
    }
}
