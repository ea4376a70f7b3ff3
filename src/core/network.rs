//! Segment-Netzwerk: Zulassung, Einfügen mit Verdrängung und Zufalls-Bestückung.
//!
//! Jede Kreuzung zwischen zwei lebenden Segmenten zählt auf beiden Seiten +1
//! zur Sättigung. Ein Segment trägt höchstens [`MAX_SATURATION`] Kreuzungen;
//! kreuzt ein neues Segment ein bereits gesättigtes, wird das alte verdrängt.

use super::intersection::{points_cross, segments_cross};
use super::segment::{Segment, SegmentId};
use crate::shared::options::{SEED_HALF_EXTENT, SEED_LENGTH_MAX, SEED_LENGTH_MIN};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Maximale Anzahl verbuchter Kreuzungen pro Segment.
pub const MAX_SATURATION: u8 = 2;
/// Ab so vielen Kreuzungen wird ein Kandidat abgewiesen.
pub const ADMISSION_LIMIT: usize = 3;

/// Ergebnis der Zulassungsprüfung eines Kandidaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Kandidat darf eingefügt werden
    Admitted { crossings: usize },
    /// Kandidat kreuzt zu viele Segmente
    Refused { crossings: usize },
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted { .. })
    }

    /// Anzahl gezählter Kreuzungen (roh, vor jeder Verdrängung).
    pub fn crossings(&self) -> usize {
        match *self {
            Admission::Admitted { crossings } | Admission::Refused { crossings } => crossings,
        }
    }
}

/// Ergebnis eines erfolgreichen Einfügens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertReport {
    /// ID des neuen Segments
    pub id: SegmentId,
    /// Sättigung des neuen Segments nach dem Einfügen
    pub saturation: u8,
    /// Verdrängte Segmente in Scan-Reihenfolge
    pub evicted: Vec<SegmentId>,
}

/// Parameter der Zufalls-Bestückung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterParams {
    /// Halbe Kantenlänge des Quadrats, in dem Startpunkte liegen
    pub half_extent: f32,
    /// Minimale Segmentlänge (inklusiv)
    pub min_length: f32,
    /// Maximale Segmentlänge (exklusiv)
    pub max_length: f32,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            half_extent: SEED_HALF_EXTENT,
            min_length: SEED_LENGTH_MIN,
            max_length: SEED_LENGTH_MAX,
        }
    }
}

/// Zusammenfassung einer Zufalls-Bestückung.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateReport {
    /// Eingefügte Kandidaten
    pub admitted: usize,
    /// Abgewiesene (übersprungene) Kandidaten
    pub refused: usize,
    /// Dabei verdrängte Segmente
    pub evicted: usize,
}

/// Abweichung zwischen gespeicherter und nachgezählter Sättigung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaturationMismatch {
    pub id: SegmentId,
    /// Gespeicherter Zähler
    pub stored: u8,
    /// Tatsächlich kreuzende lebende Segmente
    pub actual: usize,
}

/// Geordnete Menge lebender Segmente (Einfügereihenfolge = Zeichenreihenfolge).
#[derive(Debug, Clone, Default)]
pub struct SegmentNetwork {
    segments: Vec<Segment>,
    next_id: u64,
}

impl SegmentNetwork {
    /// Erstellt ein leeres Netzwerk
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Sucht ein lebendes Segment per ID.
    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id() == id)
    }

    /// Anzahl verbuchter Kreuzungen im gesamten Netzwerk.
    pub fn total_crossings(&self) -> usize {
        let sum: usize = self.segments.iter().map(|s| s.saturation() as usize).sum();
        sum / 2
    }

    // ── Zulassung ───────────────────────────────────────────────────

    /// Zählt die lebenden Segmente, die der Kandidat `start→end` kreuzt.
    pub fn count_crossings(&self, start: Vec2, end: Vec2) -> usize {
        self.segments
            .iter()
            .filter(|s| points_cross(start, end, s.start(), s.end()))
            .count()
    }

    /// `true`, wenn der Kandidat weniger als [`ADMISSION_LIMIT`] Segmente kreuzt.
    pub fn can_admit(&self, start: Vec2, end: Vec2) -> bool {
        self.admission(start, end).is_admitted()
    }

    /// Zulassungsprüfung ohne Seiteneffekte.
    pub fn admission(&self, start: Vec2, end: Vec2) -> Admission {
        let crossings = self.count_crossings(start, end);
        if crossings < ADMISSION_LIMIT {
            Admission::Admitted { crossings }
        } else {
            Admission::Refused { crossings }
        }
    }

    // ── Einfügen & Verdrängen ──────────────────────────────────────

    /// Prüft den Kandidaten und fügt ihn bei Zulassung ein.
    ///
    /// Gesättigte Segmente, die der Kandidat kreuzt, werden verdrängt; alle
    /// übrigen Kreuzungen werden auf beiden Seiten verbucht. `None` bei
    /// Abweisung, das Netzwerk bleibt dann unverändert.
    pub fn try_insert(&mut self, start: Vec2, end: Vec2) -> Option<InsertReport> {
        let admission = self.admission(start, end);
        if !admission.is_admitted() {
            log::debug!(
                "Kandidat abgewiesen: {} Kreuzungen ({:?} → {:?})",
                admission.crossings(),
                start,
                end
            );
            return None;
        }

        let id = SegmentId(self.next_id);
        self.next_id += 1;
        let mut candidate = Segment::new(id, start, end);
        let mut evicted = Vec::new();

        // Cursor rückt nach einer Verdrängung nicht vor: der Nachfolger
        // belegt danach denselben Index.
        let mut index = 0;
        while index < self.segments.len() {
            if !segments_cross(&candidate, &self.segments[index]) {
                index += 1;
                continue;
            }
            if self.segments[index].saturation() < MAX_SATURATION {
                self.segments[index].increment_saturation();
                candidate.increment_saturation();
                index += 1;
            } else {
                let removed = self.evict_at(index);
                evicted.push(removed.id());
            }
        }

        let saturation = candidate.saturation();
        self.segments.push(candidate);

        if !evicted.is_empty() {
            log::debug!("Segment {} verdrängt {:?}", id, evicted);
        }
        debug_assert!(
            self.accounting_mismatches().is_empty(),
            "Sättigungs-Buchhaltung inkonsistent nach Einfügen von {}",
            id
        );

        Some(InsertReport {
            id,
            saturation,
            evicted,
        })
    }

    /// Entfernt das Segment an `index` und nimmt seine Kreuzungen bei allen
    /// Partnern zurück.
    fn evict_at(&mut self, index: usize) -> Segment {
        let target = self.segments[index].clone();
        for (i, other) in self.segments.iter_mut().enumerate() {
            if i != index && segments_cross(&target, other) {
                other.decrement_saturation();
            }
        }
        self.segments.remove(index)
    }

    // ── Zufalls-Bestückung ─────────────────────────────────────────

    /// Erzeugt `count` Zufallskandidaten um `center` und fügt sie über
    /// [`SegmentNetwork::try_insert`] ein. Abgewiesene Kandidaten entfallen.
    pub fn populate_random<R: Rng>(
        &mut self,
        rng: &mut R,
        count: usize,
        center: Vec2,
        params: &ScatterParams,
    ) -> PopulateReport {
        let mut report = PopulateReport::default();
        for _ in 0..count {
            let (start, end) = random_candidate(rng, center, params);
            match self.try_insert(start, end) {
                Some(insert) => {
                    report.admitted += 1;
                    report.evicted += insert.evicted.len();
                }
                None => report.refused += 1,
            }
        }
        log::info!(
            "Zufalls-Bestückung: {} eingefügt, {} abgewiesen, {} verdrängt",
            report.admitted,
            report.refused,
            report.evicted
        );
        report
    }

    // ── Diagnose ────────────────────────────────────────────────────

    /// Zählt die Kreuzungen jedes Segments nach und meldet alle Segmente,
    /// deren Sättigung abweicht oder das Limit überschreitet.
    pub fn accounting_mismatches(&self) -> Vec<SaturationMismatch> {
        self.segments
            .iter()
            .enumerate()
            .filter_map(|(i, segment)| {
                let actual = self
                    .segments
                    .iter()
                    .enumerate()
                    .filter(|&(j, other)| i != j && segments_cross(segment, other))
                    .count();
                let stored = segment.saturation();
                (stored as usize != actual || stored > MAX_SATURATION).then_some(
                    SaturationMismatch {
                        id: segment.id(),
                        stored,
                        actual,
                    },
                )
            })
            .collect()
    }
}

/// Würfelt Start, Winkel und Länge eines Zufallskandidaten.
fn random_candidate<R: Rng>(rng: &mut R, center: Vec2, params: &ScatterParams) -> (Vec2, Vec2) {
    let side = 2.0 * params.half_extent;
    let start = Vec2::new(
        center.x - params.half_extent + rng.gen::<f32>() * side,
        center.y - params.half_extent + rng.gen::<f32>() * side,
    );
    let angle = rng.gen::<f32>() * TAU;
    let length = params.min_length + rng.gen::<f32>() * (params.max_length - params.min_length);
    (start, start + Vec2::from_angle(angle) * length)
}
