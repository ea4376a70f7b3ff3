//! Use-Case-Funktionen für das Zeichnen: Vorschau, Übernehmen, Anker setzen.

use crate::app::AppState;
use crate::core::{shape_candidate, Admission, InsertReport};
use glam::Vec2;

/// Vorschau-Segment vom Anker zur gekürzten Cursor-Position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewSegment {
    pub start: Vec2,
    pub end: Vec2,
    /// Ergebnis der Zulassungsprüfung für genau dieses Segment
    pub admission: Admission,
}

/// Formt den Kandidaten für `cursor_world` und prüft ihn, ohne zu mutieren.
pub fn preview_for(state: &AppState, cursor_world: Vec2) -> PreviewSegment {
    let start = state.drawing.anchor;
    let end = shape_candidate(start, cursor_world, state.options.max_segment_length);
    PreviewSegment {
        start,
        end,
        admission: state.network.admission(start, end),
    }
}

/// Vorschau für die Cursor-Position des aktuellen Frames.
pub fn preview(state: &AppState) -> PreviewSegment {
    preview_for(state, state.drawing.cursor_world)
}

/// Übernimmt das Segment vom Anker Richtung `cursor_world`.
///
/// Bei Erfolg rückt der Anker auf den Endpunkt des neuen Segments. Eine
/// Abweisung lässt Netzwerk und Anker unverändert.
pub fn commit_segment(state: &mut AppState, cursor_world: Vec2) -> Option<InsertReport> {
    let start = state.drawing.anchor;
    let end = shape_candidate(start, cursor_world, state.options.max_segment_length);

    match state.network.try_insert(start, end) {
        Some(report) => {
            state.drawing.anchor = end;
            state.stats.committed += 1;
            state.stats.evicted += report.evicted.len();
            log::debug!(
                "Segment {} übernommen: Sättigung {}, {} verdrängt",
                report.id,
                report.saturation,
                report.evicted.len()
            );
            Some(report)
        }
        None => {
            state.stats.refused += 1;
            None
        }
    }
}

/// Setzt den Anker auf `world_pos`, ohne ein Segment zu zeichnen.
pub fn reposition_anchor(state: &mut AppState, world_pos: Vec2) {
    state.drawing.anchor = world_pos;
}
