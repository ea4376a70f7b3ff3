use glam::Vec2;

/// Zeichen-Zustand: Anker und Cursor des laufenden Segments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawingState {
    /// Freier Endpunkt, an dem das nächste Segment beginnt
    pub anchor: Vec2,
    /// Cursor-Position des aktuellen Frames (Welt)
    pub cursor_world: Vec2,
}

impl DrawingState {
    /// Erstellt den Start-Zustand (Anker und Cursor im Ursprung).
    pub fn new() -> Self {
        Self::default()
    }
}
