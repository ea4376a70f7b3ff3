use crate::shared::LinesOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Kandidat vom Anker zur (gekürzten) Cursor-Position einfügen
    CommitSegment { cursor_world: glam::Vec2 },
    /// Anker auf eine Weltposition setzen
    RepositionAnchor { world_pos: glam::Vec2 },
    /// Zufallskandidaten um `center` einfügen
    SeedNetwork { center: glam::Vec2, count: usize },
    /// Kamera zurücksetzen
    ResetCamera,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Vollbild umschalten
    ToggleFullscreen,
    /// Anwendung beenden
    RequestExit,
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Neue Optionen prüfen und übernehmen
    ApplyOptions { options: Box<LinesOptions> },
    /// Optionen in die Konfigurationsdatei schreiben
    SaveOptions,
}
