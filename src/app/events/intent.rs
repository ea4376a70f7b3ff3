use crate::shared::LinesOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Sitzung startet (Netzwerk zufällig bestücken)
    SessionStarted,
    /// Aktuelles Vorschau-Segment übernehmen
    CommitRequested,
    /// Anker an die Cursor-Position setzen, ohne zu zeichnen
    RepositionAnchorRequested,
    /// Kamera auf den Ursprung zurücksetzen
    ResetCameraRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Vollbild umschalten
    ToggleFullscreenRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: Box<LinesOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Optionen in die Konfigurationsdatei schreiben
    SaveOptionsRequested,
}
