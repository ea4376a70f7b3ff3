use crate::core::{FollowCamera, Viewport};
use crate::shared::LinesOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Nachführende Kamera
    pub camera: FollowCamera,
    /// Zeichenfläche (Pixelgröße + sichtbare Welthöhe)
    pub viewport: Viewport,
    /// Ob das Fenster im Vollbild läuft
    pub fullscreen: bool,
}

impl ViewState {
    /// Erstellt den View-Zustand passend zu den Optionen.
    pub fn new(options: &LinesOptions) -> Self {
        Self {
            camera: FollowCamera::with_smoothing(
                options.anchor_smoothing,
                options.camera_smoothing,
            ),
            viewport: Viewport::new([0.0, 0.0], options.view_height_world),
            fullscreen: false,
        }
    }
}
