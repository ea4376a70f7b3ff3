use super::AppIntent;
use glam::Vec2;

/// Eingabe-Schnappschuss eines Frames.
///
/// Alle `*_requested`-Flags sind flankengetriggert: sie sind genau in dem
/// Frame gesetzt, in dem die Aktion ausgelöst wurde.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Cursor in Weltkoordinaten (kontinuierlich)
    pub cursor_world: Vec2,
    /// Segment übernehmen
    pub commit_requested: bool,
    /// Anker an den Cursor setzen
    pub reposition_requested: bool,
    /// Kamera zurücksetzen
    pub reset_camera_requested: bool,
    /// Vollbild umschalten
    pub fullscreen_requested: bool,
    /// Neue Viewport-Größe, falls sie sich geändert hat
    pub viewport_size: Option<[f32; 2]>,
}

impl FrameInput {
    /// Schnappschuss nur mit Cursor-Position.
    pub fn at(cursor_world: Vec2) -> Self {
        Self {
            cursor_world,
            ..Self::default()
        }
    }

    /// Wie [`FrameInput::at`], mit gesetztem Commit-Flag.
    pub fn commit_at(cursor_world: Vec2) -> Self {
        Self {
            cursor_world,
            commit_requested: true,
            ..Self::default()
        }
    }

    /// Leitet die Intents dieses Frames ab.
    ///
    /// Viewport-Änderungen kommen zuerst.
    pub fn intents(&self) -> Vec<AppIntent> {
        let mut intents = Vec::new();
        if let Some(size) = self.viewport_size {
            intents.push(AppIntent::ViewportResized { size });
        }
        if self.commit_requested {
            intents.push(AppIntent::CommitRequested);
        }
        if self.reposition_requested {
            intents.push(AppIntent::RepositionAnchorRequested);
        }
        if self.reset_camera_requested {
            intents.push(AppIntent::ResetCameraRequested);
        }
        if self.fullscreen_requested {
            intents.push(AppIntent::ToggleFullscreenRequested);
        }
        intents
    }
}
