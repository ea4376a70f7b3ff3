//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SessionStarted => vec![AppCommand::SeedNetwork {
            center: glam::Vec2::ZERO,
            count: state.options.seed_count,
        }],
        AppIntent::CommitRequested => vec![AppCommand::CommitSegment {
            cursor_world: state.drawing.cursor_world,
        }],
        AppIntent::RepositionAnchorRequested => vec![AppCommand::RepositionAnchor {
            world_pos: state.drawing.cursor_world,
        }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ToggleFullscreenRequested => vec![AppCommand::ToggleFullscreen],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ApplyOptions {
            options: Box::default(),
        }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
    }
}

#[cfg(test)]
mod tests;
