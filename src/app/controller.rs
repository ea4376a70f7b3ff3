//! Application Controller für zentrale Event-Verarbeitung.

use super::events::FrameInput;
use super::render_scene;
use super::use_cases;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        match command {
            // === Zeichnen ===
            AppCommand::CommitSegment { cursor_world } => {
                use_cases::drawing::commit_segment(state, cursor_world);
            }
            AppCommand::RepositionAnchor { world_pos } => {
                use_cases::drawing::reposition_anchor(state, world_pos)
            }

            // === Netzwerk ===
            AppCommand::SeedNetwork { center, count } => {
                use_cases::network::seed_network(state, center, count);
            }

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => use_cases::camera::reset_camera(state),
            AppCommand::SetViewportSize { size } => use_cases::viewport::resize(state, size),
            AppCommand::ToggleFullscreen => use_cases::viewport::toggle_fullscreen(state),

            // === Optionen ===
            AppCommand::OpenOptionsDialog => use_cases::options::open_dialog(state),
            AppCommand::CloseOptionsDialog => use_cases::options::close_dialog(state),
            AppCommand::ApplyOptions { options } => {
                use_cases::options::apply_options(state, *options)?
            }
            AppCommand::SaveOptions => use_cases::options::save_options(state)?,

            // === Anwendung ===
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }

    /// Ein Frame: Cursor übernehmen, Eingaben anwenden, Kamera nachführen,
    /// Szene bauen.
    ///
    /// Ein fehlgeschlagener Command bricht den Frame nicht ab; der Fehler
    /// wird nach dem Szenenaufbau zurückgegeben.
    pub fn tick(&mut self, state: &mut AppState, input: &FrameInput) -> anyhow::Result<RenderScene> {
        state.drawing.cursor_world = input.cursor_world;

        let mut first_error = None;
        for intent in input.intents() {
            if let Err(err) = self.handle_intent(state, intent) {
                log::warn!("Frame-Eingabe fehlgeschlagen: {:#}", err);
                first_error.get_or_insert(err);
            }
        }

        use_cases::camera::follow_cursor(state);

        let scene = self.build_render_scene(state);
        match first_error {
            Some(err) => Err(err),
            None => Ok(scene),
        }
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
