use crate::app::{AppCommand, AppIntent, AppState};
use crate::shared::LinesOptions;
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn commit_requested_uses_current_cursor() {
    let mut state = AppState::new();
    state.drawing.cursor_world = Vec2::new(12.0, -3.0);

    let commands = map_intent_to_commands(&state, AppIntent::CommitRequested);

    assert_eq!(
        commands,
        vec![AppCommand::CommitSegment {
            cursor_world: Vec2::new(12.0, -3.0)
        }]
    );
}

#[test]
fn session_started_seeds_around_origin() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SessionStarted);

    assert_eq!(
        commands,
        vec![AppCommand::SeedNetwork {
            center: Vec2::ZERO,
            count: state.options.seed_count
        }]
    );
}

#[test]
fn reset_options_requested_applies_defaults() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ResetOptionsRequested);

    assert_eq!(
        commands,
        vec![AppCommand::ApplyOptions {
            options: Box::new(LinesOptions::default())
        }]
    );
}
