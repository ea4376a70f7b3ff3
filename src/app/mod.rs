//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Netzwerk, Anker, Kamera und Optionen der laufenden Sitzung.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, FrameInput};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, DrawingState, SessionStats, ViewState};
