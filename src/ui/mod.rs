//! UI-Komponenten: Menü, Status-Bar, Input-Handling, Options-Dialog.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Die Komponenten lesen den AppState nur und liefern Intents bzw. den
/// Eingabe-Schnappschuss des Frames zurück.
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
