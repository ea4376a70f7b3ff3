//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.
//!
//! `FrameInput` ist der explizite Eingabe-Schnappschuss pro Frame, aus dem
//! der Controller die Intents des Frames ableitet.

mod command;
mod frame_input;
mod intent;

pub use command::AppCommand;
pub use frame_input::FrameInput;
pub use intent::AppIntent;
