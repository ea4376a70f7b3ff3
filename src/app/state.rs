//! Application State: Netzwerk, Zeichen- und View-Zustand.

mod app_state;
mod drawing;
mod view;

pub use app_state::{AppState, SessionStats};
pub use drawing::DrawingState;
pub use view::ViewState;
