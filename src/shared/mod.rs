//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::LinesOptions;
pub use options::{MAX_SEGMENT_LENGTH, SEED_COUNT};
pub use render_scene::{DrawCommand, RenderScene};
