//! Crossed Lines: interaktives Netz aus Liniensegmenten mit Kreuzungs-Sättigung.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, FrameInput, ViewState};
pub use core::{
    Admission, FollowCamera, InsertReport, Segment, SegmentId, SegmentNetwork, Transform4,
    Viewport,
};
pub use shared::{DrawCommand, LinesOptions, RenderScene};
