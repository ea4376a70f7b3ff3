//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod drawing;
pub mod network;
pub mod options;
pub mod viewport;
