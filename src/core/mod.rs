//! Core-Domäne: Geometrie, Transformationen, Segment-Netzwerk, Kamera.

pub mod camera;
pub mod intersection;
/// Segment-Netzwerk mit Sättigungs-Buchhaltung
///
/// - Zulassung: Kandidaten mit 3+ Kreuzungen werden abgewiesen
/// - Einfügen: Kreuzungen werden beidseitig verbucht, gesättigte Segmente verdrängt
/// - Zufalls-Bestückung für den Start
pub mod network;
pub mod segment;
pub mod transform;
pub mod vector;
pub mod viewport;

pub use camera::FollowCamera;
pub use intersection::{points_cross, segments_cross};
pub use network::{
    Admission, InsertReport, PopulateReport, SaturationMismatch, ScatterParams, SegmentNetwork,
    ADMISSION_LIMIT, MAX_SATURATION,
};
pub use segment::{segment_transform, shape_candidate, Segment, SegmentId};
pub use transform::Transform4;
pub use vector::VectorOps;
pub use viewport::Viewport;
