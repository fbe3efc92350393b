//! AR session data
//!
//! Typed plane anchors and feature points, validated at the point where raw
//! session payloads enter the crate, plus ray hit testing against planes.

mod anchor;
mod planes;
mod points;
mod raycast;

pub use anchor::{
    AnchorError, AnchorEvent, AnchorEventKind, AnchorId, PlaneAlignment, PlaneAnchor,
    RawPlaneAnchor,
};
pub use planes::PlaneRegistry;
pub use points::{FeaturePoint, FeaturePointCloud, RawFeaturePoint};
pub use raycast::{Ray, RayHit};
