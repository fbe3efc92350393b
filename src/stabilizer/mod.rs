//! Pose stabilization
//!
//! Smooths candidate positions coming from plane anchors into a jitter-free
//! object pose, with optional camera-facing yaw and distance-based scale.

mod config;
mod context;
mod history;
mod magnetic;
mod shared;

pub use config::{ScaleCurve, Smoothing, StabilizerConfig};
pub use context::FrameContext;
pub use history::RecentPositionHistory;
pub use magnetic::PoseStabilizer;
pub use shared::SharedStabilizer;
