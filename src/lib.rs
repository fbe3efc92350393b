//! # magnetic-pose
//!
//! Keeps virtual objects steady on surfaces detected by an AR session.
//!
//! ## Features
//! - Pose stabilizer that snaps an object to plane anchors and smooths
//!   tracking noise over a bounded window of recent candidates
//! - Optional camera-facing yaw and distance-based scale
//! - Plane registry with camera-ray hit testing
//! - Renderer-agnostic plane meshes, feature-point buffers and model uniforms
//!
//! ## Example
//! ```rust,ignore
//! use magnetic_pose::ar::{AnchorEvent, AnchorEventKind, PlaneAnchor, PlaneRegistry};
//! use magnetic_pose::render::{ArCamera, ScreenPoint};
//! use magnetic_pose::stabilizer::{FrameContext, PoseStabilizer, StabilizerConfig};
//! use glam::{Vec2, Vec3};
//!
//! let mut planes = PlaneRegistry::new();
//! let mut object = PoseStabilizer::new(StabilizerConfig::new(8));
//! let camera = ArCamera::default().looking_at(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, -1.0, -1.0));
//!
//! // Anchor callback
//! let floor = PlaneAnchor::horizontal("floor", Vec3::new(0.0, -1.0, 0.0), Vec2::new(4.0, 4.0));
//! let event = AnchorEvent::new(AnchorEventKind::Add, vec![floor]);
//! planes.apply(&event);
//! object.on_anchor_event(&event, &camera);
//!
//! // Render tick
//! object.update(&FrameContext::new(&camera, &planes), Some(ScreenPoint::CENTER));
//! println!("object at {}", object.world_position());
//! ```

pub mod ar;
pub mod math;
pub mod render;
pub mod stabilizer;

pub use ar::{AnchorEvent, AnchorEventKind, AnchorId, PlaneAnchor, PlaneRegistry};
pub use math::Pose;
pub use render::{ArCamera, SceneNode, ScreenPoint};
pub use stabilizer::{FrameContext, PoseStabilizer, SharedStabilizer, StabilizerConfig};
