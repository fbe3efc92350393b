//! Math utilities module
//!
//! Provides the pose type, vector validation and angle helpers on top of glam.

mod pose;
mod vector;

pub use pose::Pose;
pub use vector::{
    is_valid_vector, normalize_angle, validate_vector, wrap_angle, VectorError,
    DEFAULT_MAX_COMPONENT,
};

// Re-export commonly used glam types
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
