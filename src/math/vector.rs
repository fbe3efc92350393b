use glam::Vec3;
use std::f32::consts::{PI, TAU};
use thiserror::Error;

/// Default bound on any world-space coordinate, in meters.
pub const DEFAULT_MAX_COMPONENT: f32 = 1.0e4;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum VectorError {
    #[error("invalid vector: non-finite component in {0}")]
    NonFinite(Vec3),
    #[error("invalid vector: {vector} exceeds world bound {bound}")]
    OutOfRange { vector: Vec3, bound: f32 },
}

pub fn validate_vector(vector: Vec3, bound: f32) -> Result<Vec3, VectorError> {
    if !vector.is_finite() {
        return Err(VectorError::NonFinite(vector));
    }
    if vector.abs().max_element() > bound {
        return Err(VectorError::OutOfRange { vector, bound });
    }
    Ok(vector)
}

pub fn is_valid_vector(vector: Vec3, bound: f32) -> bool {
    validate_vector(vector, bound).is_ok()
}

/// Wraps an angle into (-π, π].
pub fn wrap_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

/// Shifts `angle` by whole turns so that `angle - reference` lies in (-π, π].
///
/// The range check allows a few ulps of slack at both ends, so a result that
/// lands on ±π after rounding is accepted unchanged when normalized again.
pub fn normalize_angle(angle: f32, reference: f32) -> f32 {
    if !angle.is_finite() || !reference.is_finite() {
        return angle;
    }

    let slack = 4.0 * f32::EPSILON * (reference.abs() + PI);
    let delta = angle - reference;
    if delta >= -PI - slack && delta <= PI + slack {
        return angle;
    }
    reference + wrap_angle(delta)
}
