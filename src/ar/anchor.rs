use glam::{Vec2, Vec3};
use std::fmt;
use thiserror::Error;

use super::raycast::{Ray, RayHit};
use crate::math::{validate_vector, Pose, VectorError, DEFAULT_MAX_COMPONENT};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnchorId(String);

impl AnchorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnchorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AnchorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaneAlignment {
    #[default]
    Horizontal,
    Vertical,
}

/// A detected flat surface, as reported by the AR session.
///
/// The plane lies in the XZ plane of its anchor transform; `center` and
/// `extent` are expressed in that local frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneAnchor {
    pub id: AnchorId,
    pub transform: Pose,
    pub center: Vec3,
    pub extent: Vec2,
    pub alignment: PlaneAlignment,
}

impl PlaneAnchor {
    pub fn new(id: impl Into<AnchorId>, transform: Pose, center: Vec3, extent: Vec2) -> Self {
        Self {
            id: id.into(),
            transform,
            center,
            extent,
            alignment: PlaneAlignment::Horizontal,
        }
    }

    /// Axis-aligned horizontal plane centered at `center` in world space.
    pub fn horizontal(id: impl Into<AnchorId>, center: Vec3, extent: Vec2) -> Self {
        Self::new(id, Pose::from_position(center), Vec3::ZERO, extent)
    }

    pub fn with_alignment(mut self, alignment: PlaneAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn world_center(&self) -> Vec3 {
        self.transform.transform_point(self.center)
    }

    pub fn normal(&self) -> Vec3 {
        self.transform.up().normalize_or_zero()
    }

    pub fn contains_local(&self, local: Vec3) -> bool {
        let offset = local - self.center;
        offset.x.abs() <= self.extent.x * 0.5 && offset.z.abs() <= self.extent.y * 0.5
    }

    pub fn ray_intersect(&self, ray: &Ray) -> Option<RayHit> {
        let normal = self.normal();
        let t = ray.intersect_plane(self.world_center(), normal)?;
        let point = ray.at(t);

        if self.contains_local(self.transform.inverse_transform_point(point)) {
            Some(RayHit { t, point, normal })
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorEventKind {
    Add,
    Update,
    Remove,
}

#[derive(Debug, Clone)]
pub struct AnchorEvent {
    pub anchors: Vec<PlaneAnchor>,
    pub kind: AnchorEventKind,
}

impl AnchorEvent {
    pub fn new(kind: AnchorEventKind, anchors: Vec<PlaneAnchor>) -> Self {
        Self { anchors, kind }
    }
}

#[derive(Debug, Error)]
pub enum AnchorError {
    #[error("anchor is missing an identifier")]
    MissingId,
    #[error("anchor {id}: transform is not finite or not invertible")]
    InvalidTransform { id: String },
    #[error("anchor {id}: invalid center")]
    InvalidCenter {
        id: String,
        #[source]
        source: VectorError,
    },
    #[error("anchor {id}: invalid extent {width} x {length}")]
    InvalidExtent { id: String, width: f32, length: f32 },
}

/// Plane anchor payload as it arrives from the AR session, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPlaneAnchor {
    pub id: String,
    /// Column-major 4x4 anchor transform.
    pub transform: [f32; 16],
    pub center: [f32; 3],
    /// Width along local X, length along local Z.
    pub extent: [f32; 2],
    pub vertical: bool,
}

impl TryFrom<RawPlaneAnchor> for PlaneAnchor {
    type Error = AnchorError;

    fn try_from(raw: RawPlaneAnchor) -> Result<Self, Self::Error> {
        if raw.id.is_empty() {
            return Err(AnchorError::MissingId);
        }

        let transform = Pose::from_cols_array(&raw.transform)
            .ok_or_else(|| AnchorError::InvalidTransform { id: raw.id.clone() })?;

        let center = validate_vector(Vec3::from_array(raw.center), DEFAULT_MAX_COMPONENT)
            .map_err(|source| AnchorError::InvalidCenter {
                id: raw.id.clone(),
                source,
            })?;

        let [width, length] = raw.extent;
        if !(width.is_finite() && length.is_finite()) || width < 0.0 || length < 0.0 {
            return Err(AnchorError::InvalidExtent {
                id: raw.id,
                width,
                length,
            });
        }

        let alignment = if raw.vertical {
            PlaneAlignment::Vertical
        } else {
            PlaneAlignment::Horizontal
        };

        Ok(Self {
            id: AnchorId(raw.id),
            transform,
            center,
            extent: Vec2::new(width, length),
            alignment,
        })
    }
}
