use glam::{EulerRot, Mat4, Quat, Vec3};

/// Position, orientation and scale of an object relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            scale: Vec3::ONE,
        }
    }

    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Decomposes a column-major 4x4 matrix as delivered by AR sessions.
    ///
    /// Returns `None` when the matrix holds non-finite values or collapses
    /// an axis, since such a transform can't be inverted for hit testing.
    pub fn from_cols_array(cols: &[f32; 16]) -> Option<Self> {
        if cols.iter().any(|c| !c.is_finite()) {
            return None;
        }

        let matrix = Mat4::from_cols_array(cols);
        if matrix.determinant().abs() < f32::EPSILON {
            return None;
        }

        let (scale, rotation, position) = matrix.to_scale_rotation_translation();
        Some(Self {
            position,
            rotation: rotation.normalize(),
            scale,
        })
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * (point * self.scale) + self.position
    }

    pub fn inverse_transform_point(&self, point: Vec3) -> Vec3 {
        (self.rotation.inverse() * (point - self.position)) / self.scale
    }

    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        self.rotation * direction
    }

    /// Rotation about the world Y axis, in (-π, π].
    pub fn yaw(&self) -> f32 {
        let (yaw, _, _) = self.rotation.to_euler(EulerRot::YXZ);
        yaw
    }

    /// Replaces the orientation with a pure rotation about Y.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.rotation = Quat::from_rotation_y(yaw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_from_cols_array_decomposes_translation_and_rotation() {
        let source = Pose::new(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_rotation_y(FRAC_PI_2),
            Vec3::ONE,
        );
        let pose = Pose::from_cols_array(&source.to_matrix().to_cols_array()).unwrap();

        assert_relative_eq!(pose.position.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(pose.position.y, 2.0, epsilon = 1e-5);
        assert_relative_eq!(pose.position.z, 3.0, epsilon = 1e-5);
        assert_relative_eq!(pose.yaw(), FRAC_PI_2, epsilon = 1e-5);
    }

    #[test]
    fn test_from_cols_array_rejects_degenerate() {
        assert!(Pose::from_cols_array(&[0.0; 16]).is_none());

        let mut cols = Mat4::IDENTITY.to_cols_array();
        cols[12] = f32::NAN;
        assert!(Pose::from_cols_array(&cols).is_none());
    }

    #[test]
    fn test_inverse_transform_point_round_trips() {
        let parent = Pose::new(
            Vec3::new(-1.0, 0.5, 4.0),
            Quat::from_rotation_y(0.7),
            Vec3::splat(2.0),
        );
        let local = Vec3::new(0.3, -0.2, 1.5);
        let back = parent.inverse_transform_point(parent.transform_point(local));

        assert_relative_eq!(back.x, local.x, epsilon = 1e-5);
        assert_relative_eq!(back.y, local.y, epsilon = 1e-5);
        assert_relative_eq!(back.z, local.z, epsilon = 1e-5);
    }

    #[test]
    fn test_set_yaw_discards_pitch_and_roll() {
        let mut pose = Pose::from_position_rotation(
            Vec3::ZERO,
            Quat::from_euler(EulerRot::YXZ, 0.4, 0.3, 0.2),
        );
        pose.set_yaw(1.0);

        assert_relative_eq!(pose.yaw(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(pose.up().y, 1.0, epsilon = 1e-5);
    }
}
