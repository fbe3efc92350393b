use glam::{Mat4, Quat, Vec3, Vec4};

use crate::ar::Ray;
use crate::math::Pose;

/// Point on screen in normalized device coordinates, +Y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Converts a pixel position (origin top-left, +Y down).
    pub fn from_pixels(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x: 2.0 * x / width - 1.0,
            y: 1.0 - 2.0 * y / height,
        }
    }
}

/// The AR device camera: a world pose supplied by tracking plus projection.
#[derive(Debug, Clone, Copy)]
pub struct ArCamera {
    pub pose: Pose,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ArCamera {
    fn default() -> Self {
        Self {
            pose: Pose::IDENTITY,
            fov: 60.0_f32.to_radians(),
            aspect: 1.0,
            near: 0.01,
            far: 1000.0,
        }
    }
}

impl ArCamera {
    pub fn new(width: f32, height: f32, near: f32, far: f32) -> Self {
        Self {
            aspect: width / height,
            near,
            far,
            ..Default::default()
        }
    }

    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    pub fn looking_at(mut self, position: Vec3, target: Vec3) -> Self {
        let view = Mat4::look_at_rh(position, target, Vec3::Y);
        self.pose = Pose::from_position_rotation(position, Quat::from_mat4(&view.inverse()).normalize());
        self
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn forward(&self) -> Vec3 {
        self.pose.forward().normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.pose.rotation, self.pose.position).inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn screen_to_ray(&self, point: ScreenPoint) -> Ray {
        let inv_view_proj = self.view_projection().inverse();

        let near_point = inv_view_proj * Vec4::new(point.x, point.y, 0.0, 1.0);
        let far_point = inv_view_proj * Vec4::new(point.x, point.y, 1.0, 1.0);

        let near = near_point.truncate() / near_point.w;
        let far = far_point.truncate() / far_point.w;

        let span = far - near;
        Ray::with_range(near, span, 0.0, span.length())
    }
}
