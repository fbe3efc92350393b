use glam::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub t_min: f32,
    pub t_max: f32,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            t_min: 0.0001,
            t_max: f32::MAX,
        }
    }

    pub fn with_range(origin: Vec3, direction: Vec3, t_min: f32, t_max: f32) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            t_min,
            t_max,
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersects the ray with the infinite plane through `point` with `normal`.
    pub fn intersect_plane(&self, point: Vec3, normal: Vec3) -> Option<f32> {
        let denom = self.direction.dot(normal);
        if denom.abs() < 0.0001 {
            return None;
        }

        let t = (point - self.origin).dot(normal) / denom;
        if t > self.t_min && t < self.t_max {
            Some(t)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    pub t: f32,
    pub point: Vec3,
    pub normal: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_intersect_plane_in_front() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let t = ray.intersect_plane(Vec3::ZERO, Vec3::Y).unwrap();
        assert_relative_eq!(t, 1.0, epsilon = 1e-6);
        assert_relative_eq!(ray.at(t).y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_intersect_plane_behind_or_parallel() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        assert!(ray.intersect_plane(Vec3::ZERO, Vec3::Y).is_none());

        let parallel = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(parallel.intersect_plane(Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn test_intersect_plane_respects_range() {
        let ray = Ray::with_range(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y, 0.0, 2.0);
        assert!(ray.intersect_plane(Vec3::ZERO, Vec3::Y).is_none());
    }
}
