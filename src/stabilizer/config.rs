use std::f32::consts::FRAC_PI_2;

use crate::math::DEFAULT_MAX_COMPONENT;

/// How the retained candidate positions are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Smoothing {
    /// Arithmetic mean of the window.
    #[default]
    Mean,
    /// Linear weights 1..=n, newest sample heaviest.
    RecencyWeighted,
}

/// Maps camera distance to object scale.
///
/// Closer than `reference_distance` the object shrinks linearly to zero;
/// beyond it the scale grows by `far_slope` per meter, starting from 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleCurve {
    pub reference_distance: f32,
    pub far_slope: f32,
}

impl Default for ScaleCurve {
    fn default() -> Self {
        Self {
            reference_distance: 0.7,
            far_slope: 0.25,
        }
    }
}

impl ScaleCurve {
    pub fn scale_at(&self, distance: f32) -> f32 {
        if !distance.is_finite() || self.reference_distance <= 0.0 {
            return 1.0;
        }
        if distance < self.reference_distance {
            distance / self.reference_distance
        } else {
            1.0 + self.far_slope * (distance - self.reference_distance)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilizerConfig {
    /// Number of recent candidate positions kept for smoothing.
    pub window_size: usize,
    /// Samples required before the position starts following the history.
    pub min_samples: usize,
    /// Largest accepted absolute coordinate, in meters.
    pub max_component: f32,
    pub smoothing: Smoothing,
    pub maintain_scale: bool,
    pub maintain_rotation: bool,
    /// Camera pitch (radians, absolute) up to which yaw fully follows the camera.
    pub tilt_follow: f32,
    /// Camera pitch beyond which yaw is held.
    pub tilt_hold: f32,
    pub scale_curve: ScaleCurve,
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            window_size: 8,
            min_samples: 1,
            max_component: DEFAULT_MAX_COMPONENT,
            smoothing: Smoothing::Mean,
            maintain_scale: true,
            maintain_rotation: true,
            tilt_follow: FRAC_PI_2 * 0.65,
            tilt_hold: FRAC_PI_2 * 0.75,
            scale_curve: ScaleCurve::default(),
        }
    }
}

impl StabilizerConfig {
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size: window_size.max(1),
            ..Default::default()
        }
    }

    /// Capped at the window size, since the history never holds more.
    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples.clamp(1, self.window_size.max(1));
        self
    }

    pub fn with_max_component(mut self, max_component: f32) -> Self {
        self.max_component = max_component;
        self
    }

    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_maintain_scale(mut self, maintain: bool) -> Self {
        self.maintain_scale = maintain;
        self
    }

    pub fn with_maintain_rotation(mut self, maintain: bool) -> Self {
        self.maintain_rotation = maintain;
        self
    }

    pub fn with_tilt_thresholds(mut self, follow: f32, hold: f32) -> Self {
        self.tilt_follow = follow.min(hold);
        self.tilt_hold = hold.max(follow);
        self
    }

    pub fn with_scale_curve(mut self, curve: ScaleCurve) -> Self {
        self.scale_curve = curve;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scale_curve_reference_points() {
        let curve = ScaleCurve::default();
        assert_relative_eq!(curve.scale_at(0.7), 1.0, epsilon = 1e-6);
        assert_relative_eq!(curve.scale_at(1.5), 1.2, epsilon = 1e-6);
        assert_relative_eq!(curve.scale_at(0.35), 0.5, epsilon = 1e-6);
        assert_relative_eq!(curve.scale_at(f32::NAN), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_builder_clamps() {
        let config = StabilizerConfig::new(0)
            .with_min_samples(0)
            .with_tilt_thresholds(1.0, 0.5);

        assert_eq!(config.window_size, 1);
        assert_eq!(config.min_samples, 1);

        let capped = StabilizerConfig::new(3).with_min_samples(5);
        assert_eq!(capped.min_samples, 3);
        assert!(config.tilt_follow <= config.tilt_hold);
    }
}
