use glam::Vec3;
use std::collections::HashSet;

use super::config::StabilizerConfig;
use super::context::FrameContext;
use super::history::RecentPositionHistory;
use crate::ar::{AnchorEvent, AnchorEventKind, AnchorId, PlaneAnchor};
use crate::math::{is_valid_vector, normalize_angle, validate_vector, wrap_angle, Pose};
use crate::render::{ArCamera, SceneNode, ScreenPoint};

/// Keeps a virtual object "magnetically" attached to detected planes.
///
/// Candidate positions (plane centers, hit-test points) are collected once
/// per anchor into a bounded history, and the object sits at the smoothed
/// history position so tracking noise does not show up as jitter. Each frame
/// the object can optionally turn to face the camera about Y and rescale
/// with distance.
///
/// All positions are in the parent space set with [`set_parent`]; the parent
/// is identity unless the host nests the object under another node.
///
/// [`set_parent`]: PoseStabilizer::set_parent
#[derive(Debug, Clone)]
pub struct PoseStabilizer {
    pose: Pose,
    parent: Pose,
    history: RecentPositionHistory,
    visited: HashSet<AnchorId>,
    config: StabilizerConfig,
}

impl Default for PoseStabilizer {
    fn default() -> Self {
        Self::new(StabilizerConfig::default())
    }
}

impl PoseStabilizer {
    pub fn new(config: StabilizerConfig) -> Self {
        Self {
            pose: Pose::IDENTITY,
            parent: Pose::IDENTITY,
            history: RecentPositionHistory::new(config.window_size),
            visited: HashSet::new(),
            config,
        }
    }

    pub fn with_parent(mut self, parent: Pose) -> Self {
        self.parent = parent;
        self
    }

    pub fn config(&self) -> &StabilizerConfig {
        &self.config
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    /// Position of the object in world space, for hit-test origins.
    pub fn world_position(&self) -> Vec3 {
        self.parent.transform_point(self.pose.position)
    }

    pub fn history(&self) -> &RecentPositionHistory {
        &self.history
    }

    pub fn has_visited(&self, id: &AnchorId) -> bool {
        self.visited.contains(id)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn maintain_scale(&self) -> bool {
        self.config.maintain_scale
    }

    pub fn maintain_rotation(&self) -> bool {
        self.config.maintain_rotation
    }

    pub fn set_maintain_scale(&mut self, maintain: bool) {
        self.config.maintain_scale = maintain;
    }

    pub fn set_maintain_rotation(&mut self, maintain: bool) {
        self.config.maintain_rotation = maintain;
    }

    pub fn set_window_size(&mut self, window_size: usize) {
        self.config.window_size = window_size.max(1);
        self.config.min_samples = self.config.min_samples.min(self.config.window_size);
        self.history.set_capacity(self.config.window_size);
    }

    pub fn set_parent(&mut self, parent: Pose) {
        self.parent = parent;
    }

    pub fn is_valid_vector(&self, vector: Vec3) -> bool {
        is_valid_vector(vector, self.config.max_component)
    }

    /// Expresses `angle` relative to `reference` along the shortest path.
    pub fn normalize(angle: f32, reference: f32) -> f32 {
        normalize_angle(angle, reference)
    }

    /// Feeds a candidate position derived from `anchor`.
    ///
    /// Invalid vectors are dropped and the pose is left as it was. An anchor
    /// contributes to the history only the first time it is seen.
    pub fn update_for_anchor(&mut self, candidate: Vec3, anchor: &PlaneAnchor, camera: &ArCamera) {
        if self.accept_candidate(candidate, anchor) {
            self.update_transform(camera);
        }
    }

    /// Per-frame tick.
    ///
    /// With a screen hint the hint is hit-tested against the frame's planes
    /// and the nearest hit becomes a candidate. Rotation and scale are then
    /// refreshed according to the maintain flags.
    pub fn update(&mut self, frame: &FrameContext<'_>, screen_hint: Option<ScreenPoint>) {
        if let Some(point) = screen_hint {
            let ray = frame.camera.screen_to_ray(point);
            if let Some((anchor, hit)) = frame.planes.raycast(&ray) {
                let candidate = self.parent.inverse_transform_point(hit.point);
                self.accept_candidate(candidate, anchor);
            }
        }

        self.update_transform(frame.camera);
    }

    /// Routes a session anchor event: added or updated planes offer their
    /// center as a candidate, removed planes may contribute again later.
    pub fn on_anchor_event(&mut self, event: &AnchorEvent, camera: &ArCamera) {
        match event.kind {
            AnchorEventKind::Add | AnchorEventKind::Update => {
                let mut moved = false;
                for anchor in &event.anchors {
                    let candidate = self.parent.inverse_transform_point(anchor.world_center());
                    moved |= self.accept_candidate(candidate, anchor);
                }
                if moved {
                    self.update_transform(camera);
                }
            }
            AnchorEventKind::Remove => {
                for anchor in &event.anchors {
                    self.forget_anchor(&anchor.id);
                }
            }
        }
    }

    /// Allows a removed anchor to contribute again if it is re-detected.
    /// Samples it already contributed stay in the history until evicted.
    pub fn forget_anchor(&mut self, id: &AnchorId) -> bool {
        self.visited.remove(id)
    }

    /// Drops all history and visited anchors. The pose stays where it is.
    pub fn reset(&mut self) {
        self.history.clear();
        self.visited.clear();
    }

    pub fn scale_based_on_distance(&self, camera: &ArCamera) -> f32 {
        let distance = self.world_position().distance(camera.position());
        self.config.scale_curve.scale_at(distance)
    }

    pub fn apply_to<N: SceneNode + ?Sized>(&self, node: &mut N) {
        node.apply_pose(&self.pose);
    }

    fn accept_candidate(&mut self, candidate: Vec3, anchor: &PlaneAnchor) -> bool {
        let candidate = match validate_vector(candidate, self.config.max_component) {
            Ok(candidate) => candidate,
            Err(err) => {
                log::debug!("ignoring candidate from plane {}: {}", anchor.id, err);
                return false;
            }
        };

        if self.visited.contains(&anchor.id) {
            log::trace!("plane {} already contributed", anchor.id);
            return false;
        }
        self.visited.insert(anchor.id.clone());

        if let Some(evicted) = self.history.push(candidate) {
            log::trace!("evicted {} from position history", evicted);
        }

        let required = self.config.min_samples.min(self.history.capacity());
        if self.history.len() < required {
            return false;
        }

        match self.history.smoothed(self.config.smoothing) {
            Some(position) => {
                self.pose.position = position;
                true
            }
            None => false,
        }
    }

    fn update_transform(&mut self, camera: &ArCamera) {
        if self.config.maintain_scale {
            self.pose.scale = Vec3::splat(self.scale_based_on_distance(camera));
        }

        if self.config.maintain_rotation {
            self.update_yaw(camera);
        }
    }

    fn update_yaw(&mut self, camera: &ArCamera) {
        let to_camera = camera.position() - self.world_position();
        if to_camera.x.abs() < 1.0e-6 && to_camera.z.abs() < 1.0e-6 {
            return;
        }

        let tilt = camera.forward().y.clamp(-1.0, 1.0).asin().abs();
        let current = self.pose.yaw();
        let facing = normalize_angle(to_camera.x.atan2(to_camera.z) - self.parent.yaw(), current);

        let yaw = if tilt <= self.config.tilt_follow {
            facing
        } else if tilt < self.config.tilt_hold {
            let span = self.config.tilt_hold - self.config.tilt_follow;
            let held = (tilt - self.config.tilt_follow) / span;
            facing * (1.0 - held) + current * held
        } else {
            return;
        };

        self.pose.set_yaw(wrap_angle(yaw));
    }
}
