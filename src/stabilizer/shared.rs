use glam::Vec3;
use std::sync::Arc;

use parking_lot::Mutex;

use super::context::FrameContext;
use super::magnetic::PoseStabilizer;
use crate::ar::{AnchorEvent, PlaneAnchor};
use crate::math::Pose;
use crate::render::{ArCamera, SceneNode, ScreenPoint};

/// Stabilizer handle for hosts that deliver anchor events and render ticks
/// on different threads.
///
/// Every operation holds the lock for its whole read-modify-write of the
/// history, visited set and pose.
#[derive(Debug, Clone, Default)]
pub struct SharedStabilizer {
    inner: Arc<Mutex<PoseStabilizer>>,
}

impl SharedStabilizer {
    pub fn new(stabilizer: PoseStabilizer) -> Self {
        Self {
            inner: Arc::new(Mutex::new(stabilizer)),
        }
    }

    pub fn update_for_anchor(&self, candidate: Vec3, anchor: &PlaneAnchor, camera: &ArCamera) {
        self.inner.lock().update_for_anchor(candidate, anchor, camera);
    }

    pub fn on_anchor_event(&self, event: &AnchorEvent, camera: &ArCamera) {
        self.inner.lock().on_anchor_event(event, camera);
    }

    pub fn update(&self, frame: &FrameContext<'_>, screen_hint: Option<ScreenPoint>) {
        self.inner.lock().update(frame, screen_hint);
    }

    pub fn pose(&self) -> Pose {
        self.inner.lock().pose()
    }

    pub fn world_position(&self) -> Vec3 {
        self.inner.lock().world_position()
    }

    pub fn apply_to<N: SceneNode + ?Sized>(&self, node: &mut N) {
        self.inner.lock().apply_to(node);
    }

    /// Runs `f` with exclusive access, for reads or settings changes that
    /// must see a consistent state.
    pub fn with<R>(&self, f: impl FnOnce(&mut PoseStabilizer) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ar::PlaneRegistry;
    use crate::stabilizer::StabilizerConfig;
    use glam::Vec2;
    use std::thread;

    #[test]
    fn test_concurrent_events_and_ticks() {
        let shared = SharedStabilizer::new(PoseStabilizer::new(StabilizerConfig::new(8)));
        let camera = ArCamera::default().looking_at(Vec3::new(0.0, 1.0, 2.0), Vec3::ZERO);

        let events = {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..200 {
                    let anchor = PlaneAnchor::horizontal(format!("plane-{i}"), Vec3::ZERO, Vec2::ONE);
                    shared.update_for_anchor(Vec3::new(1.0, 0.0, -1.0), &anchor, &camera);
                }
            })
        };

        let planes = PlaneRegistry::new();
        for _ in 0..200 {
            shared.update(&FrameContext::new(&camera, &planes), None);
        }
        events.join().unwrap();

        shared.with(|stabilizer| {
            assert_eq!(stabilizer.history().len(), 8);
            assert_eq!(stabilizer.visited_count(), 200);
            assert_eq!(stabilizer.position(), Vec3::new(1.0, 0.0, -1.0));
        });
    }

    #[test]
    fn test_apply_to_node() {
        let shared = SharedStabilizer::default();
        let mut node = Pose::from_position(Vec3::ONE);
        shared.apply_to(&mut node);
        assert_eq!(node, shared.pose());
    }
}
