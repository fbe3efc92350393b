use std::collections::HashMap;

use super::anchor::{AnchorEvent, AnchorEventKind, AnchorId, PlaneAnchor};
use super::raycast::{Ray, RayHit};

/// Latest known state of every plane anchor the session has reported.
#[derive(Debug, Default, Clone)]
pub struct PlaneRegistry {
    planes: HashMap<AnchorId, PlaneAnchor>,
}

impl PlaneRegistry {
    pub fn new() -> Self {
        Self {
            planes: HashMap::new(),
        }
    }

    pub fn apply(&mut self, event: &AnchorEvent) {
        match event.kind {
            AnchorEventKind::Add | AnchorEventKind::Update => {
                for anchor in &event.anchors {
                    if self.planes.insert(anchor.id.clone(), anchor.clone()).is_none() {
                        log::debug!("tracking plane {}", anchor.id);
                    }
                }
            }
            AnchorEventKind::Remove => {
                for anchor in &event.anchors {
                    if self.planes.remove(&anchor.id).is_some() {
                        log::debug!("dropped plane {}", anchor.id);
                    }
                }
            }
        }
    }

    pub fn insert(&mut self, anchor: PlaneAnchor) {
        self.planes.insert(anchor.id.clone(), anchor);
    }

    pub fn get(&self, id: &AnchorId) -> Option<&PlaneAnchor> {
        self.planes.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlaneAnchor> {
        self.planes.values()
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn clear(&mut self) {
        self.planes.clear();
    }

    /// Nearest plane hit along the ray, if any.
    pub fn raycast(&self, ray: &Ray) -> Option<(&PlaneAnchor, RayHit)> {
        let mut closest: Option<(&PlaneAnchor, RayHit)> = None;

        for plane in self.planes.values() {
            if let Some(hit) = plane.ray_intersect(ray) {
                match &closest {
                    None => closest = Some((plane, hit)),
                    Some((_, prev_hit)) if hit.t < prev_hit.t => {
                        closest = Some((plane, hit));
                    }
                    _ => {}
                }
            }
        }

        closest
    }
}
