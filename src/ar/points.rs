use glam::Vec3;
use std::collections::BTreeMap;

use crate::math::{validate_vector, DEFAULT_MAX_COMPONENT};

/// Feature point as the AR session reports it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawFeaturePoint {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeaturePoint {
    pub id: u64,
    pub position: Vec3,
}

/// Feature points of the most recent frame, keyed by session identifier.
#[derive(Debug, Default, Clone)]
pub struct FeaturePointCloud {
    points: BTreeMap<u64, Vec3>,
}

impl FeaturePointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cloud with this frame's points. Invalid points are skipped.
    pub fn set_points<I>(&mut self, raw: I)
    where
        I: IntoIterator<Item = RawFeaturePoint>,
    {
        self.points.clear();

        let mut dropped = 0usize;
        for point in raw {
            match validate_vector(Vec3::new(point.x, point.y, point.z), DEFAULT_MAX_COMPONENT) {
                Ok(position) => {
                    self.points.insert(point.id, position);
                }
                Err(_) => dropped += 1,
            }
        }

        if dropped > 0 {
            log::debug!("skipped {} invalid feature points", dropped);
        }
    }

    pub fn get(&self, id: u64) -> Option<Vec3> {
        self.points.get(&id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = FeaturePoint> + '_ {
        self.points
            .iter()
            .map(|(&id, &position)| FeaturePoint { id, position })
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.points.values().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
