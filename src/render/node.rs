use bytemuck::{Pod, Zeroable};

use crate::math::Pose;

/// Host-side scene object that mirrors a stabilized pose.
///
/// The stabilizer never touches the host's scene graph directly; the host
/// implements this for whatever node type its renderer uses.
pub trait SceneNode {
    fn apply_pose(&mut self, pose: &Pose);
}

impl SceneNode for Pose {
    fn apply_pose(&mut self, pose: &Pose) {
        *self = *pose;
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PoseUniform {
    pub model: [[f32; 4]; 4],
}

impl PoseUniform {
    pub fn from_pose(pose: &Pose) -> Self {
        Self {
            model: pose.to_matrix().to_cols_array_2d(),
        }
    }
}

impl SceneNode for PoseUniform {
    fn apply_pose(&mut self, pose: &Pose) {
        *self = Self::from_pose(pose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};

    #[test]
    fn test_uniform_holds_translation_column() {
        let pose = Pose::new(Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY, Vec3::splat(0.5));
        let uniform = PoseUniform::from_pose(&pose);

        assert_eq!(uniform.model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(uniform.model[0][0], 0.5);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 64);
    }

    #[test]
    fn test_scene_node_copies_pose() {
        let mut node = Pose::IDENTITY;
        let pose = Pose::from_position(Vec3::new(0.0, -1.0, 0.0));
        node.apply_pose(&pose);
        assert_eq!(node, pose);
    }
}
