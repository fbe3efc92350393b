use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::ar::{FeaturePointCloud, PlaneAnchor};

/// Upper bound on grid subdivisions per side for plane meshes.
pub const MAX_PLANE_SEGMENTS: u32 = 256;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
}

/// CPU-side geometry for a detected plane, in world space.
#[derive(Debug, Clone)]
pub struct PlaneMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl PlaneMesh {
    /// Subdivided quad covering the anchor's extent, lying flat in its XZ plane.
    pub fn from_anchor(anchor: &PlaneAnchor, segments: u32) -> Self {
        let segments = segments.clamp(1, MAX_PLANE_SEGMENTS);
        let side = segments as usize;
        let normal = anchor.normal().to_array();
        let mut vertices = Vec::with_capacity((side + 1) * (side + 1));
        let mut indices = Vec::with_capacity(side * side * 6);

        for row in 0..=segments {
            let v = row as f32 / segments as f32 - 0.5;

            for col in 0..=segments {
                let u = col as f32 / segments as f32 - 0.5;
                let local = anchor.center + Vec3::new(u * anchor.extent.x, 0.0, v * anchor.extent.y);

                vertices.push(Vertex {
                    position: anchor.transform.transform_point(local).to_array(),
                    normal,
                });
            }
        }

        for row in 0..segments {
            for col in 0..segments {
                let curr_row = row * (segments + 1);
                let next_row = (row + 1) * (segments + 1);

                indices.push(curr_row + col);
                indices.push(next_row + col);
                indices.push(next_row + col + 1);

                indices.push(curr_row + col);
                indices.push(next_row + col + 1);
                indices.push(curr_row + col + 1);
            }
        }

        Self { vertices, indices }
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

pub fn point_vertices(cloud: &FeaturePointCloud) -> Vec<PointVertex> {
    cloud
        .positions()
        .map(|p| PointVertex {
            position: p.to_array(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ar::RawFeaturePoint;
    use approx::assert_relative_eq;
    use glam::Vec2;

    #[test]
    fn test_plane_mesh_counts() {
        let anchor = PlaneAnchor::horizontal("floor", Vec3::ZERO, Vec2::new(2.0, 1.0));
        let mesh = PlaneMesh::from_anchor(&anchor, 4);

        assert_eq!(mesh.vertices.len(), 25);
        assert_eq!(mesh.index_count(), 4 * 4 * 6);
        assert_eq!(mesh.vertex_bytes().len(), 25 * std::mem::size_of::<Vertex>());
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn test_plane_mesh_lies_on_anchor() {
        let anchor = PlaneAnchor::horizontal("table", Vec3::new(1.0, -0.7, -2.0), Vec2::new(2.0, 1.0));
        let mesh = PlaneMesh::from_anchor(&anchor, 1);

        let first = mesh.vertices[0].position;
        let last = mesh.vertices[3].position;
        assert_relative_eq!(first[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(first[2], -2.5, epsilon = 1e-6);
        assert_relative_eq!(last[0], 2.0, epsilon = 1e-6);
        assert_relative_eq!(last[2], -1.5, epsilon = 1e-6);
        assert!(mesh.vertices.iter().all(|v| (v.position[1] + 0.7).abs() < 1e-6));
        assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_zero_segments_clamped() {
        let anchor = PlaneAnchor::horizontal("tiny", Vec3::ZERO, Vec2::ONE);
        let mesh = PlaneMesh::from_anchor(&anchor, 0);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.index_count(), 6);
    }

    #[test]
    fn test_segments_capped() {
        let anchor = PlaneAnchor::horizontal("huge", Vec3::ZERO, Vec2::ONE);
        let mesh = PlaneMesh::from_anchor(&anchor, u32::MAX);

        let side = MAX_PLANE_SEGMENTS as usize + 1;
        assert_eq!(mesh.vertices.len(), side * side);
        assert_eq!(mesh.indices.len(), (side - 1) * (side - 1) * 6);
    }

    #[test]
    fn test_point_vertices() {
        let mut cloud = FeaturePointCloud::new();
        cloud.set_points([
            RawFeaturePoint { id: 7, x: 1.0, y: 2.0, z: 3.0 },
            RawFeaturePoint { id: 2, x: -1.0, y: 0.0, z: 0.5 },
        ]);

        let vertices = point_vertices(&cloud);
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].position, [-1.0, 0.0, 0.5]);
        assert_eq!(bytemuck::cast_slice::<_, u8>(&vertices).len(), 24);
    }
}
