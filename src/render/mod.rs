//! Rendering-side data
//!
//! The camera model, CPU geometry for planes and feature points, and the seam
//! through which hosts copy stabilized poses onto their own scene nodes.

pub mod camera;
pub mod mesh;
pub mod node;

pub use camera::{ArCamera, ScreenPoint};
pub use mesh::{point_vertices, PlaneMesh, PointVertex, Vertex, MAX_PLANE_SEGMENTS};
pub use node::{PoseUniform, SceneNode};
