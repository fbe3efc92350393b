use glam::{Mat4, Vec3};
use magnetic_pose::ar::{
    AnchorEvent, AnchorEventKind, FeaturePointCloud, PlaneAnchor, PlaneRegistry, RawFeaturePoint,
    RawPlaneAnchor,
};
use magnetic_pose::render::{point_vertices, ArCamera, PlaneMesh, PoseUniform, ScreenPoint};
use magnetic_pose::stabilizer::{FrameContext, PoseStabilizer, StabilizerConfig};

const FRAMES: u32 = 120;
const TABLE_HEIGHT: f32 = -0.7;

/// Deterministic tracking noise in [-amplitude, amplitude].
fn jitter(seed: u32, amplitude: f32) -> f32 {
    ((seed as f32 * 12.9898).sin() * 43758.547).fract() * amplitude
}

/// Session-side view of the table as it is refined over time.
fn detected_table(frame: u32) -> RawPlaneAnchor {
    let offset = Vec3::new(jitter(frame, 0.02), jitter(frame + 7, 0.005), jitter(frame + 13, 0.02));
    RawPlaneAnchor {
        id: format!("table-{}", frame / 10),
        transform: Mat4::from_translation(Vec3::new(0.0, TABLE_HEIGHT, -1.0) + offset).to_cols_array(),
        center: [0.0, 0.0, 0.0],
        extent: [1.2, 0.8],
        vertical: false,
    }
}

fn camera_at(frame: u32) -> ArCamera {
    let angle = frame as f32 * 0.01;
    let eye = Vec3::new(angle.sin() * 0.5, 0.0, angle.cos() * 0.5 - 0.2);
    ArCamera::new(1170.0, 2532.0, 0.01, 1000.0).looking_at(eye, Vec3::new(0.0, TABLE_HEIGHT, -1.0))
}

fn main() {
    env_logger::init();

    let mut planes = PlaneRegistry::new();
    let mut points = FeaturePointCloud::new();
    let mut object = PoseStabilizer::new(StabilizerConfig::new(8));

    for frame in 0..FRAMES {
        let camera = camera_at(frame);

        if frame % 10 == 0 {
            let mut raw = detected_table(frame);
            if frame == 50 {
                raw.transform[13] = f32::NAN;
            }

            match PlaneAnchor::try_from(raw) {
                Ok(anchor) => {
                    let event = AnchorEvent::new(AnchorEventKind::Add, vec![anchor]);
                    planes.apply(&event);
                    object.on_anchor_event(&event, &camera);
                }
                Err(err) => log::warn!("frame {}: discarded anchor: {}", frame, err),
            }
        }

        points.set_points((0..32).map(|i| RawFeaturePoint {
            id: u64::from(i),
            x: jitter(frame * 32 + i, 0.6),
            y: TABLE_HEIGHT + jitter(frame * 32 + i + 1, 0.01),
            z: -1.0 + jitter(frame * 32 + i + 2, 0.4),
        }));

        object.update(&FrameContext::new(&camera, &planes), Some(ScreenPoint::CENTER));

        if frame % 20 == 0 {
            let pose = object.pose();
            log::info!(
                "frame {:3}: position {} yaw {:.3} scale {:.3} ({} samples, {} planes, {} points)",
                frame,
                pose.position,
                pose.yaw(),
                pose.scale.x,
                object.history().len(),
                planes.len(),
                point_vertices(&points).len(),
            );
        }
    }

    let triangles: u32 = planes
        .iter()
        .map(|plane| PlaneMesh::from_anchor(plane, 8).index_count() / 3)
        .sum();
    let uniform = PoseUniform::from_pose(&object.pose());

    log::info!(
        "final position {} after {} frames; {} plane triangles, model translation {:?}",
        object.world_position(),
        FRAMES,
        triangles,
        uniform.model[3],
    );
}
