use crate::ar::PlaneRegistry;
use crate::render::ArCamera;

/// Per-frame inputs owned by the host application.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub camera: &'a ArCamera,
    pub planes: &'a PlaneRegistry,
}

impl<'a> FrameContext<'a> {
    pub fn new(camera: &'a ArCamera, planes: &'a PlaneRegistry) -> Self {
        Self { camera, planes }
    }
}
