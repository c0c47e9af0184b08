//! Capabilities the embedding application provides to its overlays.

use glam::{Quat, UVec2, Vec3};

use crate::{pick_camera::PickCamera, region::ViewportRect, scene::OverlayScene, Rgb};

/// The application's main camera.
pub trait HostCamera {
    fn position(&self) -> Vec3;
    fn orientation(&self) -> Quat;
    fn set_position(&mut self, position: Vec3);
    fn set_orientation(&mut self, orientation: Quat);
    /// Called after the overlay moved the camera directly.
    fn update_projection_matrix(&mut self);
}

/// Clear color plus alpha, as stored by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearColor {
    pub color: Rgb,
    pub alpha: f32,
}

impl Default for ClearColor {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            alpha: 1.0,
        }
    }
}

/// The application's renderer, as far as an overlay pass needs it.
pub trait HostRenderer {
    /// Size of the full render target in pixels.
    fn canvas_size(&self) -> UVec2;
    fn viewport(&self) -> ViewportRect;
    fn set_viewport(&mut self, rect: ViewportRect);
    fn scissor(&self) -> ViewportRect;
    fn set_scissor(&mut self, rect: ViewportRect);
    fn scissor_test(&self) -> bool;
    fn set_scissor_test(&mut self, enabled: bool);
    fn clear_color(&self) -> ClearColor;
    fn set_clear_color(&mut self, clear: ClearColor);
    fn auto_clear(&self) -> bool;
    fn set_auto_clear(&mut self, enabled: bool);
    fn clear_depth(&mut self);
    fn render(&mut self, scene: &dyn OverlayScene, camera: &PickCamera);
}

/// An orbit-style free camera controller driving the host camera.
pub trait OrbitControls {
    /// Point the controller orbits around.
    fn target(&self) -> Vec3;
    /// Re-derives the controller's bookkeeping after the camera was moved
    /// from outside.
    fn update(&mut self);
}
