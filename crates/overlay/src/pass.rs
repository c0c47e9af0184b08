use glam::{UVec2, Vec2};
use tracing::trace;

use crate::{
    host::{ClearColor, HostRenderer},
    pick_camera::PickCamera,
    region::{pointer_to_ndc, rect_for, Placement, PointerRect, ViewportRect},
    scene::OverlayScene,
};

/// Renderer state an overlay pass touches, captured so it can be put back.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SavedState {
    viewport: ViewportRect,
    scissor: ViewportRect,
    scissor_test: bool,
    clear_color: ClearColor,
    auto_clear: bool,
}

impl SavedState {
    fn capture<R: HostRenderer + ?Sized>(renderer: &R) -> Self {
        Self {
            viewport: renderer.viewport(),
            scissor: renderer.scissor(),
            scissor_test: renderer.scissor_test(),
            clear_color: renderer.clear_color(),
            auto_clear: renderer.auto_clear(),
        }
    }

    fn restore<R: HostRenderer + ?Sized>(self, renderer: &mut R) {
        renderer.set_viewport(self.viewport);
        renderer.set_scissor(self.scissor);
        renderer.set_scissor_test(self.scissor_test);
        renderer.set_clear_color(self.clear_color);
        renderer.set_auto_clear(self.auto_clear);
    }
}

/// A square overlay pinned to a viewport corner, with its own pick camera.
///
/// Gizmos compose this rather than re-implementing placement math.
#[derive(Debug, Clone)]
pub struct FixedOverlay {
    placement: Placement,
    dimension: u32,
    camera: PickCamera,
}

impl FixedOverlay {
    pub fn new(placement: Placement, dimension: u32) -> Self {
        Self {
            placement,
            dimension,
            camera: PickCamera::default(),
        }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    pub fn camera(&self) -> &PickCamera {
        &self.camera
    }

    pub fn viewport_rect(&self, canvas: UVec2) -> ViewportRect {
        rect_for(self.placement, self.dimension, canvas.x, canvas.y)
    }

    pub fn pointer_rect(&self, canvas: UVec2) -> PointerRect {
        self.viewport_rect(canvas).to_pointer_space(canvas.y)
    }

    /// NDC of `pointer` inside the overlay, or `None` when it falls outside.
    pub fn pointer_ndc(&self, pointer: Vec2, canvas: UVec2) -> Option<Vec2> {
        let rect = self.pointer_rect(canvas);
        rect.contains(pointer).then(|| pointer_to_ndc(pointer, &rect))
    }

    /// Draws `scene` into the overlay rectangle on top of whatever the host
    /// already rendered this frame. Viewport, scissor, clear color and
    /// auto-clear are restored afterwards.
    pub fn render<R: HostRenderer + ?Sized>(&self, renderer: &mut R, scene: &dyn OverlayScene) {
        let saved = SavedState::capture(renderer);
        let rect = self.viewport_rect(renderer.canvas_size());
        trace!(?rect, placement = self.placement.label(), "overlay pass");

        renderer.set_auto_clear(false);
        renderer.clear_depth();
        renderer.set_viewport(rect);
        renderer.set_scissor(rect);
        renderer.set_scissor_test(true);
        renderer.render(scene, &self.camera);

        saved.restore(renderer);
    }
}
