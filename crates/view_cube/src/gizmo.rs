use glam::{Quat, UVec2, Vec2, Vec3};
use overlay::{
    FixedOverlay, GpuResources, HostCamera, HostRenderer, LabelTextures, OrbitControls,
};
use settings::ViewCubeOptions;
use tracing::{debug, info};

use crate::{
    animator::OrientationAnimator,
    geometry::CubeModel,
    hit_test::{apply_hover, pick},
    region::Region,
    ViewCubeError,
};

/// Pointer position relative to the canvas, top-left origin, y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub offset: Vec2,
    /// Canvas size in the same units as `offset`.
    pub canvas: UVec2,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32, canvas: UVec2) -> Self {
        Self {
            offset: Vec2::new(x, y),
            canvas,
        }
    }
}

/// Where the animation pivot comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PivotSource {
    /// The world origin.
    Origin,
    /// The orbit controller's target, re-read once per frame.
    Controls(Vec3),
}

/// The view cube overlay: mirrors the host camera and turns it toward the
/// face, edge or corner the user clicks.
///
/// Host objects are borrowed per call rather than held, so the gizmo never
/// outlives or aliases them.
#[derive(Debug)]
pub struct ViewCubeGizmo {
    overlay: FixedOverlay,
    cube: CubeModel,
    animator: OrientationAnimator,
    options: ViewCubeOptions,
    pivot: PivotSource,
    hovered: Option<Region>,
}

impl ViewCubeGizmo {
    /// Validates `options` and builds the cube with the host's resources.
    pub fn attach_to<R>(resources: &mut R, options: ViewCubeOptions) -> Result<Self, ViewCubeError>
    where
        R: GpuResources + LabelTextures + ?Sized,
    {
        options.validate()?;
        let cube = CubeModel::build(resources, &options)?;
        info!(
            placement = options.pos.label(),
            dimension = options.dimension,
            primitives = cube.group().len(),
            "view cube attached"
        );
        Ok(Self {
            overlay: FixedOverlay::new(options.pos, options.dimension),
            cube,
            animator: OrientationAnimator::new(options.turn_rate),
            options,
            pivot: PivotSource::Origin,
            hovered: None,
        })
    }

    pub fn options(&self) -> &ViewCubeOptions {
        &self.options
    }

    pub fn overlay(&self) -> &FixedOverlay {
        &self.overlay
    }

    pub fn cube(&self) -> &CubeModel {
        &self.cube
    }

    pub fn animator(&self) -> &OrientationAnimator {
        &self.animator
    }

    pub fn hovered(&self) -> Option<Region> {
        self.hovered
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Point the next animation will orbit around.
    pub fn pivot(&self) -> Vec3 {
        match self.pivot {
            PivotSource::Origin => Vec3::ZERO,
            PivotSource::Controls(target) => target,
        }
    }

    /// Follows `controls`' target as the animation pivot, or the world origin
    /// when `None`. The target is then refreshed by every [`Self::update`]
    /// that is handed the controller.
    pub fn set_pivot_source(&mut self, controls: Option<&dyn OrbitControls>) {
        self.pivot = match controls {
            Some(controls) => PivotSource::Controls(controls.target()),
            None => PivotSource::Origin,
        };
        debug!(pivot = ?self.pivot(), "pivot source changed");
    }

    /// Per-frame step: advances a running animation, then mirrors the camera.
    pub fn update(
        &mut self,
        delta_seconds: f32,
        camera: &mut dyn HostCamera,
        controls: Option<&mut dyn OrbitControls>,
    ) {
        if let (PivotSource::Controls(_), Some(controls)) = (self.pivot, controls.as_deref()) {
            self.pivot = PivotSource::Controls(controls.target());
        }
        self.animator.tick(delta_seconds, camera, controls);
        self.sync_orientation(camera.orientation());
    }

    /// Turns the cube so it shows the world as seen from `camera_orientation`.
    pub fn sync_orientation(&mut self, camera_orientation: Quat) {
        self.cube.set_rotation(camera_orientation.inverse());
    }

    /// Draws the cube into its corner. Call after the main scene render.
    pub fn render_overlay<R: HostRenderer + ?Sized>(&self, renderer: &mut R) {
        self.overlay.render(renderer, self.cube.group());
    }

    fn region_under(&self, event: PointerEvent) -> Option<Option<Region>> {
        let ndc = self.overlay.pointer_ndc(event.offset, event.canvas)?;
        Some(pick(ndc, self.overlay.camera(), self.cube.group()))
    }

    /// Updates hover highlighting. Pointers outside the overlay are ignored.
    pub fn on_pointer_move(&mut self, event: PointerEvent) -> Option<Region> {
        let region = self.region_under(event)?;
        self.set_hovered(region);
        region
    }

    /// Starts an animation toward the clicked region, redirecting any
    /// animation already running. Returns the region that was hit.
    pub fn on_pointer_click(
        &mut self,
        event: PointerEvent,
        camera: &dyn HostCamera,
    ) -> Option<Region> {
        let region = self.region_under(event).flatten()?;
        debug!(%region, "view cube clicked");
        self.animator.start_to(region, camera, self.pivot());
        Some(region)
    }

    /// Starts an animation toward an arbitrary orientation.
    pub fn fly_to(&mut self, target: Quat, camera: &dyn HostCamera) {
        self.animator.fly_to(target, camera, self.pivot());
    }

    /// Clears hover highlighting, e.g. when the pointer leaves the canvas.
    pub fn clear_hover(&mut self) {
        self.set_hovered(None);
    }

    fn set_hovered(&mut self, region: Option<Region>) {
        let (base, hover) = (self.cube.face_color(), self.options.hover_color);
        apply_hover(self.cube.group_mut(), region, base, hover);
        self.hovered = region;
    }

    /// Releases every GPU resource the cube holds.
    pub fn dispose<R: GpuResources + ?Sized>(self, resources: &mut R) {
        let primitives = self.cube.group().len();
        self.cube.dispose(resources);
        info!(primitives, "view cube disposed");
    }
}
