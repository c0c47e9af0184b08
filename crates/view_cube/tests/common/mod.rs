#![allow(dead_code)]

use std::collections::HashSet;

use glam::{Quat, UVec2, Vec3};
use overlay::{
    ClearColor, GeometryHandle, GpuResources, HostCamera, HostRenderer, LabelStyle, LabelTextures,
    MaterialDesc, MaterialHandle, OrbitControls, OverlayScene, PickCamera, ResourceError, Shape,
    TextureHandle, ViewportRect,
};

/// Counts live host resources and can be told to fail an allocation.
#[derive(Debug, Default)]
pub struct ResourceCounter {
    next: u64,
    pub geometries: HashSet<u64>,
    pub materials: HashSet<u64>,
    pub textures: HashSet<u64>,
    /// Fail the material allocation after this many succeeded.
    pub fail_material_after: Option<usize>,
    materials_created: usize,
}

impl ResourceCounter {
    /// Counter whose material allocation fails once `succeeded` went through.
    pub fn failing_material_after(succeeded: usize) -> Self {
        Self {
            fail_material_after: Some(succeeded),
            ..Default::default()
        }
    }

    pub fn outstanding(&self) -> usize {
        self.geometries.len() + self.materials.len() + self.textures.len()
    }

    fn id(&mut self) -> u64 {
        self.next += 1;
        self.next
    }
}

impl GpuResources for ResourceCounter {
    fn create_geometry(&mut self, _shape: &Shape) -> Result<GeometryHandle, ResourceError> {
        let id = self.id();
        self.geometries.insert(id);
        Ok(GeometryHandle(id))
    }

    fn create_material(&mut self, _desc: &MaterialDesc) -> Result<MaterialHandle, ResourceError> {
        if self.fail_material_after == Some(self.materials_created) {
            return Err(ResourceError::Material("out of memory".to_string()));
        }
        self.materials_created += 1;
        let id = self.id();
        self.materials.insert(id);
        Ok(MaterialHandle(id))
    }

    fn release_geometry(&mut self, handle: GeometryHandle) {
        assert!(self.geometries.remove(&handle.0), "double release of {handle:?}");
    }

    fn release_material(&mut self, handle: MaterialHandle) {
        assert!(self.materials.remove(&handle.0), "double release of {handle:?}");
    }

    fn release_texture(&mut self, handle: TextureHandle) {
        assert!(self.textures.remove(&handle.0), "double release of {handle:?}");
    }
}

impl LabelTextures for ResourceCounter {
    fn create_label(
        &mut self,
        _text: &str,
        _style: &LabelStyle,
    ) -> Result<TextureHandle, ResourceError> {
        let id = self.id();
        self.textures.insert(id);
        Ok(TextureHandle(id))
    }
}

#[derive(Debug, Default)]
pub struct MockCamera {
    pub position: Vec3,
    pub orientation: Quat,
    pub projection_updates: usize,
}

impl MockCamera {
    /// Camera `distance` away from `pivot`, looking at it from the front.
    pub fn facing_front(pivot: Vec3, distance: f32) -> Self {
        Self {
            position: pivot + Vec3::Z * distance,
            orientation: Quat::IDENTITY,
            projection_updates: 0,
        }
    }
}

impl HostCamera for MockCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn orientation(&self) -> Quat {
        self.orientation
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }

    fn update_projection_matrix(&mut self) {
        self.projection_updates += 1;
    }
}

#[derive(Debug, Default)]
pub struct MockControls {
    pub target: Vec3,
    pub updates: usize,
}

impl OrbitControls for MockControls {
    fn target(&self) -> Vec3 {
        self.target
    }

    fn update(&mut self) {
        self.updates += 1;
    }
}

/// Renderer that records the state each overlay draw saw.
#[derive(Debug)]
pub struct MockRenderer {
    pub canvas: UVec2,
    pub viewport: ViewportRect,
    pub scissor: ViewportRect,
    pub scissor_test: bool,
    pub clear: ClearColor,
    pub auto_clear: bool,
    pub depth_clears: usize,
    /// Viewport and item count of each `render` call.
    pub draws: Vec<(ViewportRect, usize)>,
}

impl MockRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        let full = ViewportRect::new(0, 0, width, height);
        Self {
            canvas: UVec2::new(width, height),
            viewport: full,
            scissor: full,
            scissor_test: false,
            clear: ClearColor::default(),
            auto_clear: true,
            depth_clears: 0,
            draws: Vec::new(),
        }
    }
}

impl HostRenderer for MockRenderer {
    fn canvas_size(&self) -> UVec2 {
        self.canvas
    }
    fn viewport(&self) -> ViewportRect {
        self.viewport
    }
    fn set_viewport(&mut self, rect: ViewportRect) {
        self.viewport = rect;
    }
    fn scissor(&self) -> ViewportRect {
        self.scissor
    }
    fn set_scissor(&mut self, rect: ViewportRect) {
        self.scissor = rect;
    }
    fn scissor_test(&self) -> bool {
        self.scissor_test
    }
    fn set_scissor_test(&mut self, enabled: bool) {
        self.scissor_test = enabled;
    }
    fn clear_color(&self) -> ClearColor {
        self.clear
    }
    fn set_clear_color(&mut self, clear: ClearColor) {
        self.clear = clear;
    }
    fn auto_clear(&self) -> bool {
        self.auto_clear
    }
    fn set_auto_clear(&mut self, enabled: bool) {
        self.auto_clear = enabled;
    }
    fn clear_depth(&mut self) {
        self.depth_clears += 1;
    }
    fn render(&mut self, scene: &dyn OverlayScene, _camera: &PickCamera) {
        let mut items = 0;
        scene.visit(&mut |_| items += 1);
        self.draws.push((self.viewport, items));
    }
}
