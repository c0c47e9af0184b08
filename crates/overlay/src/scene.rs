//! Retained primitives an overlay hands to the host renderer and raycasts against.

use glam::{Mat4, Quat, Vec3};

use crate::{
    pick_camera::Ray,
    resources::{GeometryHandle, GpuResources, MaterialDesc, MaterialHandle, TextureHandle},
    ResourceError, Rgb,
};

/// Geometry of a single primitive in its local space.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Plane centered at the origin, facing +Z.
    Quad { width: f32, height: f32 },
    /// Edge-only outline of an axis-aligned cube centered at the origin.
    BoxEdges { size: f32 },
    /// Independent segments: vertices `2i` and `2i + 1` form segment `i`.
    LineSegments {
        positions: Vec<Vec3>,
        /// Per-vertex RGB (0.0 - 1.0)
        colors: Vec<[f32; 3]>,
    },
    /// Camera-facing square.
    Sprite { size: f32 },
}

impl Shape {
    /// Distance along a local-space `ray` to the front side of this shape.
    ///
    /// Only quads are pickable; back faces are culled.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let Shape::Quad { width, height } = *self else {
            return None;
        };
        if ray.direction.z >= 0.0 {
            return None;
        }
        let distance = -ray.origin.z / ray.direction.z;
        if distance < 0.0 {
            return None;
        }
        let hit = ray.at(distance);
        let inside = hit.x.abs() <= width * 0.5 && hit.y.abs() <= height * 0.5;
        inside.then_some(distance)
    }
}

/// A drawable node with an optional identifier.
#[derive(Debug, Clone)]
pub struct Primitive<N> {
    pub name: Option<N>,
    pub shape: Shape,
    /// Transform relative to the owning group's root.
    pub transform: Mat4,
    pub geometry: GeometryHandle,
    pub material: MaterialHandle,
    pub texture: Option<TextureHandle>,
    pub color: Rgb,
}

impl<N> Primitive<N> {
    /// Allocates geometry and material for a new primitive.
    ///
    /// The texture (if any) changes owner: it is released with the primitive.
    pub fn create<R: GpuResources + ?Sized>(
        resources: &mut R,
        name: Option<N>,
        shape: Shape,
        transform: Mat4,
        material: MaterialDesc,
    ) -> Result<Self, ResourceError> {
        let geometry = resources.create_geometry(&shape)?;
        let material_handle = match resources.create_material(&material) {
            Ok(handle) => handle,
            Err(err) => {
                resources.release_geometry(geometry);
                return Err(err);
            }
        };
        Ok(Self {
            name,
            shape,
            transform,
            geometry,
            material: material_handle,
            texture: material.texture,
            color: material.color,
        })
    }

    pub fn release<R: GpuResources + ?Sized>(self, resources: &mut R) {
        resources.release_geometry(self.geometry);
        resources.release_material(self.material);
        if let Some(texture) = self.texture {
            resources.release_texture(texture);
        }
    }
}

/// Ray intersection against one primitive of a group.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a, N> {
    pub distance: f32,
    pub index: usize,
    pub primitive: &'a Primitive<N>,
}

/// Flat list of primitives sharing one root rotation.
#[derive(Debug, Clone)]
pub struct PrimitiveGroup<N> {
    rotation: Quat,
    primitives: Vec<Primitive<N>>,
}

impl<N> Default for PrimitiveGroup<N> {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
            primitives: Vec::new(),
        }
    }
}

impl<N> PrimitiveGroup<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, primitive: Primitive<N>) {
        self.primitives.push(primitive);
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
    }

    pub fn primitives(&self) -> &[Primitive<N>] {
        &self.primitives
    }

    pub fn primitives_mut(&mut self) -> &mut [Primitive<N>] {
        &mut self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn world_transform(&self, primitive: &Primitive<N>) -> Mat4 {
        Mat4::from_quat(self.rotation) * primitive.transform
    }

    /// All intersections of `ray` with the group, nearest first.
    pub fn raycast(&self, ray: &Ray) -> Vec<Hit<'_, N>> {
        let mut hits: Vec<Hit<'_, N>> = self
            .primitives
            .iter()
            .enumerate()
            .filter_map(|(index, primitive)| {
                let inverse = self.world_transform(primitive).inverse();
                let local = ray.transformed(&inverse);
                primitive.shape.intersect(&local).map(|distance| Hit {
                    distance,
                    index,
                    primitive,
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// Returns every primitive's resources to the host, leaving the group empty.
    pub fn release<R: GpuResources + ?Sized>(&mut self, resources: &mut R) {
        for primitive in self.primitives.drain(..) {
            primitive.release(resources);
        }
    }
}

/// One primitive as the host renderer sees it.
#[derive(Debug, Clone, Copy)]
pub struct DrawItem<'a> {
    pub shape: &'a Shape,
    pub transform: Mat4,
    pub geometry: GeometryHandle,
    pub material: MaterialHandle,
    pub texture: Option<TextureHandle>,
    pub color: Rgb,
}

/// Anything an overlay can submit to [`crate::HostRenderer::render`].
pub trait OverlayScene {
    fn visit(&self, f: &mut dyn FnMut(DrawItem<'_>));
}

impl<N> OverlayScene for PrimitiveGroup<N> {
    fn visit(&self, f: &mut dyn FnMut(DrawItem<'_>)) {
        for primitive in &self.primitives {
            f(DrawItem {
                shape: &primitive.shape,
                transform: self.world_transform(primitive),
                geometry: primitive.geometry,
                material: primitive.material,
                texture: primitive.texture,
                color: primitive.color,
            });
        }
    }
}
