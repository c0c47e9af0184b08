//! Procedural cube made of independently pickable quads.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Mat4, Quat, Vec3};
use overlay::{
    GpuResources, LabelTextures, MaterialDesc, Primitive, PrimitiveGroup, ResourceError, Rgb,
    Shape,
};
use settings::{FaceNames, ViewCubeOptions};
use tracing::debug;

use crate::region::Region;

/// Corner assemblies in build order; the last four sit in the flipped bottom set.
const CORNERS: [Region; 8] = [
    Region::TopFrontRightCorner,
    Region::TopBackRightCorner,
    Region::TopBackLeftCorner,
    Region::TopFrontLeftCorner,
    Region::BottomBackRightCorner,
    Region::BottomFrontRightCorner,
    Region::BottomFrontLeftCorner,
    Region::BottomBackLeftCorner,
];

/// Rim edges in build order. The bottom flip swaps front and back.
const RIM_EDGES: [Region; 8] = [
    Region::TopFrontEdge,
    Region::TopRightEdge,
    Region::TopBackEdge,
    Region::TopLeftEdge,
    Region::BottomBackEdge,
    Region::BottomRightEdge,
    Region::BottomFrontEdge,
    Region::BottomLeftEdge,
];

const SIDE_EDGES: [Region; 4] = [
    Region::FrontRightEdge,
    Region::BackRightEdge,
    Region::BackLeftEdge,
    Region::FrontLeftEdge,
];

/// Size of the cube and its border strips, in pick-camera units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeDimensions {
    pub size: f32,
    pub border: f32,
}

impl CubeDimensions {
    pub fn face_size(&self) -> f32 {
        self.size - 2.0 * self.border
    }

    fn offset(&self) -> f32 {
        self.size * 0.5
    }

    fn border_offset(&self) -> f32 {
        self.offset() - self.border * 0.5
    }
}

/// Quad placement: translate to `position` after rotating by `angle` about `axis`.
fn quad_transform(position: Vec3, axis: Vec3, angle: f32) -> Mat4 {
    Mat4::from_rotation_translation(Quat::from_axis_angle(axis, angle), position)
}

/// Rotation applied to the `index`-th copy of an assembly.
fn replica_rotation(index: usize, flip_bottom: bool) -> Mat4 {
    let turn = Mat4::from_rotation_y((index % 4) as f32 * FRAC_PI_2);
    if flip_bottom && index >= 4 {
        Mat4::from_rotation_x(PI) * turn
    } else {
        turn
    }
}

fn face_quads(dims: CubeDimensions) -> [Mat4; 6] {
    let o = dims.offset();
    [
        quad_transform(Vec3::new(0.0, 0.0, o), Vec3::Y, 0.0),
        quad_transform(Vec3::new(o, 0.0, 0.0), Vec3::Y, FRAC_PI_2),
        quad_transform(Vec3::new(0.0, 0.0, -o), Vec3::Y, PI),
        quad_transform(Vec3::new(-o, 0.0, 0.0), Vec3::Y, 3.0 * FRAC_PI_2),
        quad_transform(Vec3::new(0.0, o, 0.0), Vec3::X, -FRAC_PI_2),
        quad_transform(Vec3::new(0.0, -o, 0.0), Vec3::X, FRAC_PI_2),
    ]
}

/// Three `border`-sized squares meeting at the top front right corner.
fn corner_quads(dims: CubeDimensions) -> [Mat4; 3] {
    let (o, bo) = (dims.offset(), dims.border_offset());
    [
        quad_transform(Vec3::new(bo, bo, o), Vec3::Y, 0.0),
        quad_transform(Vec3::new(o, bo, bo), Vec3::Y, FRAC_PI_2),
        quad_transform(Vec3::new(bo, o, bo), Vec3::X, -FRAC_PI_2),
    ]
}

/// Strips along the top front rim.
fn rim_edge_quads(dims: CubeDimensions) -> [Mat4; 2] {
    let (o, bo) = (dims.offset(), dims.border_offset());
    [
        quad_transform(Vec3::new(0.0, bo, o), Vec3::Y, 0.0),
        quad_transform(Vec3::new(0.0, o, bo), Vec3::X, -FRAC_PI_2),
    ]
}

/// Strips along the front right seam.
fn side_edge_quads(dims: CubeDimensions) -> [Mat4; 2] {
    let (o, bo) = (dims.offset(), dims.border_offset());
    [
        quad_transform(Vec3::new(bo, 0.0, o), Vec3::Y, 0.0),
        quad_transform(Vec3::new(o, 0.0, bo), Vec3::Y, FRAC_PI_2),
    ]
}

/// Face regions in build order, each with its label text.
fn labeled_faces(names: &FaceNames) -> [(Region, &str); 6] {
    [
        (Region::Front, names.front.as_str()),
        (Region::Right, names.right.as_str()),
        (Region::Back, names.back.as_str()),
        (Region::Left, names.left.as_str()),
        (Region::Top, names.top.as_str()),
        (Region::Bottom, names.bottom.as_str()),
    ]
}

/// The built cube: 26 named regions plus an optional unnamed outline.
#[derive(Debug)]
pub struct CubeModel {
    group: PrimitiveGroup<Region>,
    dims: CubeDimensions,
    face_color: Rgb,
}

impl CubeModel {
    /// Allocates every primitive of the cube. On failure, whatever was
    /// already allocated is released before the error is returned.
    pub fn build<R>(resources: &mut R, options: &ViewCubeOptions) -> Result<Self, ResourceError>
    where
        R: GpuResources + LabelTextures + ?Sized,
    {
        let dims = CubeDimensions {
            size: options.cube_size,
            border: options.border,
        };
        let mut group = PrimitiveGroup::new();
        match populate(resources, &mut group, dims, options) {
            Ok(()) => {
                debug!(primitives = group.len(), "view cube built");
                Ok(Self {
                    group,
                    dims,
                    face_color: options.face_color,
                })
            }
            Err(err) => {
                group.release(resources);
                Err(err)
            }
        }
    }

    pub fn group(&self) -> &PrimitiveGroup<Region> {
        &self.group
    }

    pub fn group_mut(&mut self) -> &mut PrimitiveGroup<Region> {
        &mut self.group
    }

    pub fn dimensions(&self) -> CubeDimensions {
        self.dims
    }

    /// Resting color of every named primitive.
    pub fn face_color(&self) -> Rgb {
        self.face_color
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.group.set_rotation(rotation);
    }

    pub fn primitives_named(&self, region: Region) -> impl Iterator<Item = &Primitive<Region>> {
        self.group
            .primitives()
            .iter()
            .filter(move |p| p.name == Some(region))
    }

    /// Releases every geometry, material and label texture.
    pub fn dispose<R: GpuResources + ?Sized>(mut self, resources: &mut R) {
        self.group.release(resources);
    }
}

fn populate<R>(
    resources: &mut R,
    group: &mut PrimitiveGroup<Region>,
    dims: CubeDimensions,
    options: &ViewCubeOptions,
) -> Result<(), ResourceError>
where
    R: GpuResources + LabelTextures + ?Sized,
{
    let color = options.face_color;
    let face = dims.face_size();
    let border = dims.border;
    let style = options.face_label_style();

    let faces = labeled_faces(&options.face_names);
    for ((region, name), transform) in faces.into_iter().zip(face_quads(dims)) {
        let texture = resources.create_label(name, &style)?;
        let shape = Shape::Quad {
            width: face,
            height: face,
        };
        let desc = MaterialDesc::textured(color, texture);
        push(resources, group, region, shape, transform, desc)?;
    }

    let corner = corner_quads(dims);
    for (index, region) in CORNERS.into_iter().enumerate() {
        let rotation = replica_rotation(index, true);
        for local in corner {
            let shape = Shape::Quad {
                width: border,
                height: border,
            };
            push(resources, group, region, shape, rotation * local, MaterialDesc::basic(color))?;
        }
    }

    let rim = rim_edge_quads(dims);
    for (index, region) in RIM_EDGES.into_iter().enumerate() {
        let rotation = replica_rotation(index, true);
        for local in rim {
            let shape = Shape::Quad {
                width: face,
                height: border,
            };
            push(resources, group, region, shape, rotation * local, MaterialDesc::basic(color))?;
        }
    }

    let side = side_edge_quads(dims);
    for (index, region) in SIDE_EDGES.into_iter().enumerate() {
        let rotation = replica_rotation(index, false);
        for local in side {
            let shape = Shape::Quad {
                width: border,
                height: face,
            };
            push(resources, group, region, shape, rotation * local, MaterialDesc::basic(color))?;
        }
    }

    if options.outline {
        group.push(Primitive::create(
            resources,
            None,
            Shape::BoxEdges { size: dims.size },
            Mat4::IDENTITY,
            MaterialDesc::line(options.outline_color),
        )?);
    }
    Ok(())
}

/// Creates a named primitive. A label texture in `desc` is released if the
/// primitive cannot be created.
fn push<R: GpuResources + ?Sized>(
    resources: &mut R,
    group: &mut PrimitiveGroup<Region>,
    region: Region,
    shape: Shape,
    transform: Mat4,
    desc: MaterialDesc,
) -> Result<(), ResourceError> {
    let texture = desc.texture;
    match Primitive::create(resources, Some(region), shape, transform, desc) {
        Ok(primitive) => {
            group.push(primitive);
            Ok(())
        }
        Err(err) => {
            if let Some(texture) = texture {
                resources.release_texture(texture);
            }
            Err(err)
        }
    }
}
