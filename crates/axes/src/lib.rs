//! Axes overlay: colored X/Y/Z segments with text labels, pinned to a
//! viewport corner and turned with the host camera. Not interactive.

use glam::{Mat4, Quat, Vec3};
use overlay::{
    FixedOverlay, GpuResources, HostCamera, HostRenderer, LabelTextures, MaterialDesc, Primitive,
    PrimitiveGroup, ResourceError, Rgb, Shape,
};
use settings::{AxesOptions, SettingsError};
use thiserror::Error;
use tracing::{debug, info};

/// Length of each axis segment.
const AXIS_LENGTH: f32 = 2.0;
/// Distance of each label from the segments' common origin.
const LABEL_OFFSET: f32 = 2.5;
/// Where the three segments start.
const ORIGIN: Vec3 = Vec3::splat(-1.0);

#[derive(Debug, Error)]
pub enum AxesError {
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisDirection {
    X,
    Y,
    Z,
}

impl AxisDirection {
    pub const ALL: [AxisDirection; 3] = [AxisDirection::X, AxisDirection::Y, AxisDirection::Z];

    pub const fn label(self) -> &'static str {
        match self {
            AxisDirection::X => "X",
            AxisDirection::Y => "Y",
            AxisDirection::Z => "Z",
        }
    }

    pub fn vector(self) -> Vec3 {
        match self {
            AxisDirection::X => Vec3::X,
            AxisDirection::Y => Vec3::Y,
            AxisDirection::Z => Vec3::Z,
        }
    }

    /// Vertex colors at the start and end of the segment.
    pub const fn gradient(self) -> [[f32; 3]; 2] {
        match self {
            AxisDirection::X => [[1.0, 0.0, 0.0], [1.0, 0.6, 0.0]],
            AxisDirection::Y => [[0.0, 1.0, 0.0], [0.6, 1.0, 0.0]],
            AxisDirection::Z => [[0.0, 0.0, 1.0], [0.0, 0.6, 1.0]],
        }
    }

    /// Label position in overlay space, just past the end of the segment.
    pub fn label_position(self) -> Vec3 {
        ORIGIN + self.vector() * LABEL_OFFSET
    }
}

/// What a primitive of the axes overlay draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPart {
    Lines,
    Label(AxisDirection),
}

#[derive(Debug)]
pub struct AxesGizmo {
    overlay: FixedOverlay,
    group: PrimitiveGroup<AxisPart>,
    options: AxesOptions,
}

impl AxesGizmo {
    pub fn attach_to<R>(resources: &mut R, options: AxesOptions) -> Result<Self, AxesError>
    where
        R: GpuResources + LabelTextures + ?Sized,
    {
        options.validate()?;
        let mut group = PrimitiveGroup::new();
        if let Err(err) = populate(resources, &mut group, &options) {
            group.release(resources);
            return Err(err.into());
        }
        info!(
            placement = options.pos.label(),
            size = options.size,
            z_axis = options.has_z_axis,
            "axes gizmo attached"
        );
        Ok(Self {
            overlay: FixedOverlay::new(options.pos, options.size),
            group,
            options,
        })
    }

    pub fn options(&self) -> &AxesOptions {
        &self.options
    }

    pub fn overlay(&self) -> &FixedOverlay {
        &self.overlay
    }

    pub fn group(&self) -> &PrimitiveGroup<AxisPart> {
        &self.group
    }

    pub fn axes(&self) -> impl Iterator<Item = AxisDirection> {
        enabled_axes(self.options.has_z_axis)
    }

    /// Mirrors the host camera; call once per frame.
    pub fn update(&mut self, camera: &dyn HostCamera) {
        self.sync_orientation(camera.orientation());
    }

    pub fn sync_orientation(&mut self, camera_orientation: Quat) {
        self.group.set_rotation(camera_orientation.inverse());
    }

    pub fn render_overlay<R: HostRenderer + ?Sized>(&self, renderer: &mut R) {
        self.overlay.render(renderer, &self.group);
    }

    /// Paints the X and Y segments in solid colors. The Z segment keeps its
    /// gradient.
    ///
    /// Vertex colors live in the geometry, so the line geometry is
    /// reallocated; on failure the old geometry stays in place.
    pub fn set_line_colors<R: GpuResources + ?Sized>(
        &mut self,
        resources: &mut R,
        x: Rgb,
        y: Rgb,
    ) -> Result<(), AxesError> {
        let Some(lines) = self
            .group
            .primitives_mut()
            .iter_mut()
            .find(|primitive| primitive.name == Some(AxisPart::Lines))
        else {
            return Ok(());
        };
        let mut shape = lines.shape.clone();
        if let Shape::LineSegments { colors, .. } = &mut shape {
            colors[0..2].fill(x.to_f32_array());
            colors[2..4].fill(y.to_f32_array());
        }
        let geometry = resources.create_geometry(&shape)?;
        resources.release_geometry(lines.geometry);
        lines.geometry = geometry;
        lines.shape = shape;
        debug!(x = x.0, y = y.0, "axis line colors changed");
        Ok(())
    }

    /// Tints every axis label, the Z label included.
    pub fn set_text_color(&mut self, color: Rgb) {
        for primitive in self.group.primitives_mut() {
            if matches!(primitive.name, Some(AxisPart::Label(_))) {
                primitive.color = color;
            }
        }
    }

    pub fn dispose<R: GpuResources + ?Sized>(mut self, resources: &mut R) {
        self.group.release(resources);
        debug!("axes gizmo disposed");
    }
}

fn enabled_axes(has_z_axis: bool) -> impl Iterator<Item = AxisDirection> {
    AxisDirection::ALL
        .into_iter()
        .filter(move |axis| has_z_axis || *axis != AxisDirection::Z)
}

fn populate<R>(
    resources: &mut R,
    group: &mut PrimitiveGroup<AxisPart>,
    options: &AxesOptions,
) -> Result<(), ResourceError>
where
    R: GpuResources + LabelTextures + ?Sized,
{
    let axes: Vec<AxisDirection> = enabled_axes(options.has_z_axis).collect();

    let mut positions = Vec::with_capacity(axes.len() * 2);
    let mut colors = Vec::with_capacity(axes.len() * 2);
    for axis in &axes {
        positions.extend([Vec3::ZERO, axis.vector() * AXIS_LENGTH]);
        colors.extend(axis.gradient());
    }
    group.push(Primitive::create(
        resources,
        Some(AxisPart::Lines),
        Shape::LineSegments { positions, colors },
        Mat4::from_translation(ORIGIN),
        MaterialDesc::vertex_colored_line(),
    )?);

    let style = options.label_style();
    for axis in axes {
        let texture = resources.create_label(axis.label(), &style)?;
        let label = Primitive::create(
            resources,
            Some(AxisPart::Label(axis)),
            Shape::Sprite { size: 1.0 },
            Mat4::from_translation(axis.label_position()),
            MaterialDesc::sprite(Rgb::WHITE, texture),
        );
        match label {
            Ok(label) => group.push(label),
            Err(err) => {
                resources.release_texture(texture);
                return Err(err);
            }
        }
    }
    Ok(())
}
