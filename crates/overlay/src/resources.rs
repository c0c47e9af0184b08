use serde::{Deserialize, Serialize};

use crate::{scene::Shape, ResourceError, Rgb};

/// Host-side geometry buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryHandle(pub u64);

/// Host-side material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub u64);

/// Host-side 2D texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    /// Unlit surface, optionally textured.
    Basic,
    /// Unlit lines.
    Line,
    /// Camera-facing textured quad.
    Sprite,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDesc {
    pub kind: MaterialKind,
    pub color: Rgb,
    pub texture: Option<TextureHandle>,
    /// Take the color from per-vertex attributes instead of `color`.
    pub vertex_colors: bool,
}

impl MaterialDesc {
    pub fn basic(color: Rgb) -> Self {
        Self {
            kind: MaterialKind::Basic,
            color,
            texture: None,
            vertex_colors: false,
        }
    }

    pub fn textured(color: Rgb, texture: TextureHandle) -> Self {
        Self {
            texture: Some(texture),
            ..Self::basic(color)
        }
    }

    pub fn line(color: Rgb) -> Self {
        Self {
            kind: MaterialKind::Line,
            ..Self::basic(color)
        }
    }

    pub fn vertex_colored_line() -> Self {
        Self {
            vertex_colors: true,
            ..Self::line(Rgb::WHITE)
        }
    }

    pub fn sprite(color: Rgb, texture: TextureHandle) -> Self {
        Self {
            kind: MaterialKind::Sprite,
            color,
            texture: Some(texture),
            vertex_colors: false,
        }
    }
}

/// Style used when rasterizing a text label into a texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub font: String,
    pub font_size: u32,
    pub width: u32,
    pub height: u32,
    /// RGBA (0.0 - 1.0)
    pub color: [f32; 4],
    /// RGBA (0.0 - 1.0)
    pub background: [f32; 4],
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font: "Helvetica".to_string(),
            font_size: 30,
            width: 200,
            height: 200,
            color: [0.0, 0.0, 0.0, 1.0],
            background: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// GPU resource allocation offered by the host renderer.
///
/// Every handle handed out must eventually come back through the matching
/// `release_*` call.
pub trait GpuResources {
    fn create_geometry(&mut self, shape: &Shape) -> Result<GeometryHandle, ResourceError>;
    fn create_material(&mut self, desc: &MaterialDesc) -> Result<MaterialHandle, ResourceError>;
    fn release_geometry(&mut self, handle: GeometryHandle);
    fn release_material(&mut self, handle: MaterialHandle);
    fn release_texture(&mut self, handle: TextureHandle);
}

/// Rasterizes text into a texture owned by the caller, released through
/// [`GpuResources::release_texture`].
pub trait LabelTextures {
    fn create_label(&mut self, text: &str, style: &LabelStyle)
        -> Result<TextureHandle, ResourceError>;
}
