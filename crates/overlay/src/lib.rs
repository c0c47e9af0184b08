//! Fixed-position viewport overlays: host capabilities, placement math, the
//! pick camera and the primitive model shared by every gizmo.

mod host;
mod pass;
mod pick_camera;
mod region;
mod resources;
mod scene;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use host::{ClearColor, HostCamera, HostRenderer, OrbitControls};
pub use pass::FixedOverlay;
pub use pick_camera::{PickCamera, Ray};
pub use region::{pointer_to_ndc, rect_for, Placement, PointerRect, ViewportRect};
pub use resources::{
    GeometryHandle, GpuResources, LabelStyle, LabelTextures, MaterialDesc, MaterialHandle,
    MaterialKind, TextureHandle,
};
pub use scene::{DrawItem, Hit, OverlayScene, Primitive, PrimitiveGroup, Shape};

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("geometry allocation failed: {0}")]
    Geometry(String),
    #[error("material allocation failed: {0}")]
    Material(String),
    #[error("texture allocation failed: {0}")]
    Texture(String),
}

/// 24-bit RGB color stored as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x000000);
    pub const WHITE: Rgb = Rgb(0xffffff);

    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Linear-agnostic RGB (0.0 - 1.0)
    pub fn to_f32_array(self) -> [f32; 3] {
        [
            self.r() as f32 / 255.0,
            self.g() as f32 / 255.0,
            self.b() as f32 / 255.0,
        ]
    }

    pub fn from_f32_array(rgb: [f32; 3]) -> Self {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::from_rgb(channel(rgb[0]), channel(rgb[1]), channel(rgb[2]))
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_channels() {
        let color = Rgb::from_hex(0xf2f5ce);
        assert_eq!((color.r(), color.g(), color.b()), (0xf2, 0xf5, 0xce));
        assert_eq!(Rgb::from_rgb(0xf2, 0xf5, 0xce), color);
        assert_eq!(Rgb::from_f32_array(color.to_f32_array()), color);
        assert_eq!(Rgb::from_hex(0xff12_3456), Rgb(0x12_3456));
    }
}
