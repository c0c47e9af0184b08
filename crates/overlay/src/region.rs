//! Placement of a fixed-size overlay inside the render target.
//!
//! Render-target rectangles use a bottom-left origin with y growing upward.
//! Pointer positions arrive in element space: top-left origin, y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Viewport corner an overlay is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Placement {
    BottomLeft,
    TopLeft,
    #[default]
    TopRight,
    BottomRight,
}

impl Placement {
    pub const ALL: [Placement; 4] = [
        Placement::BottomLeft,
        Placement::TopLeft,
        Placement::TopRight,
        Placement::BottomRight,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Placement::BottomLeft => "bottom left",
            Placement::TopLeft => "top left",
            Placement::TopRight => "top right",
            Placement::BottomRight => "bottom right",
        }
    }

    const fn is_left(self) -> bool {
        matches!(self, Placement::BottomLeft | Placement::TopLeft)
    }

    const fn is_top(self) -> bool {
        matches!(self, Placement::TopLeft | Placement::TopRight)
    }
}

/// Rectangle in render-target pixels (bottom-left origin).
///
/// `x`/`y` are signed: an overlay larger than its viewport still anchors to
/// the requested corner and may start outside the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ViewportRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &ViewportRect) -> bool {
        let right = self.x as i64 + self.width as i64;
        let top = self.y as i64 + self.height as i64;
        other.x >= self.x
            && other.y >= self.y
            && other.x as i64 + other.width as i64 <= right
            && other.y as i64 + other.height as i64 <= top
    }

    /// The same rectangle expressed in pointer space for a canvas of
    /// `canvas_height` pixels.
    pub fn to_pointer_space(&self, canvas_height: u32) -> PointerRect {
        let top = self.y as f32 + self.height as f32;
        let min = Vec2::new(self.x as f32, canvas_height as f32 - top);
        PointerRect {
            min,
            max: min + Vec2::new(self.width as f32, self.height as f32),
        }
    }
}

/// Rectangle in pointer space (top-left origin, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl PointerRect {
    /// Inclusive on every border.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Pixel rectangle of a square overlay of `dimension` pixels anchored to
/// `placement` inside a `viewport_width` x `viewport_height` render target.
pub fn rect_for(
    placement: Placement,
    dimension: u32,
    viewport_width: u32,
    viewport_height: u32,
) -> ViewportRect {
    let dim = saturate(dimension);
    let x = if placement.is_left() {
        0
    } else {
        saturate(viewport_width).saturating_sub(dim)
    };
    let y = if placement.is_top() {
        saturate(viewport_height).saturating_sub(dim)
    } else {
        0
    };
    ViewportRect::new(x, y, dimension, dimension)
}

fn saturate(pixels: u32) -> i32 {
    i32::try_from(pixels).unwrap_or(i32::MAX)
}

/// Maps a pointer position into normalized device coordinates of the overlay.
///
/// Callers check [`PointerRect::contains`] first; positions outside the
/// rectangle map outside `[-1, 1]`.
pub fn pointer_to_ndc(pointer: Vec2, rect: &PointerRect) -> Vec2 {
    let size = rect.size().max(Vec2::splat(f32::EPSILON));
    let rel = (pointer - rect.min) / size;
    Vec2::new(rel.x * 2.0 - 1.0, -rel.y * 2.0 + 1.0)
}
