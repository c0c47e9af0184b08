use overlay::{LabelStyle, Placement, Rgb};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const FACE_COLOR: Rgb = Rgb::from_hex(0xdddddd);
pub const HOVER_COLOR: Rgb = Rgb::from_hex(0xf2f5ce);
pub const OUTLINE_COLOR: Rgb = Rgb::from_hex(0xcccccc);

/// One full revolution per second.
pub const DEFAULT_TURN_RATE: f32 = std::f32::consts::TAU;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("overlay dimension must be at least one pixel")]
    ZeroDimension,
    #[error("cube size must be positive, got {0}")]
    InvalidCubeSize(f32),
    #[error("border {border} must lie strictly between 0 and half the cube size {size}")]
    InvalidBorder { border: f32, size: f32 },
    #[error("turn rate must be finite and non-negative, got {0}")]
    InvalidTurnRate(f32),
    #[error("face name for `{0}` is empty")]
    EmptyFaceName(&'static str),
    #[error("invalid options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Text shown on each cube face, overridable for localization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceNames {
    pub top: String,
    pub front: String,
    pub right: String,
    pub back: String,
    pub left: String,
    pub bottom: String,
}

impl Default for FaceNames {
    fn default() -> Self {
        Self {
            top: "TOP".to_string(),
            front: "FRONT".to_string(),
            right: "RIGHT".to_string(),
            back: "BACK".to_string(),
            left: "LEFT".to_string(),
            bottom: "BOTTOM".to_string(),
        }
    }
}

impl FaceNames {
    fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("top", &self.top),
            ("front", &self.front),
            ("right", &self.right),
            ("back", &self.back),
            ("left", &self.left),
            ("bottom", &self.bottom),
        ]
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        match self.entries().into_iter().find(|(_, text)| text.trim().is_empty()) {
            Some((face, _)) => Err(SettingsError::EmptyFaceName(face)),
            None => Ok(()),
        }
    }
}

/// Options for the view cube gizmo. Missing JSON keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewCubeOptions {
    /// Viewport corner the cube is pinned to
    pub pos: Placement,
    /// Side length of the square overlay, in pixels
    pub dimension: u32,
    pub face_color: Rgb,
    /// Color of the face, edge or corner under the pointer
    pub hover_color: Rgb,
    pub outline_color: Rgb,
    /// Draw the decorative wireframe around the cube
    pub outline: bool,
    pub face_names: FaceNames,
    /// Radians per second while animating toward a clicked view
    pub turn_rate: f32,
    /// Edge length of the cube in pick-camera units
    pub cube_size: f32,
    /// Width of the edge and corner strips in pick-camera units
    pub border: f32,
}

impl Default for ViewCubeOptions {
    fn default() -> Self {
        Self {
            pos: Placement::TopRight,
            dimension: 150,
            face_color: FACE_COLOR,
            hover_color: HOVER_COLOR,
            outline_color: OUTLINE_COLOR,
            outline: true,
            face_names: FaceNames::default(),
            turn_rate: DEFAULT_TURN_RATE,
            cube_size: 2.0,
            border: 0.2,
        }
    }
}

impl ViewCubeOptions {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.dimension == 0 {
            return Err(SettingsError::ZeroDimension);
        }
        if !(self.cube_size.is_finite() && self.cube_size > 0.0) {
            return Err(SettingsError::InvalidCubeSize(self.cube_size));
        }
        if !(self.border > 0.0 && self.border < self.cube_size * 0.5) {
            return Err(SettingsError::InvalidBorder {
                border: self.border,
                size: self.cube_size,
            });
        }
        // Zero is accepted: the animation simply never arrives.
        if !(self.turn_rate.is_finite() && self.turn_rate >= 0.0) {
            return Err(SettingsError::InvalidTurnRate(self.turn_rate));
        }
        self.face_names.validate()
    }

    /// Label style for the face textures.
    pub fn face_label_style(&self) -> LabelStyle {
        LabelStyle {
            font: "Arial Narrow, sans-serif".to_string(),
            font_size: 60,
            ..LabelStyle::default()
        }
    }
}

/// Options for the axes gizmo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesOptions {
    pub pos: Placement,
    /// Side length of the square overlay, in pixels
    pub size: u32,
    pub has_z_axis: bool,
}

impl Default for AxesOptions {
    fn default() -> Self {
        Self {
            pos: Placement::BottomLeft,
            size: 100,
            has_z_axis: true,
        }
    }
}

impl AxesOptions {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.size == 0 {
            return Err(SettingsError::ZeroDimension);
        }
        Ok(())
    }

    pub fn label_style(&self) -> LabelStyle {
        LabelStyle::default()
    }
}
