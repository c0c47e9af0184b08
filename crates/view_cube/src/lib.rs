//! Interactive view cube: a corner overlay mirroring the camera orientation
//! that turns the camera toward whichever face, edge or corner is clicked.

mod animator;
mod geometry;
mod gizmo;
#[cfg(feature = "winit")]
mod input;
mod orientation;
mod region;

use overlay::ResourceError;
use settings::SettingsError;
use thiserror::Error;

pub use animator::{AnimationState, OrientationAnimator, CONVERGENCE_EPSILON};
pub use geometry::{CubeDimensions, CubeModel};
pub use gizmo::{PointerEvent, ViewCubeGizmo};
pub use hit_test::{apply_hover, pick};
#[cfg(feature = "winit")]
pub use input::{PointerAction, PointerTracker};
pub use orientation::{angle_between, rotate_towards, EulerAngles, RotationOrder};
pub use region::{Region, RegionKind};

#[derive(Debug, Error)]
pub enum ViewCubeError {
    #[error("invalid face, edge or corner identifier `{0}`")]
    InvalidRegion(String),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
