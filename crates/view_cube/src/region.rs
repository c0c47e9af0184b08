use std::{fmt, str::FromStr};

use crate::ViewCubeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Face,
    Edge,
    Corner,
}

/// One of the 26 hit-testable areas of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    // Faces
    Top,
    Front,
    Right,
    Back,
    Left,
    Bottom,
    // Top rim
    TopFrontEdge,
    TopRightEdge,
    TopBackEdge,
    TopLeftEdge,
    // Side seams
    FrontRightEdge,
    BackRightEdge,
    BackLeftEdge,
    FrontLeftEdge,
    // Bottom rim
    BottomFrontEdge,
    BottomRightEdge,
    BottomBackEdge,
    BottomLeftEdge,
    // Corners
    TopFrontRightCorner,
    TopBackRightCorner,
    TopBackLeftCorner,
    TopFrontLeftCorner,
    BottomFrontRightCorner,
    BottomBackRightCorner,
    BottomBackLeftCorner,
    BottomFrontLeftCorner,
}

impl Region {
    /// Every region, ordered by [`Region::id`].
    pub const ALL: [Region; 26] = [
        Region::Top,
        Region::Front,
        Region::Right,
        Region::Back,
        Region::Left,
        Region::Bottom,
        Region::TopFrontEdge,
        Region::TopRightEdge,
        Region::TopBackEdge,
        Region::TopLeftEdge,
        Region::FrontRightEdge,
        Region::BackRightEdge,
        Region::BackLeftEdge,
        Region::FrontLeftEdge,
        Region::BottomFrontEdge,
        Region::BottomRightEdge,
        Region::BottomBackEdge,
        Region::BottomLeftEdge,
        Region::TopFrontRightCorner,
        Region::TopBackRightCorner,
        Region::TopBackLeftCorner,
        Region::TopFrontLeftCorner,
        Region::BottomFrontRightCorner,
        Region::BottomBackRightCorner,
        Region::BottomBackLeftCorner,
        Region::BottomFrontLeftCorner,
    ];

    /// Stable numeric identifier, `1..=26`.
    pub fn id(self) -> u8 {
        self as u8 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::Top => "TOP",
            Region::Front => "FRONT",
            Region::Right => "RIGHT",
            Region::Back => "BACK",
            Region::Left => "LEFT",
            Region::Bottom => "BOTTOM",
            Region::TopFrontEdge => "TOP_FRONT_EDGE",
            Region::TopRightEdge => "TOP_RIGHT_EDGE",
            Region::TopBackEdge => "TOP_BACK_EDGE",
            Region::TopLeftEdge => "TOP_LEFT_EDGE",
            Region::FrontRightEdge => "FRONT_RIGHT_EDGE",
            Region::BackRightEdge => "BACK_RIGHT_EDGE",
            Region::BackLeftEdge => "BACK_LEFT_EDGE",
            Region::FrontLeftEdge => "FRONT_LEFT_EDGE",
            Region::BottomFrontEdge => "BOTTOM_FRONT_EDGE",
            Region::BottomRightEdge => "BOTTOM_RIGHT_EDGE",
            Region::BottomBackEdge => "BOTTOM_BACK_EDGE",
            Region::BottomLeftEdge => "BOTTOM_LEFT_EDGE",
            Region::TopFrontRightCorner => "TOP_FRONT_RIGHT_CORNER",
            Region::TopBackRightCorner => "TOP_BACK_RIGHT_CORNER",
            Region::TopBackLeftCorner => "TOP_BACK_LEFT_CORNER",
            Region::TopFrontLeftCorner => "TOP_FRONT_LEFT_CORNER",
            Region::BottomFrontRightCorner => "BOTTOM_FRONT_RIGHT_CORNER",
            Region::BottomBackRightCorner => "BOTTOM_BACK_RIGHT_CORNER",
            Region::BottomBackLeftCorner => "BOTTOM_BACK_LEFT_CORNER",
            Region::BottomFrontLeftCorner => "BOTTOM_FRONT_LEFT_CORNER",
        }
    }

    pub fn kind(self) -> RegionKind {
        match self.id() {
            1..=6 => RegionKind::Face,
            7..=18 => RegionKind::Edge,
            _ => RegionKind::Corner,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Region {
    type Error = ViewCubeError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        id.checked_sub(1)
            .and_then(|index| Region::ALL.get(index as usize).copied())
            .ok_or_else(|| ViewCubeError::InvalidRegion(id.to_string()))
    }
}

/// Accepts either the upper-snake name or the numeric id.
impl FromStr for Region {
    type Err = ViewCubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(region) = Region::ALL
            .iter()
            .copied()
            .find(|region| region.name().eq_ignore_ascii_case(trimmed))
        {
            return Ok(region);
        }
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(|id| Region::try_from(id).ok())
            .ok_or_else(|| ViewCubeError::InvalidRegion(s.to_string()))
    }
}
