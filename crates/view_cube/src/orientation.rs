//! Canonical camera orientations for every cube region, plus the quaternion
//! helpers the animator steps with.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use glam::{Mat3, Quat, Vec3};

use crate::region::Region;

/// Order in which the three axis rotations of [`EulerAngles`] compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationOrder {
    /// `Rx * Ry * Rz`
    #[default]
    Xyz,
    /// `Ry * Rx * Rz`
    Yxz,
}

/// Intrinsic Euler rotation in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub order: RotationOrder,
}

impl EulerAngles {
    pub const fn xyz(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            order: RotationOrder::Xyz,
        }
    }

    pub const fn yxz(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            order: RotationOrder::Yxz,
        }
    }

    pub fn to_quat(self) -> Quat {
        let qx = Quat::from_rotation_x(self.x);
        let qy = Quat::from_rotation_y(self.y);
        let qz = Quat::from_rotation_z(self.z);
        let q = match self.order {
            RotationOrder::Xyz => qx * qy * qz,
            RotationOrder::Yxz => qy * qx * qz,
        };
        q.normalize()
    }

    /// Decomposes `q` into angles composing in `order`.
    ///
    /// At gimbal lock the `z` angle is folded into the other free axis.
    pub fn from_quat(q: Quat, order: RotationOrder) -> Self {
        let m = Mat3::from_quat(q.normalize());
        // Row/column naming of a row-major 3x3; glam stores columns.
        let (m11, m12, m13) = (m.x_axis.x, m.y_axis.x, m.z_axis.x);
        let (m21, m22, m23) = (m.x_axis.y, m.y_axis.y, m.z_axis.y);
        let (m31, m32, m33) = (m.x_axis.z, m.y_axis.z, m.z_axis.z);
        const LOCK: f32 = 0.999_999_9;

        match order {
            RotationOrder::Xyz => {
                let y = m13.clamp(-1.0, 1.0).asin();
                let (x, z) = if m13.abs() < LOCK {
                    ((-m23).atan2(m33), (-m12).atan2(m11))
                } else {
                    (m32.atan2(m22), 0.0)
                };
                Self::xyz(x, y, z)
            }
            RotationOrder::Yxz => {
                let x = (-m23.clamp(-1.0, 1.0)).asin();
                let (y, z) = if m23.abs() < LOCK {
                    (m13.atan2(m33), m21.atan2(m22))
                } else {
                    ((-m31).atan2(m11), 0.0)
                };
                Self::yxz(x, y, z)
            }
        }
    }
}

impl Region {
    /// Rotation the camera should end up with, relative to world space, when
    /// this region is selected.
    pub fn orientation_target(self) -> EulerAngles {
        use Region::*;
        match self {
            Front => EulerAngles::xyz(0.0, 0.0, 0.0),
            Right => EulerAngles::xyz(0.0, FRAC_PI_2, 0.0),
            Back => EulerAngles::xyz(0.0, PI, 0.0),
            Left => EulerAngles::xyz(0.0, -FRAC_PI_2, 0.0),
            Top => EulerAngles::xyz(-FRAC_PI_2, 0.0, 0.0),
            Bottom => EulerAngles::xyz(FRAC_PI_2, 0.0, 0.0),

            // Rim edges tilt first, then turn about the world vertical.
            TopFrontEdge => EulerAngles::xyz(-FRAC_PI_4, 0.0, 0.0),
            TopRightEdge => EulerAngles::yxz(-FRAC_PI_4, FRAC_PI_2, 0.0),
            TopBackEdge => EulerAngles::yxz(-FRAC_PI_4, PI, 0.0),
            TopLeftEdge => EulerAngles::yxz(-FRAC_PI_4, -FRAC_PI_2, 0.0),
            BottomFrontEdge => EulerAngles::xyz(FRAC_PI_4, 0.0, 0.0),
            BottomRightEdge => EulerAngles::yxz(FRAC_PI_4, FRAC_PI_2, 0.0),
            BottomBackEdge => EulerAngles::yxz(FRAC_PI_4, PI, 0.0),
            BottomLeftEdge => EulerAngles::yxz(FRAC_PI_4, -FRAC_PI_2, 0.0),

            FrontRightEdge => EulerAngles::xyz(0.0, FRAC_PI_4, 0.0),
            BackRightEdge => EulerAngles::xyz(0.0, 3.0 * FRAC_PI_4, 0.0),
            BackLeftEdge => EulerAngles::xyz(0.0, -3.0 * FRAC_PI_4, 0.0),
            FrontLeftEdge => EulerAngles::xyz(0.0, -FRAC_PI_4, 0.0),

            TopFrontRightCorner => EulerAngles::xyz(-FRAC_PI_4, -7.0 * FRAC_PI_4, 0.0),
            TopBackRightCorner => EulerAngles::xyz(FRAC_PI_4, -5.0 * FRAC_PI_4, 0.0),
            TopBackLeftCorner => EulerAngles::xyz(FRAC_PI_4, -3.0 * FRAC_PI_4, 0.0),
            TopFrontLeftCorner => EulerAngles::xyz(-FRAC_PI_4, -FRAC_PI_4, 0.0),
            BottomFrontRightCorner => EulerAngles::xyz(FRAC_PI_4, -7.0 * FRAC_PI_4, 0.0),
            BottomBackRightCorner => EulerAngles::xyz(-FRAC_PI_4, -5.0 * FRAC_PI_4, 0.0),
            BottomBackLeftCorner => EulerAngles::xyz(-FRAC_PI_4, -3.0 * FRAC_PI_4, 0.0),
            BottomFrontLeftCorner => EulerAngles::xyz(FRAC_PI_4, -FRAC_PI_4, 0.0),
        }
    }

    pub fn target_quat(self) -> Quat {
        self.orientation_target().to_quat()
    }

    /// Unit direction from the pivot to the camera once this view is reached.
    pub fn view_direction(self) -> Vec3 {
        self.target_quat() * Vec3::Z
    }
}

/// Rotation angle in radians taking `a` onto `b`, in `[0, π]`.
///
/// Uses `atan2` rather than `acos` so angles near zero keep their precision.
pub fn angle_between(a: Quat, b: Quat) -> f32 {
    let delta = a.conjugate() * b;
    2.0 * delta.xyz().length().atan2(delta.w.abs())
}

/// Rotates `from` toward `to` by at most `max_angle` radians along the
/// shortest arc. Returns `to` exactly once it is within reach.
pub fn rotate_towards(from: Quat, to: Quat, max_angle: f32) -> Quat {
    let angle = angle_between(from, to);
    if angle <= max_angle {
        return to;
    }
    from.slerp(to, max_angle.max(0.0) / angle)
}
