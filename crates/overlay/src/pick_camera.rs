use glam::{Mat4, Vec2, Vec3};

/// Ray in world space. `direction` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// Maps the ray through `matrix`; pass a world-to-local inverse to get a
    /// local-space ray. Distances are preserved for rigid transforms.
    pub fn transformed(&self, matrix: &Mat4) -> Ray {
        Ray {
            origin: matrix.transform_point3(self.origin),
            direction: matrix.transform_vector3(self.direction),
        }
    }
}

/// Orthographic camera dedicated to an overlay, decoupled from the host camera.
///
/// Sits on +Z looking down -Z with a square frustum of `half_extent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickCamera {
    pub half_extent: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl Default for PickCamera {
    fn default() -> Self {
        Self {
            half_extent: 2.0,
            near: 0.0,
            far: 4.0,
            position: Vec3::new(0.0, 0.0, 2.0),
        }
    }
}

impl PickCamera {
    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        let h = self.half_extent;
        Mat4::orthographic_rh_gl(-h, h, -h, h, self.near, self.far)
    }

    pub fn view_projection(&self) -> [[f32; 4]; 4] {
        (self.projection() * self.view()).to_cols_array_2d()
    }

    /// Ray through `ndc`, starting on the near plane.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let origin = Vec3::new(
            self.position.x + ndc.x * self.half_extent,
            self.position.y + ndc.y * self.half_extent,
            self.position.z - self.near,
        );
        Ray::new(origin, Vec3::NEG_Z)
    }
}
