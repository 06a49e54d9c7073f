/// Transform - the active 2D coordinate transform.
///
/// Stored as a 4x4 matrix so backends can upload it unchanged.

use glam::{Mat4, Vec3};

/// Coordinate transform applied to every vertex position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Transform {
    pub const IDENTITY: Transform = Transform { matrix: Mat4::IDENTITY };

    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Compose a translation after the current transform
    pub fn translate(&mut self, x: f32, y: f32) {
        self.matrix = Mat4::from_translation(Vec3::new(x, y, 0.0)) * self.matrix;
    }

    /// Compose a rotation (radians, around the Z axis) after the current transform
    pub fn rotate(&mut self, theta: f32) {
        self.matrix = Mat4::from_rotation_z(theta) * self.matrix;
    }

    /// Compose a scale after the current transform
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.matrix = Mat4::from_scale(Vec3::new(sx, sy, 1.0)) * self.matrix;
    }

    /// Transform a point
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let p = self.matrix.transform_point3(Vec3::new(x, y, 0.0));
        (p.x, p.y)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
