use std::f32::consts::FRAC_1_SQRT_2;

use crate::{
    mat3::Mat3,
    vector::{Vec2, Vec3},
};

impl Vec2 {
    pub fn rotate_90_ccw(&self) -> Self {
        Self::new(-self.y(), self.x())
    }

    pub fn rotate_90_cw(&self) -> Self {
        Self::new(self.y(), -self.x())
    }

    pub fn rotate_45_ccw(&self) -> Self {
        let (x, y) = (self.x(), self.y());
        Self::new(
            FRAC_1_SQRT_2 * x - FRAC_1_SQRT_2 * y,
            FRAC_1_SQRT_2 * y + FRAC_1_SQRT_2 * x,
        )
    }

    pub fn rotate_45_cw(&self) -> Self {
        let (x, y) = (self.x(), self.y());
        Self::new(
            FRAC_1_SQRT_2 * x + FRAC_1_SQRT_2 * y,
            FRAC_1_SQRT_2 * y - FRAC_1_SQRT_2 * x,
        )
    }
}

impl Vec3 {
    /// Treats `self` as Euler angles in radians and composes
    /// `Ry(y) * Rx(x) * Rz(z)`, so the z rotation is applied first.
    pub fn to_rotation_matrix(&self) -> Mat3 {
        Mat3::rotation(self.y(), Vec3::Y)
            * Mat3::rotation(self.x(), Vec3::X)
            * Mat3::rotation(self.z(), Vec3::Z)
    }

    /// Inverse of [`Vec3::to_rotation_matrix`]: `Rz(-z) * Rx(-x) * Ry(-y)`.
    pub fn to_inverse_rotation_matrix(&self) -> Mat3 {
        Mat3::rotation(-self.z(), Vec3::Z)
            * Mat3::rotation(-self.x(), Vec3::X)
            * Mat3::rotation(-self.y(), Vec3::Y)
    }
}
