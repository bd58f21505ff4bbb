//! Narrowing and widening between the vector arities.
//!
//! Narrowing drops the trailing component. Widening always takes the new
//! component from the caller; unlike the constructors there is no default.

use crate::vector::{Vec2, Vec3, Vec4};

impl Vec4 {
    pub const fn truncate(&self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }
}

impl Vec3 {
    pub const fn truncate(&self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    pub const fn extend(&self, w: f32) -> Vec4 {
        Vec4::new(self.x(), self.y(), self.z(), w)
    }
}

impl Vec2 {
    pub const fn extend(&self, z: f32) -> Vec3 {
        Vec3::new(self.x(), self.y(), z)
    }
}
