use std::fmt;

use crate::{
    mat3::Mat3,
    vector::{Vec2, Vec3, Vec4},
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub trait Components {
    fn components(&self) -> Vec<f32>;
}

impl Components for Vec2 {
    fn components(&self) -> Vec<f32> {
        self.unpack().to_vec()
    }
}

impl Components for Vec3 {
    fn components(&self) -> Vec<f32> {
        self.unpack().to_vec()
    }
}

impl Components for Vec4 {
    fn components(&self) -> Vec<f32> {
        self.unpack().to_vec()
    }
}

impl Components for Mat3 {
    fn components(&self) -> Vec<f32> {
        <[[f32; 3]; 3]>::from(*self).iter().flatten().copied().collect()
    }
}

#[derive(Debug, Clone)]
pub struct VecCmp {
    error_margin: f32,
}

impl VecCmp {
    pub const DEFAULT: Self = Self { error_margin: 1e-5 };

    pub fn eq_margin<T>(&self, is: &T, should: &T, error_margin: f32)
    where
        T: Components + fmt::Debug,
    {
        for (idx, (v1, v2)) in is
            .components()
            .into_iter()
            .zip(should.components())
            .enumerate()
        {
            let diff_abs = (v1 - v2).abs();

            assert!(
                diff_abs <= error_margin,
                "is: {:?} should: {:?} (+- {:?}) @ {}",
                is,
                should,
                error_margin,
                idx
            );
        }
    }

    pub fn eq<T>(&self, is: &T, should: &T)
    where
        T: Components + fmt::Debug,
    {
        self.eq_margin(is, should, self.error_margin)
    }
}

impl Default for VecCmp {
    fn default() -> Self {
        Self::DEFAULT
    }
}
