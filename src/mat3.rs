use std::ops::Mul;

use crate::{norm::Normed, vector::Vec3};

/// A 3x3 matrix, stored column-major (`data[col][row]`).
///
/// Only what the Euler angle helpers on `Vec3` need: axis-angle rotations,
/// products and the transpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    data: [[f32; 3]; 3],
}

impl Mat3 {
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        c0r0: f32, c1r0: f32, c2r0: f32,
        c0r1: f32, c1r1: f32, c2r1: f32,
        c0r2: f32, c1r2: f32, c2r2: f32,
    ) -> Self {
        Self::from_cols([
            [c0r0, c0r1, c0r2],
            [c1r0, c1r1, c1r2],
            [c2r0, c2r1, c2r2],
        ])
    }

    pub const fn from_cols(data: [[f32; 3]; 3]) -> Self {
        Self { data }
    }

    #[rustfmt::skip]
    pub const fn identity() -> Self {
        Self::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    /// Right-handed rotation of `angle` radians around `axis`.
    ///
    /// `axis` does not have to be normalised. A zero angle returns the exact
    /// identity.
    pub fn rotation(angle: f32, axis: Vec3) -> Self {
        if angle == 0.0 {
            return Self::identity();
        }

        let axis = axis.normalise();
        let (ux, uy, uz) = (axis.x(), axis.y(), axis.z());
        let sin = angle.sin();
        let cos = angle.cos();
        let one_m_cos = 1.0 - cos;

        Self::new(
            ux * ux * one_m_cos + cos,
            ux * uy * one_m_cos - uz * sin,
            ux * uz * one_m_cos + uy * sin,
            //
            ux * uy * one_m_cos + uz * sin,
            uy * uy * one_m_cos + cos,
            uy * uz * one_m_cos - ux * sin,
            //
            ux * uz * one_m_cos - uy * sin,
            uy * uz * one_m_cos + ux * sin,
            uz * uz * one_m_cos + cos,
        )
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.data.get(col)?.get(row).copied()
    }

    pub fn transpose(&self) -> Self {
        let mut data = [[0.0; 3]; 3];
        for (col_idx, col) in self.data.iter().enumerate() {
            for (row_idx, value) in col.iter().enumerate() {
                data[row_idx][col_idx] = *value;
            }
        }
        Self::from_cols(data)
    }
}

impl From<[[f32; 3]; 3]> for Mat3 {
    fn from(data: [[f32; 3]; 3]) -> Self {
        Self::from_cols(data)
    }
}

impl From<Mat3> for [[f32; 3]; 3] {
    fn from(value: Mat3) -> Self {
        value.data
    }
}

impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut data = [[0.0; 3]; 3];

        for (col_idx, col) in data.iter_mut().enumerate() {
            for (row_idx, value) in col.iter_mut().enumerate() {
                *value = (0..3)
                    .map(|idx| self.data[idx][row_idx] * rhs.data[col_idx][idx])
                    .sum();
            }
        }

        Self::from_cols(data)
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        let v = rhs.unpack();
        let row = |row_idx: usize| -> f32 {
            (0..3).map(|idx| self.data[idx][row_idx] * v[idx]).sum()
        };

        Vec3::new(row(0), row(1), row(2))
    }
}
