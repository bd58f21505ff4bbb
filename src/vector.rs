use std::{
    convert::TryFrom,
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use crate::error::VectorError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    x: f32,
    y: f32,
    z: f32,
}

/// A four component vector.
///
/// `w` is the homogeneous coordinate. Every constructor that does not take
/// it explicitly sets it to `1.0`, which marks the vector as a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec4 {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    Vec4::new(x, y, z, w)
}

impl Vec2 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn splat(value: f32) -> Self {
        Self::new(value, value)
    }

    pub const fn x(&self) -> f32 {
        self.x
    }

    pub const fn y(&self) -> f32 {
        self.y
    }

    pub fn min(&self) -> f32 {
        self.x.min(self.y)
    }

    pub fn max(&self) -> f32 {
        self.x.max(self.y)
    }
}

impl Vec3 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// `z` takes the value of `y`.
    pub const fn from_xy(x: f32, y: f32) -> Self {
        Self::new(x, y, y)
    }

    pub const fn splat(value: f32) -> Self {
        Self::from_xy(value, value)
    }

    pub const fn x(&self) -> f32 {
        self.x
    }

    pub const fn y(&self) -> f32 {
        self.y
    }

    pub const fn z(&self) -> f32 {
        self.z
    }

    pub fn min(&self) -> f32 {
        self.x.min(self.y).min(self.z)
    }

    pub fn max(&self) -> f32 {
        self.x.max(self.y).max(self.z)
    }
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub const fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// `z` takes the value of `y`, `w` is `1.0`.
    pub const fn from_xy(x: f32, y: f32) -> Self {
        Self::from_xyz(x, y, y)
    }

    /// Sets `x`, `y` and `z` to `value`. `w` stays `1.0`.
    pub const fn splat(value: f32) -> Self {
        Self::from_xy(value, value)
    }

    pub const fn x(&self) -> f32 {
        self.x
    }

    pub const fn y(&self) -> f32 {
        self.y
    }

    pub const fn z(&self) -> f32 {
        self.z
    }

    pub const fn w(&self) -> f32 {
        self.w
    }

    pub fn min(&self) -> f32 {
        self.x.min(self.y).min(self.z).min(self.w)
    }

    pub fn max(&self) -> f32 {
        self.x.max(self.y).max(self.z).max(self.w)
    }
}

// `min` and `max` fold left to right with `f32::min`/`f32::max`, which
// return the other operand when one side is NaN.

macro_rules! impl_vec {
    ( $( $vec:ident [$len:literal] { $( $field:ident ),+ } )+ ) => {
        $(
            impl $vec {
                /// Copies the components out in declaration order.
                pub const fn unpack(&self) -> [f32; $len] {
                    [ $( self.$field ),+ ]
                }

                pub fn scale(self, factor: f32) -> Self {
                    Self { $( $field: self.$field * factor ),+ }
                }

                pub fn component_mul(self, rhs: Self) -> Self {
                    Self { $( $field: self.$field * rhs.$field ),+ }
                }

                pub fn component_div(self, rhs: Self) -> Self {
                    Self { $( $field: self.$field / rhs.$field ),+ }
                }
            }

            impl Add for $vec {
                type Output = Self;

                fn add(self, rhs: Self) -> Self::Output {
                    Self { $( $field: self.$field + rhs.$field ),+ }
                }
            }

            impl Sub for $vec {
                type Output = Self;

                fn sub(self, rhs: Self) -> Self::Output {
                    Self { $( $field: self.$field - rhs.$field ),+ }
                }
            }

            impl Mul for $vec {
                type Output = Self;

                fn mul(self, rhs: Self) -> Self::Output {
                    self.component_mul(rhs)
                }
            }

            impl Mul<f32> for $vec {
                type Output = Self;

                fn mul(self, rhs: f32) -> Self::Output {
                    self.scale(rhs)
                }
            }

            impl Mul<$vec> for f32 {
                type Output = $vec;

                fn mul(self, rhs: $vec) -> Self::Output {
                    rhs.scale(self)
                }
            }

            impl Div for $vec {
                type Output = Self;

                fn div(self, rhs: Self) -> Self::Output {
                    self.component_div(rhs)
                }
            }

            impl Div<f32> for $vec {
                type Output = Self;

                fn div(self, rhs: f32) -> Self::Output {
                    Self { $( $field: self.$field / rhs ),+ }
                }
            }

            impl Neg for $vec {
                type Output = Self;

                fn neg(self) -> Self::Output {
                    Self { $( $field: -self.$field ),+ }
                }
            }

            impl From<[f32; $len]> for $vec {
                fn from(data: [f32; $len]) -> Self {
                    let [ $( $field ),+ ] = data;
                    Self { $( $field ),+ }
                }
            }

            impl From<$vec> for [f32; $len] {
                fn from(value: $vec) -> Self {
                    value.unpack()
                }
            }

            impl<'a> TryFrom<&'a [f32]> for $vec {
                type Error = VectorError;

                fn try_from(slice: &'a [f32]) -> Result<Self, Self::Error> {
                    let data = <[f32; $len]>::try_from(slice).map_err(|_| {
                        VectorError::LengthMismatch {
                            expected: $len,
                            actual: slice.len(),
                        }
                    })?;
                    Ok(data.into())
                }
            }
        )+
    };
}

impl_vec! {
    Vec2 [2] { x, y }
    Vec3 [3] { x, y, z }
    Vec4 [4] { x, y, z, w }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:?}, {:?}, {:?}, w={:?})",
            self.x, self.y, self.z, self.w
        )
    }
}
