mod convert;
mod error;
mod mat3;
mod norm;
mod parse;
mod rotation;
mod vector;

#[cfg(feature = "serde-serialize")]
mod serde;

#[cfg(test)]
mod test_util;

pub use crate::error::VectorError;
pub use crate::mat3::Mat3;
pub use crate::norm::Normed;
pub use crate::vector::{vec2, vec3, vec4, Vec2, Vec3, Vec4};

pub mod prelude {
    pub use crate::error::VectorError;
    pub use crate::mat3::Mat3;
    pub use crate::norm::Normed;
    pub use crate::vector::{vec2, vec3, vec4, Vec2, Vec3, Vec4};
}
