use crate::vector::{Vec2, Vec3};

/// Euclidean length and normalisation.
///
/// Only implemented for `Vec2` and `Vec3`. Normalising a zero-length vector
/// divides by zero and yields NaN components, it is not treated as an error.
pub trait Normed: Sized {
    fn length2(&self) -> f32;

    fn length(&self) -> f32 {
        self.length2().sqrt()
    }

    fn normalise(self) -> Self;

    /// Scales `self` to `length` along its current direction.
    fn normalise_to(self, length: f32) -> Self;
}

macro_rules! impl_normed {
    ( $( $vec:ident { $( $field:ident ),+ } )+ ) => {
        $(
            impl Normed for $vec {
                fn length2(&self) -> f32 {
                    0.0 $( + self.$field() * self.$field() )+
                }

                fn normalise(self) -> Self {
                    let n = self.length();
                    if n == 0.0 {
                        log::trace!("Normalising zero-length vector: {}", self);
                    }
                    self / n
                }

                fn normalise_to(self, length: f32) -> Self {
                    let n = self.length();
                    if n == 0.0 {
                        log::trace!("Normalising zero-length vector: {}", self);
                    }
                    self * length / n
                }
            }

            impl $vec {
                pub fn dot(&self, rhs: &Self) -> f32 {
                    0.0 $( + self.$field() * rhs.$field() )+
                }
            }
        )+
    };
}

impl_normed! {
    Vec2 { x, y }
    Vec3 { x, y, z }
}

impl Vec3 {
    /// Right-handed cross product.
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::new(
            self.y() * rhs.z() - self.z() * rhs.y(),
            self.z() * rhs.x() - self.x() * rhs.z(),
            self.x() * rhs.y() - self.y() * rhs.x(),
        )
    }
}
