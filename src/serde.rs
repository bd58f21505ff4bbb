use std::fmt;

use ::serde::{
    de::{Error, SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{
    mat3::Mat3,
    vector::{Vec2, Vec3, Vec4},
};

fn serialize_components<S>(serializer: S, components: &[f32]) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(components.len()))?;
    for element in components {
        seq.serialize_element(element)?;
    }
    seq.end()
}

struct ComponentsVisitor<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for ComponentsVisitor<N> {
    type Value = [f32; N];

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of {} floats", N)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        if let Some(size_hint) = seq.size_hint() {
            if size_hint != N {
                return Err(A::Error::invalid_length(size_hint, &self));
            }
        }

        let mut data = [0.0; N];
        for (idx, slot) in data.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| A::Error::invalid_length(idx, &self))?;
        }

        if seq.next_element::<f32>()?.is_some() {
            return Err(A::Error::invalid_length(N + 1, &self));
        }

        Ok(data)
    }
}

macro_rules! impl_serde_vec {
    ( $( $vec:ident [$len:literal] )+ ) => {
        $(
            impl Serialize for $vec {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serialize_components(serializer, &self.unpack())
                }
            }

            impl<'de> Deserialize<'de> for $vec {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    deserializer
                        .deserialize_seq(ComponentsVisitor::<$len>)
                        .map(Self::from)
                }
            }
        )+
    };
}

impl_serde_vec! {
    Vec2 [2]
    Vec3 [3]
    Vec4 [4]
}

// column-major, same layout as the in-memory storage
impl Serialize for Mat3 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let data: [[f32; 3]; 3] = (*self).into();
        let flat: Vec<f32> = data.iter().flatten().copied().collect();
        serialize_components(serializer, &flat)
    }
}

impl<'de> Deserialize<'de> for Mat3 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let flat = deserializer.deserialize_seq(ComponentsVisitor::<9>)?;

        let mut data = [[0.0; 3]; 3];
        for (col_idx, col) in data.iter_mut().enumerate() {
            col.copy_from_slice(&flat[col_idx * 3..col_idx * 3 + 3]);
        }

        Ok(Mat3::from_cols(data))
    }
}
