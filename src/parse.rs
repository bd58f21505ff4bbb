//! Reads vectors back from their `Display` form, e.g. `(1.0, 2.0)` or
//! `(1.0, 2.0, 3.0, w=1.0)`. Whitespace around components is ignored.

use std::{convert::TryFrom, str::FromStr};

use crate::{
    error::VectorError,
    vector::{Vec2, Vec3, Vec4},
};

// splits "(a, b, c)" into its trimmed components
fn split_components(value: &str) -> Result<Vec<&str>, VectorError> {
    let inner = value
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(VectorError::MissingParens)?;

    Ok(inner.split(',').map(str::trim).collect())
}

fn parse_numbers(parts: &[&str]) -> Result<Vec<f32>, VectorError> {
    parts
        .iter()
        .map(|part| part.parse::<f32>().map_err(VectorError::from))
        .collect()
}

fn log_failure<T>(value: &str, result: Result<T, VectorError>) -> Result<T, VectorError> {
    if let Err(err) = &result {
        log::debug!("Failed to parse vector {:?}: {}", value, err);
    }
    result
}

macro_rules! impl_from_str {
    ( $( $vec:ident )+ ) => {
        $(
            impl FromStr for $vec {
                type Err = VectorError;

                fn from_str(value: &str) -> Result<Self, Self::Err> {
                    let result = split_components(value)
                        .and_then(|parts| parse_numbers(&parts))
                        .and_then(|numbers| Self::try_from(&numbers[..]));
                    log_failure(value, result)
                }
            }
        )+
    };
}

impl_from_str! { Vec2 Vec3 }

impl FromStr for Vec4 {
    type Err = VectorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let result = split_components(value).and_then(|mut parts| {
            if parts.len() != 4 {
                return Err(VectorError::LengthMismatch {
                    expected: 4,
                    actual: parts.len(),
                });
            }
            parts[3] = parts[3]
                .strip_prefix("w=")
                .ok_or(VectorError::MissingW)?
                .trim_start();

            let numbers = parse_numbers(&parts)?;
            Self::try_from(&numbers[..])
        });
        log_failure(value, result)
    }
}
