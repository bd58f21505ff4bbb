use std::num;

#[derive(thiserror::Error, Debug)]
pub enum VectorError {
    #[error("Wrong number of components (expected: {expected}, got: {actual})")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Failed to parse float.")]
    ParseFloat(#[from] num::ParseFloatError),
    #[error("Vector must be enclosed in parentheses")]
    MissingParens,
    #[error("Last component of a vec4 must be written as `w=<value>`")]
    MissingW,
}
