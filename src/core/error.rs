//! Construction-time failures.
//!
//! Geometric misses are never errors (they yield empty results) and
//! contract violations are programming errors which panic. What is
//! left are problems with the data handed to a constructor: a matrix
//! which can not be inverted, a dimension out of range, a name nobody
//! knows about.

use thiserror::Error;

// pbrt
use crate::core::pbrt::Float;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    #[error("matrix is not invertible (determinant {determinant})")]
    SingularMatrix { determinant: Float },
    #[error("invalid parameter \"{name}\": {reason}")]
    InvalidParameter { name: String, reason: String },
    #[error("unknown {kind} \"{name}\"")]
    UnknownName { kind: &'static str, name: String },
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

impl KernelError {
    pub fn invalid<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        KernelError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KernelError>;
