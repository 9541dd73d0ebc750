//! Error type shared by every constructor and derived-quantity getter.
//!
//! Construction is all-or-nothing: a constructor either returns a fully
//! initialized shape or one of these errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// A parameter is malformed, out of range, or the parameter set is ambiguous.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Points are collinear or coincident where a proper figure is required.
    #[error("degenerate geometry: {reason}")]
    DegenerateGeometry { reason: String },

    /// Parameters are well-formed but cannot describe the requested figure.
    #[error("invalid {shape}: {reason}")]
    InvalidShape { shape: &'static str, reason: String },

    /// An optional quantity was read without enabling its construction flag.
    #[error("{quantity} not computed; enable `{flag}` at construction")]
    NotComputed {
        quantity: &'static str,
        flag: &'static str,
    },

    #[error("vertex index {index} out of bounds for {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
}

impl GeomError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            reason: reason.into(),
        }
    }

    pub fn shape(shape: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            shape,
            reason: reason.into(),
        }
    }

    pub fn not_computed(quantity: &'static str, flag: &'static str) -> Self {
        Self::NotComputed { quantity, flag }
    }
}

pub type GeomResult<T> = Result<T, GeomError>;

/// Rejects NaN/inf and values `<= 0`.
pub(crate) fn ensure_positive(name: &str, value: f64) -> GeomResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeomError::invalid(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}
