//! Error types.

use core::fmt::{self, Display};

/// Pairing engine errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Numeric curve identifier with no named curve behind it.
    UnknownCurve(u32),

    /// Curve name that does not match any named curve.
    UnknownCurveName,

    /// Integer arithmetic failed while deriving parameters.
    Integer(vint::Error),

    /// Curve parameters that do not describe a usable pairing-friendly curve.
    InvalidParameter(&'static str),

    /// Field modulus wider than the largest supported limb count.
    ModulusTooLarge,

    /// Operation specialized to a different curve than the selected one.
    CurveMismatch,

    /// Precomputed line coefficients of the wrong length.
    CoefficientCount {
        /// Number of coefficients the selected curve produces.
        expected: usize,
        /// Number of coefficients supplied.
        actual: usize,
    },

    /// Coordinates that do not satisfy the curve equation.
    NotOnCurve,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCurve(id) => write!(f, "unknown curve identifier {id}"),
            Error::UnknownCurveName => f.write_str("unknown curve name"),
            Error::Integer(err) => write!(f, "integer error: {err}"),
            Error::InvalidParameter(msg) => write!(f, "invalid curve parameter: {msg}"),
            Error::ModulusTooLarge => f.write_str("field modulus is too large"),
            Error::CurveMismatch => f.write_str("operation is not available for this curve"),
            Error::CoefficientCount { expected, actual } => write!(
                f,
                "expected {expected} precomputed coefficients, got {actual}"
            ),
            Error::NotOnCurve => f.write_str("point is not on the curve"),
        }
    }
}

impl From<vint::Error> for Error {
    fn from(err: vint::Error) -> Self {
        Error::Integer(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Integer(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
