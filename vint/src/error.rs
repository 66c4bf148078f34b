//! Error types.

use core::fmt::{self, Display};

/// Integer domain errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Division or reduction by zero.
    DivisionByZero,

    /// Bitwise operation on a negative operand.
    NegativeOperand,

    /// Negative exponent passed to an integer power.
    NegativeExponent,

    /// The operands of a modular inverse are not coprime.
    NotInvertible,

    /// Modulus outside the domain of the operation (non-positive, or even
    /// where an odd modulus is required).
    InvalidModulus,

    /// Empty input string.
    EmptyString,

    /// Character that is not a digit of the selected radix.
    InvalidDigit,

    /// Radix outside `2..=36`.
    UnsupportedRadix,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::DivisionByZero => "division by zero",
            Error::NegativeOperand => "bitwise operation on a negative integer",
            Error::NegativeExponent => "negative exponent",
            Error::NotInvertible => "integer is not invertible modulo the given modulus",
            Error::InvalidModulus => "invalid modulus",
            Error::EmptyString => "cannot parse integer from empty string",
            Error::InvalidDigit => "invalid digit found in string",
            Error::UnsupportedRadix => "radix must be in the range 2..=36",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
