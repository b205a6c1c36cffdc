//! Domain errors raised by `Rational` construction, arithmetic and parsing.
//!
//! Every variant reports a caller-input violation detected before any state is
//! mutated. Nothing here is transient.

use thiserror::Error;

/// Minimal error set for rational-domain validation & parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum RationalError {
    /// Zero denominator supplied to a constructor, setter or the text reader.
    #[error("denominator can not be zero")]
    ZeroDenominator,

    /// Division by a zero rational or integer (also `recip` of zero).
    #[error("division by zero")]
    DivisionByZero,

    /// Float source is infinite or NaN.
    #[error("value can not be infinite or NaN")]
    NonFinite,

    /// Float source is so small its exact fraction loses every numerator bit.
    #[error("value evaluates to zero due to being too small")]
    Underflow,

    /// A part does not fit the base integer (or the requested result type).
    #[error("value is not representable in the target type")]
    NotRepresentable,

    /// Text that does not start with an integer.
    #[error("malformed rational: {0}")]
    Malformed(&'static str),
}

pub type RatResult<T> = Result<T, RationalError>;
