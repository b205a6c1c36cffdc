//! Exact float → rational conversion.
//!
//! A finite float is `s × 2^e` with `0.5 ≤ |s| < 1` (the `frexp` split). Scaling
//! `s` by `2^MANTISSA_DIGITS` gives an exact integer numerator; the binary
//! exponent then lands on one side of the fraction:
//! - positive: multiply the numerator,
//! - negative below the exponent ceiling (`MAX_EXP - 1`): multiply the denominator,
//! - negative at or past the ceiling: shift the excess out of the numerator and
//!   cap the denominator at `2^ceiling`. A numerator shifted to zero is an
//!   underflow error.
//!
//! The result is the float's exact binary fraction, never a decimal rounding.

use core::fmt::Debug;

use crate::errors::{RatResult, RationalError};
use crate::integral::{is_signed, negate, pow2, Integral};
use crate::rational::Rational;

/// IEEE-754 binary formats that can be decomposed bit-exactly.
pub trait FloatBits: Copy + Debug {
    /// Significand bits including the implicit leading one (53 for `f64`).
    const MANTISSA_DIGITS: u32;
    /// One past the largest binary exponent (1024 for `f64`).
    const MAX_EXP: i32;

    fn is_finite_value(self) -> bool;

    /// `frexp`-style split scaled to integers: `(negative, m, e)` with
    /// `|self| == m × 2^e` and `2^(MANTISSA_DIGITS-1) ≤ m < 2^MANTISSA_DIGITS`.
    /// Zero yields `m == 0`. Subnormals are normalized. Finite input only.
    fn decompose(self) -> (bool, u64, i32);

    /// Exponent magnitude from which denominator scaling is capped.
    #[inline]
    fn exponent_ceiling() -> u32 {
        (Self::MAX_EXP - 1) as u32
    }
}

macro_rules! impl_float_bits {
    ($float:ty, $width:expr) => {
        impl FloatBits for $float {
            const MANTISSA_DIGITS: u32 = <$float>::MANTISSA_DIGITS;
            const MAX_EXP: i32 = <$float>::MAX_EXP;

            #[inline]
            fn is_finite_value(self) -> bool {
                self.is_finite()
            }

            fn decompose(self) -> (bool, u64, i32) {
                const FRAC_BITS: u32 = <$float>::MANTISSA_DIGITS - 1;
                const BIAS: i32 = <$float>::MAX_EXP - 1;
                const EXP_MASK: u64 = (1u64 << ($width - 1 - FRAC_BITS)) - 1;

                let bits = self.to_bits() as u64;
                let negative = (bits >> ($width - 1)) & 1 == 1;
                let biased = ((bits >> FRAC_BITS) & EXP_MASK) as i32;
                let frac = bits & ((1u64 << FRAC_BITS) - 1);

                if biased == 0 {
                    if frac == 0 {
                        return (negative, 0, 0);
                    }
                    // Subnormal: bring the top set bit up to the implicit-one slot.
                    let shift = frac.leading_zeros() - (63 - FRAC_BITS);
                    let m = frac << shift;
                    return (negative, m, 1 - BIAS - FRAC_BITS as i32 - shift as i32);
                }

                let m = frac | (1u64 << FRAC_BITS);
                (negative, m, biased - BIAS - FRAC_BITS as i32)
            }
        }
    };
}

impl_float_bits!(f32, 32);
impl_float_bits!(f64, 64);

impl<T: Integral> Rational<T> {
    /// Exact fraction of a finite float.
    ///
    /// Errors:
    /// - `NonFinite` for infinities and NaN,
    /// - `Underflow` when the capped scaling shifts every numerator bit out,
    /// - `NotRepresentable` when a part does not fit `T` (including negative
    ///   values into an unsigned `T`).
    pub fn from_float<F: FloatBits>(value: F) -> RatResult<Self> {
        if !value.is_finite_value() {
            tracing::debug!(?value, "rejecting non-finite float");
            return Err(RationalError::NonFinite);
        }

        let (negative, mut mantissa, exponent) = value.decompose();
        if mantissa == 0 {
            return Ok(Self::zero());
        }

        let mut numer_shift = 0u32;
        let mut denom_shift = 0u32;
        if exponent > 0 {
            numer_shift = exponent as u32;
        } else if exponent < 0 {
            let ceiling = F::exponent_ceiling();
            let mut magnitude = exponent.unsigned_abs();
            if magnitude >= ceiling {
                mantissa = mantissa.checked_shr(magnitude - ceiling).unwrap_or(0);
                magnitude = ceiling;
                if mantissa == 0 {
                    tracing::debug!(?value, "float underflows to a zero numerator");
                    return Err(RationalError::Underflow);
                }
            }
            denom_shift = magnitude;
        }

        // Cancel shared powers of two before narrowing into `T`.
        let common = mantissa.trailing_zeros().min(denom_shift);
        mantissa >>= common;
        denom_shift -= common;

        let mut numer = T::from(mantissa).ok_or_else(|| not_representable(&value))?;
        if negative {
            if !is_signed::<T>() {
                return Err(not_representable(&value));
            }
            numer = negate(numer);
        }
        if numer_shift > 0 {
            numer = pow2::<T>(numer_shift)
                .and_then(|scale| numer.checked_mul(&scale))
                .ok_or_else(|| not_representable(&value))?;
        }
        let denom = pow2::<T>(denom_shift).ok_or_else(|| not_representable(&value))?;

        Self::new(numer, denom)
    }
}

fn not_representable<F: Debug>(value: &F) -> RationalError {
    tracing::debug!(?value, "float does not fit the base integer type");
    RationalError::NotRepresentable
}
