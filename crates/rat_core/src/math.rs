//! Math-function counterparts: `abs`, `pow`, `recip`.

use crate::errors::{RatResult, RationalError};
use crate::integral::{negate, Integral};
use crate::rational::Rational;

impl<T: Integral> Rational<T> {
    /// Absolute value of the numerator; the denominator is already positive.
    pub fn abs(&self) -> Self {
        if self.numer() < T::zero() {
            Rational::from_canonical(negate(self.numer()), self.denom())
        } else {
            *self
        }
    }

    /// Swap numerator and denominator. Zero has no reciprocal; a `MIN`
    /// numerator has none in `T` (`NotRepresentable`).
    pub fn recip(&self) -> RatResult<Self> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Rational::new(self.denom(), self.numer())
    }

    /// Exact integer power, both parts raised by squaring.
    ///
    /// `x^0 == 1` (including `0^0`); a negative exponent inverts first, so zero
    /// to a negative power is `DivisionByZero`. Overflow is inherited from `T`.
    pub fn pow(&self, exp: i32) -> RatResult<Self> {
        let base = if exp < 0 { self.recip()? } else { *self };
        let e = exp.unsigned_abs();
        // Powers of coprime parts stay coprime; the sign stays in the numerator.
        Ok(Rational::from_canonical(base.numer().pow(e), base.denom().pow(e)))
    }

    /// [`Rational::pow`] that reports overflow (and zero to a negative power) as `None`.
    pub fn checked_pow(&self, exp: i32) -> Option<Self> {
        let base = if exp < 0 { self.recip().ok()? } else { *self };
        let e = exp.unsigned_abs() as usize;
        let numer = num_traits::checked_pow(base.numer(), e)?;
        let denom = num_traits::checked_pow(base.denom(), e)?;
        Some(Rational::from_canonical(numer, denom))
    }
}

/// Free-function form of [`Rational::abs`].
#[inline]
pub fn abs<T: Integral>(value: &Rational<T>) -> Rational<T> {
    value.abs()
}

/// Free-function form of [`Rational::pow`].
#[inline]
pub fn pow<T: Integral>(value: &Rational<T>, exp: i32) -> RatResult<Rational<T>> {
    value.pow(exp)
}
