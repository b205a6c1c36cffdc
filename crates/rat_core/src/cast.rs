//! Conversions between rationals and primitive numbers.
//!
//! - `evaluate::<R>()`: `R(n) / R(d)`, approximate for floats, truncating for integers
//! - `rational_cast` / `rational_from`: the two directions of the same cast
//! - `numerator(&x)` / `denominator(&x)`: uniform accessors, a bare number is `x/1`

use core::ops::Div;

use num_traits::{NumCast, ToPrimitive};

use crate::errors::{RatResult, RationalError};
use crate::integral::Integral;
use crate::rational::Rational;

impl<T: Integral> Rational<T> {
    /// `numerator / denominator` computed in `R`.
    ///
    /// Fails with `NotRepresentable` when either part does not fit `R`.
    pub fn evaluate<R>(&self) -> RatResult<R>
    where
        R: NumCast + Div<Output = R>,
    {
        let n = R::from(self.numer()).ok_or(RationalError::NotRepresentable)?;
        let d = R::from(self.denom()).ok_or(RationalError::NotRepresentable)?;
        Ok(n / d)
    }

    /// Nearest-ish `f64` (two roundings at most: each part, then the quotient).
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.numer().to_f64().unwrap_or(f64::NAN) / self.denom().to_f64().unwrap_or(f64::NAN)
    }

    #[inline]
    pub fn to_f32(&self) -> f32 {
        self.numer().to_f32().unwrap_or(f32::NAN) / self.denom().to_f32().unwrap_or(f32::NAN)
    }

    /// Integer part, truncated toward zero.
    #[inline]
    pub fn trunc_integer(&self) -> T {
        self.numer() / self.denom()
    }
}

impl<T: Integral> ToPrimitive for Rational<T> {
    fn to_i64(&self) -> Option<i64> {
        self.trunc_integer().to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.trunc_integer().to_u64()
    }
    fn to_i128(&self) -> Option<i128> {
        self.trunc_integer().to_i128()
    }
    fn to_u128(&self) -> Option<u128> {
        self.trunc_integer().to_u128()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(self))
    }
    fn to_f32(&self) -> Option<f32> {
        Some(Rational::to_f32(self))
    }
}

/* -------------------------------------------------------------------------- */
/*                          Arithmetic <-> rational                           */
/* -------------------------------------------------------------------------- */

/// Primitive numbers that convert to and from `Rational<T>`.
pub trait Arithmetic: Copy + NumCast + Div<Output = Self> {
    /// Exact conversion: integers by value, floats by bit decomposition.
    fn into_rational<T: Integral>(self) -> RatResult<Rational<T>>;

    /// `value.evaluate::<Self>()`.
    #[inline]
    fn from_rational<T: Integral>(value: &Rational<T>) -> RatResult<Self> {
        value.evaluate()
    }
}

macro_rules! impl_arithmetic_int {
    ($($int:ty),* $(,)?) => {$(
        impl Arithmetic for $int {
            #[inline]
            fn into_rational<T: Integral>(self) -> RatResult<Rational<T>> {
                T::from(self)
                    .map(Rational::from_integer)
                    .ok_or(RationalError::NotRepresentable)
            }
        }
    )*};
}

macro_rules! impl_arithmetic_float {
    ($($float:ty),* $(,)?) => {$(
        impl Arithmetic for $float {
            #[inline]
            fn into_rational<T: Integral>(self) -> RatResult<Rational<T>> {
                Rational::from_float(self)
            }
        }
    )*};
}

impl_arithmetic_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_arithmetic_float!(f32, f64);

/// Rational → arithmetic, via [`Rational::evaluate`].
#[inline]
pub fn rational_cast<R: Arithmetic, T: Integral>(value: &Rational<T>) -> RatResult<R> {
    R::from_rational(value)
}

/// Arithmetic → rational, via the integer or float constructor.
#[inline]
pub fn rational_from<T: Integral, A: Arithmetic>(value: A) -> RatResult<Rational<T>> {
    value.into_rational()
}

/* -------------------------------------------------------------------------- */
/*                         Uniform numerator/denominator                      */
/* -------------------------------------------------------------------------- */

/// Anything with a numerator and a denominator; bare numbers are `x/1`.
pub trait Fraction {
    type Part;
    fn numerator(&self) -> Self::Part;
    fn denominator(&self) -> Self::Part;
}

impl<T: Integral> Fraction for Rational<T> {
    type Part = T;
    #[inline]
    fn numerator(&self) -> T {
        self.numer()
    }
    #[inline]
    fn denominator(&self) -> T {
        self.denom()
    }
}

macro_rules! impl_fraction_bare {
    ($($t:ty),* $(,)?) => {$(
        impl Fraction for $t {
            type Part = $t;
            #[inline]
            fn numerator(&self) -> $t {
                *self
            }
            #[inline]
            fn denominator(&self) -> $t {
                1 as $t
            }
        }
    )*};
}

impl_fraction_bare!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[inline]
pub fn numerator<F: Fraction>(value: &F) -> F::Part {
    value.numerator()
}

#[inline]
pub fn denominator<F: Fraction>(value: &F) -> F::Part {
    value.denominator()
}

/* ---------------------------------- Tests --------------------------------- */
