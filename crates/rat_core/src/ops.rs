//! Arithmetic: rational ⊕ rational, rational ⊕ integer, integer ⊕ rational.
//!
//! `a/b op c/d`, always re-canonized:
//! - add `(ad + bc) / bd`, sub `(ad − bc) / bd`, mul `ac / bd`, div `ad / bc`
//! - with a bare integer `c`: `(a ± bc) / b`, `ac / b`, `a / bc`
//!
//! The compound forms do the work; the binary forms copy and delegate.
//! Operator division panics on a zero divisor like primitive integer division;
//! `try_div*` return `RationalError::DivisionByZero` and leave `self` untouched.
//! Base-type overflow is inherited; `checked_*` report it as `None`.

use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{Inv, One, Signed, Zero};

use crate::errors::{RatResult, RationalError};
use crate::integral::Integral;
use crate::rational::{checked_canonize, Rational};

/* -------------------------------------------------------------------------- */
/*                               Fallible forms                               */
/* -------------------------------------------------------------------------- */

impl<T: Integral> Rational<T> {
    /// `self / rhs`, or `DivisionByZero` when `rhs` is zero.
    pub fn try_div(mut self, rhs: Self) -> RatResult<Self> {
        self.try_div_assign(rhs)?;
        Ok(self)
    }

    /// In-place `self /= rhs`; `self` is untouched on error.
    pub fn try_div_assign(&mut self, rhs: Self) -> RatResult<&mut Self> {
        if rhs.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        *self = Self::reduced(self.numer() * rhs.denom(), self.denom() * rhs.numer());
        Ok(self)
    }

    /// `self / value` for a bare integer.
    pub fn try_div_int(mut self, value: T) -> RatResult<Self> {
        self.try_div_int_assign(value)?;
        Ok(self)
    }

    /// In-place `self /= value`; `self` is untouched on error.
    pub fn try_div_int_assign(&mut self, value: T) -> RatResult<&mut Self> {
        if value.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        *self = Self::reduced(self.numer(), self.denom() * value);
        Ok(self)
    }

    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let ad = self.numer().checked_mul(&rhs.denom())?;
        let bc = self.denom().checked_mul(&rhs.numer())?;
        let bd = self.denom().checked_mul(&rhs.denom())?;
        checked_from(ad.checked_add(&bc)?, bd)
    }

    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        let ad = self.numer().checked_mul(&rhs.denom())?;
        let bc = self.denom().checked_mul(&rhs.numer())?;
        let bd = self.denom().checked_mul(&rhs.denom())?;
        checked_from(ad.checked_sub(&bc)?, bd)
    }

    pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        let ac = self.numer().checked_mul(&rhs.numer())?;
        let bd = self.denom().checked_mul(&rhs.denom())?;
        checked_from(ac, bd)
    }

    /// `None` on overflow or a zero divisor.
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        let ad = self.numer().checked_mul(&rhs.denom())?;
        let bc = self.denom().checked_mul(&rhs.numer())?;
        checked_from(ad, bc)
    }
}

#[inline]
fn checked_from<T: Integral>(n: T, d: T) -> Option<Rational<T>> {
    checked_canonize(n, d).map(|(n, d)| Rational::from_canonical(n, d))
}

#[cold]
fn division_by_zero() -> ! {
    panic!("{}", RationalError::DivisionByZero)
}

/* -------------------------------------------------------------------------- */
/*                            Rational ⊕ Rational                             */
/* -------------------------------------------------------------------------- */

impl<T: Integral> AddAssign for Rational<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::reduced(
            self.numer() * rhs.denom() + self.denom() * rhs.numer(),
            self.denom() * rhs.denom(),
        );
    }
}

impl<T: Integral> SubAssign for Rational<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Self::reduced(
            self.numer() * rhs.denom() - self.denom() * rhs.numer(),
            self.denom() * rhs.denom(),
        );
    }
}

impl<T: Integral> MulAssign for Rational<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Self::reduced(self.numer() * rhs.numer(), self.denom() * rhs.denom());
    }
}

impl<T: Integral> DivAssign for Rational<T> {
    /// Panics when `rhs` is zero; see [`Rational::try_div_assign`].
    fn div_assign(&mut self, rhs: Self) {
        if self.try_div_assign(rhs).is_err() {
            division_by_zero();
        }
    }
}

/* -------------------------------------------------------------------------- */
/*                             Rational ⊕ integer                             */
/* -------------------------------------------------------------------------- */

impl<T: Integral> AddAssign<T> for Rational<T> {
    fn add_assign(&mut self, value: T) {
        *self = Self::reduced(self.numer() + value * self.denom(), self.denom());
    }
}

impl<T: Integral> SubAssign<T> for Rational<T> {
    fn sub_assign(&mut self, value: T) {
        *self = Self::reduced(self.numer() - value * self.denom(), self.denom());
    }
}

impl<T: Integral> MulAssign<T> for Rational<T> {
    fn mul_assign(&mut self, value: T) {
        *self = Self::reduced(self.numer() * value, self.denom());
    }
}

impl<T: Integral> DivAssign<T> for Rational<T> {
    /// Panics when `value` is zero; see [`Rational::try_div_int_assign`].
    fn div_assign(&mut self, value: T) {
        if self.try_div_int_assign(value).is_err() {
            division_by_zero();
        }
    }
}

// Binary forms: copy, then delegate to the compound form.
macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Integral> $Op for Rational<T> {
            type Output = Self;
            #[inline]
            fn $op(mut self, rhs: Self) -> Self {
                $OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<T: Integral> $Op<T> for Rational<T> {
            type Output = Self;
            #[inline]
            fn $op(mut self, rhs: T) -> Self {
                $OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);

/* -------------------------------------------------------------------------- */
/*                             Integer ⊕ rational                             */
/* -------------------------------------------------------------------------- */

macro_rules! impl_integer_lhs {
    ($($int:ty),* $(,)?) => {$(
        impl Add<Rational<$int>> for $int {
            type Output = Rational<$int>;
            #[inline]
            fn add(self, rhs: Rational<$int>) -> Rational<$int> {
                rhs + self
            }
        }

        impl Sub<Rational<$int>> for $int {
            type Output = Rational<$int>;
            #[inline]
            fn sub(self, rhs: Rational<$int>) -> Rational<$int> {
                Rational::from_integer(self) - rhs
            }
        }

        impl Mul<Rational<$int>> for $int {
            type Output = Rational<$int>;
            #[inline]
            fn mul(self, rhs: Rational<$int>) -> Rational<$int> {
                rhs * self
            }
        }

        impl Div<Rational<$int>> for $int {
            type Output = Rational<$int>;
            /// Panics when `rhs` is zero.
            #[inline]
            fn div(self, rhs: Rational<$int>) -> Rational<$int> {
                Rational::from_integer(self) / rhs
            }
        }
    )*};
}

impl_integer_lhs!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/* -------------------------------------------------------------------------- */
/*                           Unary & algebraic traits                         */
/* -------------------------------------------------------------------------- */

impl<T: Integral + Signed> Neg for Rational<T> {
    type Output = Self;
    /// Negates the numerator; the pair stays canonical.
    #[inline]
    fn neg(self) -> Self {
        Rational::from_canonical(-self.numer(), self.denom())
    }
}

impl<T: Integral> Inv for Rational<T> {
    type Output = Self;
    /// Panics on zero or a `MIN` numerator; see [`Rational::recip`].
    fn inv(self) -> Self {
        match self.recip() {
            Ok(r) => r,
            Err(RationalError::DivisionByZero) => division_by_zero(),
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Integral> Zero for Rational<T> {
    #[inline]
    fn zero() -> Self {
        Rational::from_integer(T::zero())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.numer().is_zero()
    }
}

impl<T: Integral> One for Rational<T> {
    #[inline]
    fn one() -> Self {
        Rational::from_integer(T::one())
    }
}

impl<T: Integral> Sum for Rational<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rational::from_integer(T::zero()), |acc, x| acc + x)
    }
}

impl<T: Integral> Product for Rational<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rational::from_integer(T::one()), |acc, x| acc * x)
    }
}

/* ---------------------------------- Tests --------------------------------- */
