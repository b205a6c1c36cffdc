//! Total order for rationals and mixed comparisons with bare integers.
//!
//! Equality is field-wise (both sides are canonical, so no cross-multiplying).
//! Ordering cross-multiplies, which preserves direction because every
//! denominator is positive:
//! - `a/b < c/d` iff `a·d < b·c`
//! - `a/b < c`   iff `a < b·c`
//!
//! NOTE: the products use the base type directly; overflow behaves like the
//! primitive does.

use core::cmp::Ordering;

use crate::integral::Integral;
use crate::rational::Rational;

impl<T: Integral> Ord for Rational<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        (self.numer() * other.denom()).cmp(&(self.denom() * other.numer()))
    }
}

impl<T: Integral> PartialOrd for Rational<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Integral> Rational<T> {
    /// Three-way comparison against a bare integer.
    pub fn cmp_integer(&self, value: T) -> Ordering {
        if self.eq_integer(value) {
            return Ordering::Equal;
        }
        self.numer().cmp(&(self.denom() * value))
    }

    /// True iff `self` is the whole number `value`.
    #[inline]
    pub fn eq_integer(&self, value: T) -> bool {
        self.denom() == T::one() && self.numer() == value
    }
}

impl<T: Integral> PartialEq<T> for Rational<T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.eq_integer(*other)
    }
}

impl<T: Integral> PartialOrd<T> for Rational<T> {
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(self.cmp_integer(*other))
    }
}

// Mirrored `integer ⋈ rational`; the orphan rule wants concrete primitives here.
macro_rules! impl_integer_cmp {
    ($($int:ty),* $(,)?) => {$(
        impl PartialEq<Rational<$int>> for $int {
            #[inline]
            fn eq(&self, other: &Rational<$int>) -> bool {
                other.eq_integer(*self)
            }
        }

        impl PartialOrd<Rational<$int>> for $int {
            #[inline]
            fn partial_cmp(&self, other: &Rational<$int>) -> Option<Ordering> {
                Some(other.cmp_integer(*self).reverse())
            }
        }
    )*};
}

impl_integer_cmp!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/* ---------------------------------- Tests --------------------------------- */
