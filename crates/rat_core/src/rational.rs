//! The `Rational<T>` value type: canonical form, construction, accessors.
//!
//! Canonical form:
//! - `denominator != 0`
//! - `gcd(numerator, denominator) == 1` (zero is stored as `0/1`)
//! - `denominator > 0`; the sign lives in the numerator
//!
//! Every constructor and mutator either ends by re-establishing the three
//! rules or returns an error before touching `self`.

use crate::errors::{RatResult, RationalError};
use crate::float::FloatBits;
use crate::integral::{negate, Integral};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact ratio with normalized sign and positive denominator.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        try_from = "(T, T)",
        into = "(T, T)",
        bound(
            serialize = "T: Integral + Serialize",
            deserialize = "T: Integral + Deserialize<'de>"
        )
    )
)]
pub struct Rational<T> {
    numer: T,
    denom: T,
}

pub type Rational8 = Rational<i8>;
pub type Rational16 = Rational<i16>;
pub type Rational32 = Rational<i32>;
pub type Rational64 = Rational<i64>;
pub type Rational128 = Rational<i128>;
pub type RationalU8 = Rational<u8>;
pub type RationalU16 = Rational<u16>;
pub type RationalU32 = Rational<u32>;
pub type RationalU64 = Rational<u64>;
pub type RationalU128 = Rational<u128>;

/// `(0, 1)` and `(1, 1)` for the pairs whose gcd could be `|MIN|`
/// (`(0, MIN)`, `(MIN, MIN)`); those are the only pairs `Integer::gcd`
/// overflows on.
#[inline]
fn trivial_pair<T: Integral>(n: T, d: T) -> Option<(T, T)> {
    if n.is_zero() {
        Some((T::zero(), T::one()))
    } else if n == d {
        Some((T::one(), T::one()))
    } else {
        None
    }
}

/// Reduce `(n, d)` by their gcd and move the sign into the numerator.
///
/// `d` must be nonzero. Zero always lands on `0/1`. Negating a `MIN`
/// denominator overflows like the primitive does.
#[inline]
pub(crate) fn canonize<T: Integral>(n: T, d: T) -> (T, T) {
    debug_assert!(!d.is_zero());
    if let Some(pair) = trivial_pair(n, d) {
        return pair;
    }
    let g = n.gcd(&d);
    let (mut n, mut d) = (n / g, d / g);
    if d < T::zero() {
        n = negate(n);
        d = negate(d);
    }
    (n, d)
}

/// [`canonize`] that reports a zero denominator or a negation overflow
/// (`MIN` left in the denominator after reduction) as `None`.
#[inline]
pub(crate) fn checked_canonize<T: Integral>(n: T, d: T) -> Option<(T, T)> {
    if d.is_zero() {
        return None;
    }
    if let Some(pair) = trivial_pair(n, d) {
        return Some(pair);
    }
    let g = n.gcd(&d);
    let (n, d) = (n / g, d / g);
    if d < T::zero() {
        return Some((T::zero().checked_sub(&n)?, T::zero().checked_sub(&d)?));
    }
    Some((n, d))
}

impl<T: Integral> Rational<T> {
    /// Construct `numer / denom` in canonical form.
    ///
    /// `ZeroDenominator` for a zero `denom`; `NotRepresentable` when the
    /// canonical pair does not fit `T` (a `MIN` denominator that stays odd
    /// after reduction would have to be negated).
    pub fn new(numer: T, denom: T) -> RatResult<Self> {
        if denom.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }
        let (numer, denom) =
            checked_canonize(numer, denom).ok_or(RationalError::NotRepresentable)?;
        Ok(Self { numer, denom })
    }

    /// `value / 1`.
    #[inline]
    pub fn from_integer(value: T) -> Self {
        Self { numer: value, denom: T::one() }
    }

    /// Wrap a pair that is already canonical.
    #[inline]
    pub(crate) fn from_canonical(numer: T, denom: T) -> Self {
        debug_assert!(denom > T::zero());
        Self { numer, denom }
    }

    /// Reduce a raw pair whose denominator is known to be nonzero.
    #[inline]
    pub(crate) fn reduced(numer: T, denom: T) -> Self {
        let (numer, denom) = canonize(numer, denom);
        Self { numer, denom }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_integer(T::zero())
    }

    #[inline]
    pub fn one() -> Self {
        Self::from_integer(T::one())
    }

    #[inline]
    pub fn numer(&self) -> T {
        self.numer
    }

    /// Always positive.
    #[inline]
    pub fn denom(&self) -> T {
        self.denom
    }

    /// `(numerator, denominator)` pair.
    #[inline]
    pub fn into_parts(self) -> (T, T) {
        (self.numer, self.denom)
    }

    /// Replace the numerator and re-canonize against the current denominator.
    pub fn set_numer(&mut self, value: T) {
        *self = Self::reduced(value, self.denom);
    }

    /// Replace the denominator and re-canonize. Zero is rejected, `self` untouched.
    pub fn set_denom(&mut self, value: T) -> RatResult<()> {
        *self = Self::new(self.numer, value)?;
        Ok(())
    }

    /// Re-initialize from a pair. On error `self` keeps its previous value.
    pub fn assign(&mut self, numer: T, denom: T) -> RatResult<()> {
        *self = Self::new(numer, denom)?;
        Ok(())
    }

    /// Re-initialize from a float. On error `self` keeps its previous value.
    pub fn assign_float<F: FloatBits>(&mut self, value: F) -> RatResult<()> {
        *self = Self::from_float(value)?;
        Ok(())
    }

    /// Unary plus.
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// True when the denominator is 1.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom == T::one()
    }

    /// Add one whole unit (`n + d`) in place.
    ///
    /// `gcd(n + d, d) == gcd(n, d)`, so the pair stays coprime; the value is
    /// re-canonized anyway to keep every mutator on the same path.
    pub fn increment(&mut self) -> &mut Self {
        *self = Self::reduced(self.numer + self.denom, self.denom);
        self
    }

    /// Subtract one whole unit (`n - d`) in place. See [`Rational::increment`].
    pub fn decrement(&mut self) -> &mut Self {
        *self = Self::reduced(self.numer - self.denom, self.denom);
        self
    }

    /// Increment, returning the value held before.
    pub fn post_increment(&mut self) -> Self {
        let before = *self;
        self.increment();
        before
    }

    /// Decrement, returning the value held before.
    pub fn post_decrement(&mut self) -> Self {
        let before = *self;
        self.decrement();
        before
    }
}

impl<T: Integral> Default for Rational<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Integral> From<T> for Rational<T> {
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}

impl<T: Integral> TryFrom<(T, T)> for Rational<T> {
    type Error = RationalError;
    fn try_from((numer, denom): (T, T)) -> Result<Self, Self::Error> {
        Self::new(numer, denom)
    }
}

impl<T: Integral> From<Rational<T>> for (T, T) {
    fn from(value: Rational<T>) -> Self {
        value.into_parts()
    }
}

/* ---------------------------------- Tests --------------------------------- */
