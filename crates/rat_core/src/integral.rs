//! Base-type capability set for `Rational<T>`.

use core::fmt::Debug;
use core::hash::Hash;

use num_integer::Integer;
use num_traits::PrimInt;

/// Fixed-width primitive integer usable as numerator/denominator.
///
/// Blanket-implemented for every `i8..=i128`, `isize`, `u8..=u128`, `usize`.
pub trait Integral: PrimInt + Integer + Hash + Debug + 'static {}

impl<T> Integral for T where T: PrimInt + Integer + Hash + Debug + 'static {}

/// True for the signed primitives.
#[inline]
pub fn is_signed<T: Integral>() -> bool {
    T::min_value() < T::zero()
}

/// Arithmetic negation (`0 - x`). Overflow for `MIN` is inherited from `T`.
#[inline]
pub(crate) fn negate<T: Integral>(x: T) -> T {
    T::zero() - x
}

/// Largest `k` such that `2^k` is a positive value of `T`.
#[inline]
pub fn max_pow2_exponent<T: Integral>() -> u32 {
    let width = T::zero().count_zeros();
    if is_signed::<T>() { width - 2 } else { width - 1 }
}

/// `2^k` in `T`, or `None` when it does not fit.
#[inline]
pub fn pow2<T: Integral>(k: u32) -> Option<T> {
    if k > max_pow2_exponent::<T>() {
        return None;
    }
    Some(T::one() << k as usize)
}
