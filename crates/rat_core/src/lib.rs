//! rat_core: exact rational numbers over primitive integers.
//!
//! This crate is **I/O-free**. It defines one value type, [`Rational<T>`], and
//! the helpers that treat rationals and bare numbers uniformly.
//!
//! - Canonical form at all times: coprime parts, positive denominator
//! - Exact construction from `f32`/`f64` (bit-level decomposition)
//! - Total order by cross-multiplication
//! - Operators against rationals and bare integers, plus fallible named forms
//! - `"<n>/<d>"` text form
//!
//! Overflow of the base integer type is inherited, not masked: with
//! `overflow-checks` on, an overflowing operator panics like the primitive does.
//! The `checked_*` methods report it as `None` instead.
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod cast;
pub mod cmp;
pub mod errors;
pub mod float;
pub mod fmt;
pub mod integral;
pub mod math;
pub mod ops;
pub mod rational;

pub use cast::{denominator, numerator, rational_cast, rational_from, Arithmetic, Fraction};
pub use errors::{RatResult, RationalError};
pub use float::FloatBits;
pub use integral::Integral;
pub use rational::{
    Rational, Rational128, Rational16, Rational32, Rational64, Rational8, RationalU128,
    RationalU16, RationalU32, RationalU64, RationalU8,
};
