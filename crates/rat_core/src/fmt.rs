//! Text form `"<numerator>/<denominator>"`.
//!
//! Reading is lenient in the same places a stream extractor is:
//! - leading whitespace is skipped, also around the `/`
//! - an absent or non-numeric denominator falls back to `1`
//! - anything after the last integer read is ignored
//!
//! Only the numerator is required. Digits that do not fit `T` (either part)
//! are `NotRepresentable`, never a fallback. The pair is validated by
//! `Rational::new`, so `"3/0"` is a `ZeroDenominator` error.

use core::fmt;
use core::str::FromStr;

use crate::errors::{RatResult, RationalError};
use crate::integral::Integral;
use crate::rational::Rational;

impl<T: Integral + fmt::Display> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer(), self.denom())
    }
}

/// Split a leading `[+-]?[0-9]+` off `s` and parse it into `T`.
///
/// `None` when there are no digits; an `Err` when the digits do not fit `T`.
fn leading_integer<T: Integral>(s: &str) -> Option<(RatResult<T>, &str)> {
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let end = sign + digits;
    let value = T::from_str_radix(&s[..end], 10).map_err(|_| RationalError::NotRepresentable);
    Some((value, &s[end..]))
}

impl<T: Integral> FromStr for Rational<T> {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numer, rest) = leading_integer::<T>(s.trim_start())
            .ok_or(RationalError::Malformed("expected an integer numerator"))?;
        let numer = numer?;

        let denom = match rest
            .trim_start()
            .strip_prefix('/')
            .and_then(|after| leading_integer::<T>(after.trim_start()))
        {
            Some((denom, _)) => denom?,
            None => T::one(),
        };

        Rational::new(numer, denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Rational<i64>, RationalError> {
        s.parse()
    }

    #[test]
    fn display_is_numerator_slash_denominator() {
        assert_eq!(Rational::new(-6i32, 4).unwrap().to_string(), "-3/2");
        assert_eq!(Rational::from_integer(5u8).to_string(), "5/1");
        assert_eq!(Rational::<i64>::default().to_string(), "0/1");
    }

    #[test]
    fn reads_canonical_pairs() {
        assert_eq!(parse("3/4").unwrap().into_parts(), (3, 4));
        assert_eq!(parse("  -6/8").unwrap().into_parts(), (-3, 4));
        assert_eq!(parse("6 / -8").unwrap().into_parts(), (-3, 4));
        assert_eq!(parse("+5/10").unwrap().into_parts(), (1, 2));
    }

    #[test]
    fn denominator_defaults_to_one() {
        assert_eq!(parse("7").unwrap().into_parts(), (7, 1));
        assert_eq!(parse("7/").unwrap().into_parts(), (7, 1));
        assert_eq!(parse("7/x").unwrap().into_parts(), (7, 1));
        assert_eq!(parse("7 apples").unwrap().into_parts(), (7, 1));
        assert_eq!(parse("7/2 rest").unwrap().into_parts(), (7, 2));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse("3/0"), Err(RationalError::ZeroDenominator));
        assert!(matches!(parse(""), Err(RationalError::Malformed(_))));
        assert!(matches!(parse("abc"), Err(RationalError::Malformed(_))));
        assert!(matches!(parse("-"), Err(RationalError::Malformed(_))));
    }

    #[test]
    fn oversized_digits_are_not_representable() {
        assert_eq!("300/7".parse::<Rational<u8>>(), Err(RationalError::NotRepresentable));
        assert_eq!("7/300".parse::<Rational<u8>>(), Err(RationalError::NotRepresentable));
        assert_eq!("7 / -1".parse::<Rational<u8>>(), Err(RationalError::NotRepresentable));
        assert_eq!("-1/2".parse::<Rational<u32>>(), Err(RationalError::NotRepresentable));
        assert_eq!(
            parse("1/1000000000000000000000"),
            Err(RationalError::NotRepresentable)
        );
        assert_eq!(parse("1/-9223372036854775808"), Err(RationalError::NotRepresentable));
        assert_eq!(parse("0/-9223372036854775808").unwrap().into_parts(), (0, 1));
    }

    #[test]
    fn display_then_parse_is_identity() {
        for (n, d) in [(1, 3), (-22, 7), (0, 5), (i64::MAX, 2)] {
            let x = Rational::new(n, d).unwrap();
            assert_eq!(parse(&x.to_string()).unwrap(), x);
        }
    }
}
