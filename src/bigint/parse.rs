// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parses a `BigInt` from a base-`b` textual representation, `b` in
//! `[2, 36]`.
//!
//! Digits are consumed in batches of the largest count `e` such that
//! `b^e` fits a single digit, so the magnitude is multiplied by a
//! single native digit `⌈m/e⌉` times rather than once per character.

use super::bigint_core::{BigInt, Sign};
use super::digit::{Digit, DoubleDigit};
use super::error::BigIntError;
use std::str::FromStr;

/// Returns `(e, b^e)`: the largest digit-string batch size `e` such
/// that `radix^e` still fits in a single [`Digit`], and that power.
pub(crate) fn radix_digit_batch(radix: u32) -> (usize, Digit) {
    let radix = radix as DoubleDigit;
    let limit = Digit::MAX as DoubleDigit;

    let mut batch_len = 0usize;
    let mut batch_base: DoubleDigit = 1;
    loop {
        let next = batch_base * radix;
        if next > limit {
            break;
        }
        batch_base = next;
        batch_len += 1;
    }

    (batch_len, batch_base as Digit)
}

fn digit_value(c: char) -> Option<u32> {
    c.to_digit(36)
}

impl BigInt {
    /// Parses `s` as a signed integer in the given `radix` (`[2, 36]`).
    ///
    /// Accepts optional leading whitespace, an optional `+`/`-` sign,
    /// then one or more base-`radix` digits (letters case-insensitive).
    /// Parsing stops at the first character that isn't a valid digit in
    /// that radix; anything after it is ignored. `InvalidArgument` is
    /// returned for an out-of-range radix, or if no digit is found
    /// before the first non-digit (including an empty or sign-only input).
    pub fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, BigIntError> {
        if !(2..=36).contains(&radix) {
            return Err(BigIntError::InvalidArgument);
        }

        let s = s.trim_start();
        let mut chars = s.chars();

        let sign = match chars.clone().next() {
            Some('+') => {
                chars.next();
                Sign::Positive
            }
            Some('-') => {
                chars.next();
                Sign::Negative
            }
            _ => Sign::Positive,
        };

        let (batch_len, _) = radix_digit_batch(radix);
        let mut result = BigInt::zero();
        let mut digits_seen = 0u64;

        loop {
            let mut batch_value: Digit = 0;
            let mut batch_count = 0usize;
            while batch_count < batch_len {
                let mut lookahead_chars = chars.clone();
                match lookahead_chars.next().and_then(digit_value) {
                    Some(d) if d < radix => {
                        chars = lookahead_chars;
                        batch_value = batch_value * radix as Digit + d as Digit;
                        batch_count += 1;
                        digits_seen += 1;
                    }
                    _ => break,
                }
            }

            if batch_count == 0 {
                break;
            }

            let batch_radix = (radix as DoubleDigit).pow(batch_count as u32) as Digit;
            result.mul_add_digit(batch_radix, batch_value);
        }

        if digits_seen == 0 {
            return Err(BigIntError::InvalidArgument);
        }

        result.magnitude.trim();
        result.sign = if result.magnitude.size() == 0 {
            Sign::Positive
        } else {
            sign
        };

        Ok(result)
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_str_radix(s, 10)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        BigInt::from_str_radix(s, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_tools::quickcheck::SignedBigIntDecimalString;
    use ::quickcheck_macros::quickcheck;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(BigInt::from_str_radix("123", 10).unwrap(), BigInt::from(123));
        assert_eq!(BigInt::from_str_radix("-123", 10).unwrap(), BigInt::from(-123));
        assert_eq!(BigInt::from_str_radix("+123", 10).unwrap(), BigInt::from(123));
        assert_eq!(BigInt::from_str_radix("  123", 10).unwrap(), BigInt::from(123));
        assert_eq!(BigInt::from_str_radix("0", 10).unwrap(), BigInt::zero());
        assert_eq!(BigInt::from_str_radix("-0", 10).unwrap(), BigInt::zero());
    }

    #[test]
    fn test_parse_stops_at_first_non_digit() {
        assert_eq!(BigInt::from_str_radix("123abc", 10).unwrap(), BigInt::from(123));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            BigInt::from_str_radix("ff", 16).unwrap(),
            BigInt::from(255)
        );
        assert_eq!(
            BigInt::from_str_radix("FF", 16).unwrap(),
            BigInt::from(255)
        );
    }

    #[test]
    fn test_parse_large_number() {
        let s = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
        let a = BigInt::from_str_radix(s, 16).unwrap();
        assert_eq!(a.to_string_radix(16), s);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(BigInt::from_str_radix("", 10), Err(BigIntError::InvalidArgument));
        assert_eq!(BigInt::from_str_radix("+", 10), Err(BigIntError::InvalidArgument));
        assert_eq!(BigInt::from_str_radix("-", 10), Err(BigIntError::InvalidArgument));
        assert_eq!(BigInt::from_str_radix("abc", 10), Err(BigIntError::InvalidArgument));
        assert_eq!(BigInt::from_str_radix("123", 1), Err(BigIntError::InvalidArgument));
        assert_eq!(BigInt::from_str_radix("123", 37), Err(BigIntError::InvalidArgument));
    }

    #[test]
    fn test_from_str_trait() {
        let a: BigInt = "42".parse().unwrap();
        assert_eq!(a, BigInt::from(42));
    }

    #[quickcheck]
    fn decimal_roundtrip(s: SignedBigIntDecimalString) -> bool {
        let a = BigInt::from_str_radix(&s.0, 10).unwrap();
        a.to_string_radix(10) == normalize_decimal(&s.0)
    }

    /// Strips a lone `+`/`-` on an all-zero magnitude and any leading
    /// zeros, matching the canonical output of [`BigInt::to_string_radix`].
    fn normalize_decimal(s: &str) -> String {
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", s.strip_prefix('+').unwrap_or(s)),
        };
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            format!("{sign}{trimmed}")
        }
    }
}
