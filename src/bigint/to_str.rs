// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Formats a `BigInt` as a base-`b` string, by repeatedly dividing a
//! scratch copy of the magnitude by the largest power of `b` that
//! fits a single digit and collecting the remainders.

use super::bigint_core::BigInt;
use super::digit::{Digit, DoubleDigit};
use super::parse::radix_digit_batch;
use std::fmt;
use std::fmt::Display;

const DIGIT_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Divides the magnitude in place by the single digit `divisor`,
/// returning the remainder. Trims the result.
fn div_digit_in_place(value: &mut BigInt, divisor: Digit) -> Digit {
    let mut remainder: DoubleDigit = 0;
    for i in (0..value.magnitude.size()).rev() {
        let dividend = (remainder << Digit::BITS) | value.magnitude[i] as DoubleDigit;
        value.magnitude[i] = (dividend / divisor as DoubleDigit) as Digit;
        remainder = dividend % divisor as DoubleDigit;
    }
    value.magnitude.trim();
    remainder as Digit
}

impl BigInt {
    /// Renders `self` in the given `radix` (`[2, 36]`): `"0"` for zero,
    /// otherwise the minimal base-`radix` representation with a leading
    /// `-` for negative values.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside `[2, 36]`.
    pub fn to_string_radix(&self, radix: u32) -> String {
        assert!((2..=36).contains(&radix), "radix must be within [2, 36]");

        if self.is_zero() {
            return "0".to_string();
        }

        let (batch_len, batch_base) = radix_digit_batch(radix);
        let mut scratch = self.abs();
        let mut chars = Vec::with_capacity(self.bit_length() + 1);

        while !scratch.is_zero() {
            let mut remainder = div_digit_in_place(&mut scratch, batch_base);
            let is_last_batch = scratch.is_zero();

            // Unpacks the batch remainder into up to `batch_len` base-`radix`
            // characters, least significant first.
            let radix_digit = radix as Digit;
            let mut batch_chars = Vec::with_capacity(batch_len);
            for _ in 0..batch_len {
                batch_chars.push(DIGIT_CHARS[(remainder % radix_digit) as usize]);
                remainder /= radix_digit;
            }
            if is_last_batch {
                while let Some(&b'0') = batch_chars.last() {
                    batch_chars.pop();
                }
            }
            chars.extend(batch_chars);
        }

        if self.is_sign_negative() {
            chars.push(b'-');
        }
        chars.reverse();

        // Every character above came from `DIGIT_CHARS`, which is ASCII.
        String::from_utf8(chars).expect("digit characters are always valid ASCII")
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_radix(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_string_decimal() {
        assert_eq!(BigInt::zero().to_string(), "0");
        assert_eq!(BigInt::from(123).to_string(), "123");
        assert_eq!(BigInt::from(-123).to_string(), "-123");
    }

    #[test]
    fn test_to_string_radix() {
        assert_eq!(BigInt::from(255).to_string_radix(16), "ff");
        assert_eq!(BigInt::from(-255).to_string_radix(16), "-ff");
        assert_eq!(BigInt::from(5).to_string_radix(2), "101");
    }

    #[test]
    fn test_roundtrip_through_multiple_radixes() {
        let a = BigInt::from_str_radix(
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            16,
        )
        .unwrap();
        for radix in [2, 8, 10, 16, 36] {
            let s = a.to_string_radix(radix);
            let b = BigInt::from_str_radix(&s, radix).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    #[should_panic]
    fn test_to_string_radix_out_of_range() {
        BigInt::from(1).to_string_radix(37);
    }
}
