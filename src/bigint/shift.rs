// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements shift operations.
//!
//! Right shift follows floor semantics (`x >> n == floor(x / 2^n)`),
//! matching Python's and most arbitrary-precision libraries' contract
//! rather than C's implementation-defined behavior on negative values.
//! Left shift is a pure magnitude shift, checked against the maximum
//! representable digit count.

use super::bigint_core::{BigInt, Sign};
use super::bigint_slice::BigUintSlice;
use super::bits::bit_len_digits;
use super::digit::{Digit, DIGIT_BITS, MAX_DIGITS};
use super::error::BigIntError;
use super::len::len_digits;
use super::scratch::DigitVec;
use super::zero::is_zero_digits;
use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

/// Shifts `digits` right by `n` bits, returning the shifted magnitude
/// and whether any nonzero bit was discarded in the process (needed by
/// the caller to round toward negative infinity for negative operands).
fn shr_digits(digits: &BigUintSlice, n: usize) -> (DigitVec, bool) {
    let bit_len = bit_len_digits(digits);
    if n >= bit_len {
        return (DigitVec::new(), bit_len > 0);
    }

    let shifting_digits_len = n / DIGIT_BITS as usize;
    let shifting_bits_len = n % DIGIT_BITS as usize;

    let mut any_bit_lost = digits[..shifting_digits_len].iter().any(|&d| d != 0);

    let mut result: DigitVec = digits[shifting_digits_len..].to_vec();

    if shifting_bits_len > 0 {
        let mask = (1 as Digit)
            .checked_shl(shifting_bits_len as u32)
            .unwrap_or(0)
            .wrapping_sub(1);
        if result[0] & mask != 0 {
            any_bit_lost = true;
        }

        let next_shifting_bits_len = DIGIT_BITS as usize - shifting_bits_len;
        let mut carry: Digit = 0;
        for digit in result.iter_mut().rev() {
            let t = *digit << next_shifting_bits_len;
            *digit = *digit >> shifting_bits_len | carry;
            carry = t;
        }
    }

    let len = len_digits(&result);
    result.truncate(len);
    (result, any_bit_lost)
}

/// Shifts `digits` left by `n` bits. Fails with [`BigIntError::Overflow`]
/// if the result would need more than [`MAX_DIGITS`] digits.
fn shl_digits(digits: &BigUintSlice, n: usize) -> Result<DigitVec, BigIntError> {
    if is_zero_digits(digits) {
        return Ok(DigitVec::new());
    }

    let shifting_digits_len = n / DIGIT_BITS as usize;
    let shifting_bits_len = n % DIGIT_BITS as usize;

    // +1 for the possible carry at the most significant digit.
    let new_len = digits.len() + shifting_digits_len + 1;
    if new_len > MAX_DIGITS {
        return Err(BigIntError::Overflow);
    }

    let mut result: DigitVec = vec![0; new_len];
    result[shifting_digits_len..shifting_digits_len + digits.len()].copy_from_slice(digits);

    if shifting_bits_len > 0 {
        let next_shifting_bits_len = DIGIT_BITS as usize - shifting_bits_len;
        let mut carry: Digit = 0;
        for digit in result.iter_mut() {
            let t = *digit >> next_shifting_bits_len;
            *digit = *digit << shifting_bits_len | carry;
            carry = t;
        }
    }

    let len = len_digits(&result);
    result.truncate(len);
    Ok(result)
}

impl BigInt {
    /// Shifts left by `n` bits, or `Overflow` if the magnitude would
    /// exceed the maximum representable digit count.
    pub fn checked_shl(&self, n: usize) -> Result<BigInt, BigIntError> {
        let digits = shl_digits(self.as_digits(), n)?;
        let len = digits.len();
        Ok(BigInt::new(digits, len, self.sign))
    }
}

impl<'a> Shr<usize> for &'a BigInt {
    type Output = BigInt;

    /// Rounds toward negative infinity: `(-7) >> 1 == -4`.
    fn shr(self, n: usize) -> Self::Output {
        let (magnitude, any_bit_lost) = shr_digits(self.as_digits(), n);
        let len = magnitude.len();
        let truncated = BigInt::new(magnitude, len, Sign::Positive);

        if self.sign == Sign::Negative && any_bit_lost {
            -(truncated + BigInt::one())
        } else if self.sign == Sign::Negative {
            -truncated
        } else {
            truncated
        }
    }
}

impl Shr<usize> for BigInt {
    type Output = Self;

    fn shr(self, n: usize) -> Self::Output {
        (&self).shr(n)
    }
}

impl ShrAssign<usize> for BigInt {
    fn shr_assign(&mut self, n: usize) {
        *self = (&*self).shr(n);
    }
}

impl<'a> Shl<usize> for &'a BigInt {
    type Output = BigInt;

    /// # Panics
    ///
    /// Panics if the result would need more digits than the maximum
    /// representable count. See [`BigInt::checked_shl`] for a
    /// non-panicking version.
    fn shl(self, n: usize) -> Self::Output {
        self.checked_shl(n).expect("attempt to shift left with overflow")
    }
}

impl Shl<usize> for BigInt {
    type Output = Self;

    fn shl(self, n: usize) -> Self::Output {
        (&self).shl(n)
    }
}

impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, n: usize) {
        *self = (&*self).shl(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_tools::quickcheck::BigIntHexString;
    use ::quickcheck_macros::quickcheck;

    #[test]
    fn test_shift_right_matches_div_by_power_of_two() {
        let mut a = BigInt::from_str_radix("c8f14181b339ccd9092ce946d7a4c7ebc3708632ca4714ec67fb", 16).unwrap();
        let mut b = a.clone();

        assert_eq!(a.clone() >> 0usize, b);

        for _ in 0..208 {
            a = a >> 1usize;
            b = b / BigInt::from(2);
            assert_eq!(a, b);
        }
        assert_eq!(a, BigInt::zero());
    }

    #[test]
    fn test_shift_right_floors_negative_values() {
        assert_eq!(BigInt::from(-7) >> 1usize, BigInt::from(-4));
        assert_eq!(BigInt::from(-8) >> 1usize, BigInt::from(-4));
        assert_eq!(BigInt::from(-1) >> 1usize, BigInt::from(-1));
        assert_eq!(BigInt::from(7) >> 1usize, BigInt::from(3));
    }

    #[quickcheck]
    fn shift_right_compare_with_floor_div(hex: BigIntHexString, negative: bool, n: u8) -> bool {
        let mut a = BigInt::from_str_radix(hex.0.as_str(), 16).unwrap();
        if negative {
            a = -a;
        }

        // Limits shifting bits within [0, 2^4), so `divisor` won't overflow.
        let n = (n & 0x0f) as usize;
        let divisor = BigInt::from(2u32.pow(n as u32));

        let quotient = {
            let (q, r) = a.checked_div_rem(&divisor).unwrap();
            if r.is_zero() || !a.is_sign_negative() {
                q
            } else {
                q - BigInt::one()
            }
        };

        (&a >> n) == quotient
    }

    #[test]
    fn test_shift_left_matches_mul_by_power_of_two() {
        let mut a = BigInt::from_str_radix("c8f14181b339ccd9092ce946d7a4c7ebc3708632ca4714ec67fb", 16).unwrap();
        let mut b = a.clone();

        for _ in 0..208 {
            a = a << 1usize;
            b = b * BigInt::from(2);
            assert_eq!(a, b);
        }
    }

    #[quickcheck]
    fn shift_left_compare_with_mul(hex: BigIntHexString, n: u8) -> bool {
        let a = BigInt::from_str_radix(hex.0.as_str(), 16).unwrap();
        let b = a.clone();

        // Limits shifting bits within [0, 2^4), so `multiplicand` won't overflow.
        let n = (n & 0x0f) as usize;
        let multiplicand = BigInt::from(2u32.pow(n as u32));

        let b = b * multiplicand;
        (&a << n) == b
    }

    #[test]
    fn test_checked_shl_overflow() {
        let one = BigInt::one();
        assert_eq!(one.checked_shl(MAX_DIGITS * DIGIT_BITS as usize), Err(BigIntError::Overflow));
    }
}
