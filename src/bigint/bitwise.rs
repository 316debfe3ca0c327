// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bitwise AND/OR/XOR/NOT, emulated over the sign-magnitude
//! representation through a transient two's-complement window.
//!
//! A negative operand's two's-complement digits at a chosen window
//! width `W` are `~(mag zero-padded to W) + 1`; this is exact (no
//! further sign-extension bookkeeping needed) because the add-1 carry
//! never escapes a window wide enough to hold the magnitude.

use super::bigint_core::{BigInt, Sign};
use super::digit::Digit;
use super::len::len_digits;
use super::scratch::DigitVec;
use std::cmp::max;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

fn twos_complement_window(x: &BigInt, width: usize) -> DigitVec {
    let digits = x.as_digits();
    let mut window: DigitVec = vec![0; width];
    window[..digits.len()].copy_from_slice(digits);

    if x.is_sign_negative() {
        for d in window.iter_mut() {
            *d = !*d;
        }
        let mut carry = true;
        for d in window.iter_mut() {
            if !carry {
                break;
            }
            let (sum, c) = d.overflowing_add(1);
            *d = sum;
            carry = c;
        }
    }

    window
}

/// Inverts a negative bitwise result's two's-complement window back
/// into its magnitude, in place.
fn recover_magnitude(window: &mut [Digit]) {
    for d in window.iter_mut() {
        *d = !*d;
    }
    let mut carry = true;
    for d in window.iter_mut() {
        if !carry {
            break;
        }
        let (sum, c) = d.overflowing_add(1);
        *d = sum;
        carry = c;
    }
}

fn bitwise_combine(
    a: &BigInt,
    b: &BigInt,
    width: usize,
    combine: impl Fn(Digit, Digit) -> Digit,
    result_negative: bool,
) -> BigInt {
    let wa = twos_complement_window(a, width);
    let wb = twos_complement_window(b, width);
    let mut result: DigitVec = wa.iter().zip(wb.iter()).map(|(&x, &y)| combine(x, y)).collect();

    if result_negative {
        recover_magnitude(&mut result);
    }

    let len = len_digits(&result);
    let sign = if result_negative {
        Sign::Negative
    } else {
        Sign::Positive
    };
    BigInt::new(result, len, sign)
}

impl<'a, 'b> BitAnd<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn bitand(self, rhs: &BigInt) -> Self::Output {
        let width = max(self.as_digits().len(), rhs.as_digits().len());
        let negative = self.is_sign_negative() && rhs.is_sign_negative();
        bitwise_combine(self, rhs, width, |x, y| x & y, negative)
    }
}

impl<'a> BitAnd<&'a BigInt> for BigInt {
    type Output = BigInt;
    fn bitand(self, rhs: &Self) -> Self::Output {
        (&self).bitand(rhs)
    }
}

impl BitAnd for BigInt {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        (&self).bitand(&rhs)
    }
}

impl<'a> BitAndAssign<&'a BigInt> for BigInt {
    fn bitand_assign(&mut self, rhs: &'a BigInt) {
        *self = (&*self).bitand(rhs);
    }
}

impl BitAndAssign for BigInt {
    fn bitand_assign(&mut self, rhs: Self) {
        *self &= &rhs;
    }
}

impl<'a, 'b> BitOr<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn bitor(self, rhs: &BigInt) -> Self::Output {
        let width = max(self.as_digits().len(), rhs.as_digits().len());
        let negative = self.is_sign_negative() || rhs.is_sign_negative();
        bitwise_combine(self, rhs, width, |x, y| x | y, negative)
    }
}

impl<'a> BitOr<&'a BigInt> for BigInt {
    type Output = BigInt;
    fn bitor(self, rhs: &Self) -> Self::Output {
        (&self).bitor(rhs)
    }
}

impl BitOr for BigInt {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        (&self).bitor(&rhs)
    }
}

impl<'a> BitOrAssign<&'a BigInt> for BigInt {
    fn bitor_assign(&mut self, rhs: &'a BigInt) {
        *self = (&*self).bitor(rhs);
    }
}

impl BitOrAssign for BigInt {
    fn bitor_assign(&mut self, rhs: Self) {
        *self |= &rhs;
    }
}

impl<'a, 'b> BitXor<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn bitxor(self, rhs: &BigInt) -> Self::Output {
        // Widened by one digit to hold the carry from the two's-complement
        // conversion when the operands' magnitudes are equally wide.
        let width = max(self.as_digits().len(), rhs.as_digits().len()) + 1;
        let negative = self.is_sign_negative() != rhs.is_sign_negative();
        bitwise_combine(self, rhs, width, |x, y| x ^ y, negative)
    }
}

impl<'a> BitXor<&'a BigInt> for BigInt {
    type Output = BigInt;
    fn bitxor(self, rhs: &Self) -> Self::Output {
        (&self).bitxor(rhs)
    }
}

impl BitXor for BigInt {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self::Output {
        (&self).bitxor(&rhs)
    }
}

impl<'a> BitXorAssign<&'a BigInt> for BigInt {
    fn bitxor_assign(&mut self, rhs: &'a BigInt) {
        *self = (&*self).bitxor(rhs);
    }
}

impl BitXorAssign for BigInt {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self ^= &rhs;
    }
}

impl<'a> Not for &'a BigInt {
    type Output = BigInt;

    /// `~x == -x - 1`.
    fn not(self) -> Self::Output {
        let mut result = -self.clone();
        result.decrement();
        result
    }
}

impl Not for BigInt {
    type Output = Self;
    fn not(self) -> Self::Output {
        (&self).not()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_both_positive() {
        assert_eq!(BigInt::from(0b1100) & BigInt::from(0b1010), BigInt::from(0b1000));
    }

    #[test]
    fn test_or_both_positive() {
        assert_eq!(BigInt::from(0b1100) | BigInt::from(0b1010), BigInt::from(0b1110));
    }

    #[test]
    fn test_xor_both_positive() {
        assert_eq!(BigInt::from(0b1100) ^ BigInt::from(0b1010), BigInt::from(0b0110));
    }

    #[test]
    fn test_not_matches_neg_minus_one() {
        for n in [-5, -1, 0, 1, 5] {
            let a = BigInt::from(n);
            assert_eq!(!a.clone(), -a - BigInt::one());
        }
    }

    #[test]
    fn test_and_with_negative_matches_twos_complement_semantics() {
        // -1 is all-ones in two's complement: AND with anything is identity.
        assert_eq!(BigInt::from(-1) & BigInt::from(42), BigInt::from(42));
        // -1 & -1 == -1
        assert_eq!(BigInt::from(-1) & BigInt::from(-1), BigInt::from(-1));
    }

    #[test]
    fn test_or_with_negative_one_is_negative_one() {
        assert_eq!(BigInt::from(-1) | BigInt::from(42), BigInt::from(-1));
    }

    #[test]
    fn test_xor_negative_one_is_not() {
        assert_eq!(BigInt::from(-1) ^ BigInt::from(42), !BigInt::from(42));
    }

    #[test]
    fn test_compound_assignment() {
        let mut a = BigInt::from(0b1100);
        a &= BigInt::from(0b1010);
        assert_eq!(a, BigInt::from(0b1000));

        let mut b = BigInt::from(0b1100);
        b |= BigInt::from(0b0011);
        assert_eq!(b, BigInt::from(0b1111));

        let mut c = BigInt::from(0b1100);
        c ^= BigInt::from(0b1010);
        assert_eq!(c, BigInt::from(0b0110));
    }
}
