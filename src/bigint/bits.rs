// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bit-level inspection of the magnitude: length, individual bit
//! access, and a little-endian bit vector used by the two's-complement
//! bridge in `bitwise.rs`.

use super::bigint_core::BigInt;
use crate::bigint::bigint_slice::{is_valid_biguint_slice, BigUintSlice};
use crate::bigint::digit::Digit;
use crate::bigint::zero::is_zero_digits;

pub(crate) fn bit_len_digits(a: &BigUintSlice) -> usize {
    debug_assert!(is_valid_biguint_slice(a));

    if is_zero_digits(a) {
        return 0;
    }

    let most_significant_digit = a[a.len() - 1];
    a.len() * Digit::BITS as usize - most_significant_digit.leading_zeros() as usize
}

impl BigInt {
    /// Returns the number of bits required to represent the magnitude,
    /// i.e. `floor(log2(|self|)) + 1`. 0 is returned for the value zero.
    /// The sign is not reflected in the result.
    pub fn bit_length(&self) -> usize {
        bit_len_digits(self.as_digits())
    }

    /// Returns the value of the magnitude's bit at position `i` (0 is
    /// the least significant bit). Out-of-range positions are `false`.
    /// The sign is not reflected: both `5` and `-5` report the same bits.
    pub fn test_bit(&self, i: usize) -> bool {
        let digit_index = i / Digit::BITS as usize;
        let bit_index = i % Digit::BITS as usize;

        let digits = self.as_digits();
        match digits.get(digit_index) {
            Some(&digit) => digit & (1 << bit_index) != 0,
            None => false,
        }
    }

    /// Sets the magnitude's bit at position `i` to 1, growing storage as needed.
    /// The sign is left untouched.
    pub fn set_bit(&mut self, i: usize) {
        let digit_index = i / Digit::BITS as usize;
        let bit_index = i % Digit::BITS as usize;

        if digit_index >= self.magnitude.size() {
            self.magnitude
                .resize(digit_index + 1)
                .expect("bit index exceeds the maximum representable magnitude");
        }
        self.magnitude[digit_index] |= 1 << bit_index;
    }

    pub(crate) fn le_bits(&self) -> Vec<bool> {
        if self.is_zero() {
            return vec![];
        }

        let digits = self.as_digits();
        let mut bits = Vec::with_capacity(self.bit_length());

        if let Some((last, elements)) = digits.split_last() {
            for digit in elements {
                let mut digit = *digit;
                for _ in 0..Digit::BITS {
                    bits.push(digit & 1 == 1);
                    digit >>= 1;
                }
            }

            // Handles the most significant digit
            let mut digit = *last;
            for _ in 0..(Digit::BITS - digit.leading_zeros()) {
                bits.push(digit & 1 == 1);
                digit >>= 1;
            }
        } else {
            panic!("invalid input")
        }

        debug_assert_eq!(bits.len(), self.bit_length());
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::digit::{Digit, DoubleDigit};

    #[test]
    fn test_bit_length() {
        let data = [
            (BigInt::from(0), 0),
            (BigInt::from(1), 1),
            (BigInt::from(Digit::MAX), Digit::BITS),
            (BigInt::from(Digit::MAX / 2), Digit::BITS - 1),
            (BigInt::from(Digit::MAX as DoubleDigit + 1), Digit::BITS + 1),
        ];

        for (a, bit_length) in data {
            assert_eq!(a.bit_length(), bit_length as usize);
        }
    }

    #[test]
    fn test_bit_length_ignores_sign() {
        assert_eq!(BigInt::from(-5).bit_length(), BigInt::from(5).bit_length());
    }

    #[test]
    fn test_test_bit() {
        let a = BigInt::from(0b1010_i32);
        assert!(!a.test_bit(0));
        assert!(a.test_bit(1));
        assert!(!a.test_bit(2));
        assert!(a.test_bit(3));
        assert!(!a.test_bit(100));
    }

    #[test]
    fn test_set_bit() {
        let mut a = BigInt::zero();
        a.set_bit(0);
        a.set_bit(3);
        assert_eq!(a, BigInt::from(0b1001_i32));

        let mut b = BigInt::zero();
        b.set_bit(100);
        assert!(b.test_bit(100));
        assert!(b > BigInt::from(u64::MAX));
    }
}
