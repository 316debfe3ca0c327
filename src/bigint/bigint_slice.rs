// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::bigint_core::BigInt;
use super::digit::Digit;
use super::len::len_digits;

/// A slice of digits representing a big unsigned integer.
///
/// - Digits are stored in little-endian order.
/// - Must not have any trailing zero padding, that is:
///   `assert_eq!(len_digits(a), a.len())`.
/// - Zero is represented by the empty slice.
/// - Does not have a sign.
pub(crate) type BigUintSlice = [Digit];

#[inline]
pub(crate) fn is_valid_biguint_slice(slice: &BigUintSlice) -> bool {
    len_digits(slice) == slice.len()
}

impl BigInt {
    /// Returns a `BigUintSlice` of this `BigInt`'s digits.
    pub(crate) fn as_digits(&self) -> &BigUintSlice {
        self.magnitude.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::scratch::digits_be;

    #[test]
    fn empty_slice_is_valid() {
        let a: Vec<Digit> = digits_be!();
        assert!(is_valid_biguint_slice(&a));
    }

    #[test]
    fn padded_slice_is_invalid() {
        let a = digits_be!(0, 3, 2, 1);
        assert!(!is_valid_biguint_slice(&a));
    }
}
