// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines the "base" of multiple precision integers (big integers).
//!
//! Big integers are implemented as base b numbers.
//! While it is helpful to realize the situation when b = 10,
//! a Rust n-bit unsigned integer type is used as "digit".
//!
//! For any unsigned integer type chosen as digit,
//! a larger one must exist and be used as "double-digit".
//! Arithmetic operations will often be performed on the double-digit type.
//!
//! The digit width is a compile-time choice: 32 bits by default, or 64
//! bits with the `u64_digit` feature enabled.

#[cfg(not(feature = "u64_digit"))]
pub type Digit = u32;
#[cfg(feature = "u64_digit")]
pub type Digit = u64;

#[cfg(not(feature = "u64_digit"))]
pub(crate) type DoubleDigit = u64;
#[cfg(feature = "u64_digit")]
pub(crate) type DoubleDigit = u128;

/// Number of bits in a digit.
pub(crate) const DIGIT_BITS: u32 = Digit::BITS;

/// Number of bytes in a digit.
pub const DIGIT_BYTES: u32 = Digit::BITS / 8;

/// Hard ceiling on the number of digits a magnitude may hold.
///
/// `min(usize::MAX / size_of::<Digit>(), u64::MAX / W)`, per the size
/// bound invariant: the first term guards against a digit vector that
/// could not be addressed in memory, the second against a bit count
/// (`size * W`) that would not fit a `u64`.
pub const MAX_DIGITS: usize = {
    let by_memory = usize::MAX / std::mem::size_of::<Digit>();
    let by_bit_count = (u64::MAX / DIGIT_BITS as u64) as usize;
    if by_memory < by_bit_count {
        by_memory
    } else {
        by_bit_count
    }
};

#[cfg(test)]
mod tests {
    use super::Digit;

    #[test]
    #[allow(unused_comparisons)]
    fn digit_is_unsigned() {
        assert!(Digit::MIN >= 0);
    }

    #[test]
    fn max_digits_is_positive() {
        assert!(super::MAX_DIGITS > 0);
    }
}
