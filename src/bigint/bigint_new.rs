// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements `BigInt` constructors, including construction from every
//! native integer width.

use super::bigint_core::{BigInt, Sign};
use super::digit::{Digit, DIGIT_BITS};
use super::digit_vec::DigitVector;
use super::scratch::DigitVec;

impl BigInt {
    /// Creates and initializes a `BigInt` from raw little-endian digits.
    ///
    /// This is the designated constructor that all other constructors
    /// should call. `digits` is truncated to `len`, then trimmed; the
    /// sign is forced to `Positive` whenever the resulting magnitude is
    /// empty, so canonical form always holds on return.
    pub(crate) fn new(mut digits: DigitVec, len: usize, sign: Sign) -> BigInt {
        digits.truncate(len);
        let magnitude = DigitVector::from(digits);
        let sign = if magnitude.size() == 0 {
            Sign::Positive
        } else {
            sign
        };
        BigInt { magnitude, sign }
    }

    /// Creates a `BigInt` from `u128` with an explicit sign.
    pub(crate) fn from_u128_with_sign(mut n: u128, sign: Sign) -> BigInt {
        let mut digits: DigitVec = Vec::new();
        while n > 0 {
            digits.push(n as Digit);
            n >>= DIGIT_BITS;
        }
        let len = digits.len();
        Self::new(digits, len, sign)
    }

    /// Creates a `BigInt` from `i128`.
    pub(crate) fn from_i128(i: i128) -> BigInt {
        if i >= 0 {
            Self::from_u128_with_sign(i as u128, Sign::Positive)
        } else {
            // The absolute value of i128::MIN cannot be represented as an i128,
            // and attempting to calculate it will cause an overflow.
            let (negated, overflow) = i.overflowing_neg();
            let n = if overflow {
                // 1. Signed integers are represented by "two's complement",
                //     e.g., `i8::MIN` is represented by `0b10000000`.
                // 2. Rust's numeric cast, `as`, is a no-op for casting
                //     between two integers of the same size (e.g., i8 -> u8).
                // 3. Combines 1 and 2, we can negate `i128::MIN` by `i128::MIN as u128`.
                i as u128
            } else {
                negated as u128
            };
            Self::from_u128_with_sign(n, Sign::Negative)
        }
    }

    /// The additive identity.
    pub fn zero() -> BigInt {
        BigInt {
            magnitude: DigitVector::new(),
            sign: Sign::Positive,
        }
    }

    /// The multiplicative identity.
    pub fn one() -> BigInt {
        BigInt::from(1)
    }
}

/// Implements `From<$t> for BigInt` for a signed native integer width.
macro_rules! impl_bigint_from_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for BigInt {
                fn from(n: $t) -> Self {
                    BigInt::from_i128(n as i128)
                }
            }
        )*
    };
}

/// Implements `From<$t> for BigInt` for an unsigned native integer width.
macro_rules! impl_bigint_from_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for BigInt {
                fn from(n: $t) -> Self {
                    BigInt::from_u128_with_sign(n as u128, Sign::Positive)
                }
            }
        )*
    };
}

impl_bigint_from_signed!(i8, i16, i32, i64, i128, isize);
impl_bigint_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl BigInt {
    /// Packs the low 128 bits of the magnitude into a `u128`, least
    /// significant digit first. Digits beyond the 128th bit are dropped.
    fn magnitude_low_u128(&self) -> u128 {
        let digits = self.as_digits();
        let take = (u128::BITS as usize / DIGIT_BITS as usize).min(digits.len());
        let mut result: u128 = 0;
        for (i, &digit) in digits.iter().take(take).enumerate() {
            result |= (digit as u128) << (i * DIGIT_BITS as usize);
        }
        result
    }

    /// The low 128 bits of `self` in two's-complement form: the masked
    /// magnitude unchanged when non-negative, its 128-bit two's-complement
    /// negation otherwise.
    fn truncated_u128_bits(&self) -> u128 {
        let low = self.magnitude_low_u128();
        if self.is_sign_negative() {
            low.wrapping_neg()
        } else {
            low
        }
    }
}

/// Implements a truncating `BigInt -> $t` conversion for a native integer
/// width: `$method` masks to the low `$t::BITS` bits of the two's-complement
/// value, the same "wrap, don't error" contract as Rust's own `as` cast
/// between integer types. Also implements `From<&BigInt> for $t` so the
/// conversion composes with the rest of `std`.
macro_rules! impl_bigint_to_native {
    ($(($t:ty, $method:ident)),* $(,)?) => {
        impl BigInt {
            $(
                #[doc = concat!(
                    "Truncates to the low ", stringify!($t),
                    " bits of the two's-complement value (masking, not saturating or erroring)."
                )]
                pub fn $method(&self) -> $t {
                    self.truncated_u128_bits() as $t
                }
            )*
        }

        $(
            impl From<&BigInt> for $t {
                fn from(n: &BigInt) -> $t {
                    n.$method()
                }
            }
        )*
    };
}

impl_bigint_to_native!(
    (i8, to_i8),
    (i16, to_i16),
    (i32, to_i32),
    (i64, to_i64),
    (i128, to_i128),
    (isize, to_isize),
    (u8, to_u8),
    (u16, to_u16),
    (u32, to_u32),
    (u64, to_u64),
    (u128, to_u128),
    (usize, to_usize),
);
