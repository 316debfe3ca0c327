// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scratch output buffers used by the digit-level algorithms.
//!
//! Each arithmetic algorithm (`add_digits`, `sub_digits`, `mul_digits`, …)
//! writes into a zero-filled `Vec<Digit>` sized to the operation's
//! worst-case output length, then reports the effective (trimmed) length
//! it actually used. These buffers are separate from [`DigitVector`]:
//! callers copy the trimmed prefix into a `DigitVector` once the result
//! is known, which keeps the hot loops working over plain slices.
//!
//! [`DigitVector`]: super::digit_vec::DigitVector

use super::digit::Digit;

/// A scratch vector of digits, little-endian, used as algorithm output.
pub(crate) type DigitVec = Vec<Digit>;

/// Creates a zeroed [`DigitVec`] with the specified `len`.
#[inline]
pub(crate) fn digitvec_with_len(len: usize) -> DigitVec {
    vec![0; len]
}

/// Creates a `DigitVec` with the specified digits, given in big-endian
/// order (for readability in test tables).
#[cfg(test)]
macro_rules! digits_be {
    ( $( $x:expr ),* ) => {
        {
            #[allow(unused_mut)]
            let mut temp_vec = Vec::new();
            $(
                temp_vec.push($x);
            )*
            temp_vec.reverse();
            temp_vec
        }
    };
}

#[cfg(test)]
pub(crate) use digits_be;
