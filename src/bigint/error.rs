// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The error type surfaced by fallible `BigInt` operations.

use std::fmt;
use std::fmt::Display;

/// An error returned by a fallible [`BigInt`](super::BigInt) operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BigIntError {
    /// A string could not be parsed: empty input, a sign with no digits,
    /// a radix outside `[2, 36]`, or no valid digit before the first
    /// non-digit character.
    InvalidArgument,
    /// Division or remainder was attempted with a zero divisor.
    DivisionByZero,
    /// The result would require more than [`MAX_DIGITS`](super::digit::MAX_DIGITS)
    /// digits, or a shift count overflowed `u64`.
    Overflow,
    /// A `f64` source value was NaN or infinite.
    FromFloat,
}

impl Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            BigIntError::InvalidArgument => "invalid argument",
            BigIntError::DivisionByZero => "division by zero",
            BigIntError::Overflow => "operation would overflow the digit bound",
            BigIntError::FromFloat => "value is not a finite number",
        };
        write!(f, "{message}")
    }
}

impl std::error::Error for BigIntError {}
