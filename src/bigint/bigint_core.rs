// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines `BigInt`.

use super::digit_vec::DigitVector;

/// An arbitrary-precision signed integer.
///
/// Stored as sign-magnitude: an unsigned [`DigitVector`] holding the
/// magnitude, least-significant digit first, and a [`Sign`] flag.
/// Canonical form has no trailing zero digit in the magnitude, and
/// `sign` is always `Positive` when the magnitude is empty (the value
/// zero), so zero has exactly one representation.
#[derive(Clone, Debug)]
pub struct BigInt {
    pub(crate) magnitude: DigitVector,
    pub(crate) sign: Sign,
}

impl BigInt {
    pub(crate) fn is_sign_negative(&self) -> bool {
        self.sign == Sign::Negative
    }
}

/// The sign of a [`BigInt`].
///
/// Zero is always `Positive` in canonical form; "negative zero" is not
/// representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Sign {
    Positive,
    Negative,
}
