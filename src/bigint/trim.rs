// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Restores canonical form on a `BigInt`: no trailing zero digit in the
//! magnitude, and `sign` forced `Positive` whenever the magnitude is
//! empty. [`DigitVector::trim`] only handles the first half; `BigInt`'s
//! own `trim` additionally fixes up the sign.

use super::bigint_core::{BigInt, Sign};

impl BigInt {
    /// Drops trailing zero digits from the magnitude and clears the
    /// sign if the result is zero. Every algorithm that writes the
    /// magnitude directly (rather than through an operator that already
    /// produces a trimmed result) must call this before returning.
    pub(crate) fn trim(&mut self) {
        self.magnitude.trim();
        if self.magnitude.size() == 0 {
            self.sign = Sign::Positive;
        }
    }
}
