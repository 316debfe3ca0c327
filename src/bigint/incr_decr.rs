// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sign-aware increment/decrement, absolute value, in-place negation,
//! sign queries and parity.

use super::bigint_core::{BigInt, Sign};

impl BigInt {
    /// Adds 1 to the magnitude in place, growing storage on a final carry.
    pub(crate) fn increment_abs(&mut self) {
        let mut i = 0;
        loop {
            if i == self.magnitude.size() {
                self.magnitude
                    .resize(i + 1)
                    .expect("magnitude exceeds the maximum representable digit count");
                self.magnitude[i] = 1;
                break;
            }

            let (sum, carry) = self.magnitude[i].overflowing_add(1);
            self.magnitude[i] = sum;
            if !carry {
                break;
            }
            i += 1;
        }
    }

    /// Subtracts 1 from the magnitude in place, then trims.
    ///
    /// The magnitude must be nonzero; the zero special case (`−1`) is
    /// handled by [`BigInt::decrement`] before reaching here.
    pub(crate) fn decrement_abs(&mut self) {
        debug_assert!(!self.is_zero());

        let mut i = 0;
        loop {
            let (diff, borrow) = self.magnitude[i].overflowing_sub(1);
            self.magnitude[i] = diff;
            if !borrow {
                break;
            }
            i += 1;
        }
        self.magnitude.trim();
    }

    /// `self += 1`, sign-aware: growing a positive magnitude, shrinking
    /// a negative one (crossing to positive zero when it hits it).
    pub fn increment(&mut self) {
        if self.sign == Sign::Negative {
            self.decrement_abs();
            if self.magnitude.size() == 0 {
                self.sign = Sign::Positive;
            }
        } else {
            self.increment_abs();
        }
    }

    /// `self -= 1`, sign-aware: zero flips to `−1`, a positive magnitude
    /// shrinks (crossing to positive zero when it hits it), a negative
    /// one grows.
    pub fn decrement(&mut self) {
        if self.sign == Sign::Negative {
            self.increment_abs();
        } else if self.is_zero() {
            self.increment_abs();
            self.sign = Sign::Negative;
        } else {
            self.decrement_abs();
        }
    }

    /// Prefix `++self`: increments in place and returns the new value.
    pub fn pre_increment(&mut self) -> &mut Self {
        self.increment();
        self
    }

    /// Postfix `self++`: returns the old value, then increments in place.
    pub fn post_increment(&mut self) -> Self {
        let old = self.clone();
        self.increment();
        old
    }

    /// Prefix `--self`: decrements in place and returns the new value.
    pub fn pre_decrement(&mut self) -> &mut Self {
        self.decrement();
        self
    }

    /// Postfix `self--`: returns the old value, then decrements in place.
    pub fn post_decrement(&mut self) -> Self {
        let old = self.clone();
        self.decrement();
        old
    }

    /// Returns a non-negative copy of `self`.
    pub fn abs(&self) -> Self {
        let mut result = self.clone();
        result.sign = Sign::Positive;
        result
    }

    /// Flips the sign in place. A no-op on zero.
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
    }

    /// Returns `-1`, `0`, or `1` according to the sign of `self`.
    pub fn sign(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.sign == Sign::Negative {
            -1
        } else {
            1
        }
    }

    pub(crate) fn is_even(&self) -> bool {
        match self.magnitude.size() {
            0 => true,
            _ => self.magnitude[0] & 1 == 0,
        }
    }

    pub(crate) fn is_odd(&self) -> bool {
        !self.is_even()
    }
}
