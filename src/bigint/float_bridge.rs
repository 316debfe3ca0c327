// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridges between `BigInt` and `f64`: truncating construction,
//! saturating conversion back, and an IEEE-754-consistent ordered
//! comparison.

use super::bigint_core::{BigInt, Sign};
use super::digit::{Digit, DIGIT_BITS};
use super::error::BigIntError;
use std::cmp::Ordering;

const DIGIT_BASE: f64 = (1u128 << DIGIT_BITS) as f64;

impl BigInt {
    /// Truncates `d` toward zero into a `BigInt`. Fails with
    /// [`BigIntError::FromFloat`] on `NaN` or `±Inf`.
    pub fn from_f64(d: f64) -> Result<BigInt, BigIntError> {
        if !d.is_finite() {
            return Err(BigIntError::FromFloat);
        }

        let sign = if d.is_sign_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let mut d = d.abs();

        if d < 1.0 {
            return Ok(BigInt::zero());
        }

        let mut len = 0usize;
        let mut scale = d;
        while scale >= 1.0 {
            scale /= DIGIT_BASE;
            len += 1;
        }

        let mut digits = vec![0 as Digit; len];
        for slot in digits.iter_mut().rev() {
            // `d` is always < DIGIT_BASE here by construction of `len`.
            let digit_value = d.trunc();
            *slot = digit_value as Digit;
            d = (d - digit_value) * DIGIT_BASE;
        }

        let digits_len = digits.len();
        Ok(BigInt::new(digits, digits_len, sign))
    }

    /// Converts to the nearest representable `f64`, saturating to `±Inf`
    /// for magnitudes beyond `f64`'s range.
    pub fn to_f64(&self) -> f64 {
        let mut r = 0.0_f64;
        for &digit in self.as_digits().iter().rev() {
            r = r * DIGIT_BASE + digit as f64;
        }
        if self.sign == Sign::Negative {
            -r
        } else {
            r
        }
    }
}

impl TryFrom<f64> for BigInt {
    type Error = BigIntError;

    fn try_from(d: f64) -> Result<Self, Self::Error> {
        BigInt::from_f64(d)
    }
}

impl PartialEq<f64> for BigInt {
    fn eq(&self, other: &f64) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<f64> for BigInt {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        if other.is_nan() {
            return None;
        }
        if other.is_infinite() {
            return Some(if *other > 0.0 {
                Ordering::Less
            } else {
                Ordering::Greater
            });
        }

        // `to_f64` saturates, but finite `self` values never require
        // saturation to compare against a finite `other`: any magnitude
        // that would saturate is already decisively larger in magnitude
        // than any finite f64.
        self.to_f64().partial_cmp(other)
    }
}
