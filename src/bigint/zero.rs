// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::bigint_slice::BigUintSlice;
use crate::bigint::BigInt;

/// Returns true if `digits` represents a zero.
pub(crate) fn is_zero_digits(digits: &BigUintSlice) -> bool {
    digits.is_empty()
}

impl BigInt {
    /// Returns true if this value is zero.
    pub fn is_zero(&self) -> bool {
        is_zero_digits(self.as_digits())
    }
}

impl From<&BigInt> for bool {
    /// `true` for any nonzero value, `false` for zero.
    fn from(n: &BigInt) -> bool {
        !n.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::scratch::digits_be;

    #[test]
    fn test_is_zero_digits() {
        let digits: Vec<_> = digits_be!();
        assert!(is_zero_digits(&digits));

        let digits = digits_be!(6);
        assert!(!is_zero_digits(&digits));

        let digits = digits_be!(1, 2, 3);
        assert!(!is_zero_digits(&digits));
    }

    #[test]
    fn test_is_zero() {
        assert!(BigInt::from(0).is_zero());
        assert!(!BigInt::from(1).is_zero());
        assert!(!BigInt::from(-1).is_zero());
    }

    #[test]
    fn test_to_bool() {
        assert!(!bool::from(&BigInt::from(0)));
        assert!(bool::from(&BigInt::from(1)));
        assert!(bool::from(&BigInt::from(-1)));
    }
}
