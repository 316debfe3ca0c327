// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Optional `serde` support: `BigInt` (de)serializes as its decimal
//! string, never as the internal digit representation.

use super::bigint_core::BigInt;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_radix(10))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        BigInt::from_str_radix(&s, 10).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_as_decimal_string() {
        let a = BigInt::from(-12345);
        assert_eq!(serde_json::to_string(&a).unwrap(), "\"-12345\"");
    }

    #[test]
    fn test_deserialize_from_decimal_string() {
        let a: BigInt = serde_json::from_str("\"-12345\"").unwrap();
        assert_eq!(a, BigInt::from(-12345));
    }

    #[test]
    fn test_deserialize_rejects_invalid_string() {
        let result: Result<BigInt, _> = serde_json::from_str("\"not a number\"");
        assert!(result.is_err());
    }
}
