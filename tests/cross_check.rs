// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use bigint_core::bigint::BigInt;
use devtools::hex::decimal_to_hex;

#[test]
fn test_to_string_radix_matches_independent_decimal_to_hex() {
    let decimals = [
        "0",
        "1",
        "255",
        "65536",
        "123456789012345678901234567890",
        "53093026025011841560144140884953714701527835907384159075569471996245155392944",
    ];

    for decimal in decimals {
        let n = BigInt::from_str_radix(decimal, 10).unwrap();
        assert_eq!(n.to_string_radix(16), decimal_to_hex(decimal));
    }
}

#[test]
fn test_from_str_radix_hex_matches_independent_decimal_to_hex() {
    let decimal = "79228162514264337593543950335";
    let hex = decimal_to_hex(decimal);

    let from_decimal = BigInt::from_str_radix(decimal, 10).unwrap();
    let from_hex = BigInt::from_str_radix(&hex, 16).unwrap();
    assert_eq!(from_decimal, from_hex);
}
