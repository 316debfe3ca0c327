// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An arbitrary-precision signed integer: sign-magnitude storage,
//! schoolbook addition/subtraction/multiplication, Knuth Algorithm D
//! division, two's-complement-emulated bitwise operations, floor-
//! semantics right shift, and native integer/string/`f64` bridges.

mod add;
mod bigint_core;
mod bigint_new;
mod bigint_slice;
mod bits;
mod bitwise;
mod cmp;
mod digit;
mod digit_vec;
mod divrem;
mod error;
mod float_bridge;
mod helper_methods;
mod incr_decr;
mod len;
mod mul;
mod neg;
mod parse;
mod scratch;
#[cfg(feature = "serde")]
mod serde_impl;
mod shift;
mod sub;
mod to_str;
mod trim;
mod zero;

pub use bigint_core::BigInt;
pub use digit::{Digit, DIGIT_BYTES, MAX_DIGITS};
pub use error::BigIntError;
