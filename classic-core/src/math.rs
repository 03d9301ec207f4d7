// File:    math.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Exact modular-arithmetic primitives shared by every cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Modular arithmetic over plain integers.

use crate::error::{CipherError, Result};

/// Size of the Latin alphabet every cipher in this crate works over.
pub const ALPHABET_LEN: i64 = 26;

/// Mathematical modulus: always returns a value in `[0, m - 1]`.
///
/// Unlike `%`, negative inputs wrap, so `modulo(-1, 26) == 25`.
///
/// # Panics
///
/// Panics if `m` is zero.
#[must_use]
pub const fn modulo(n: i64, m: i64) -> i64 {
    n.rem_euclid(m)
}

/// Non-negative greatest common divisor via Euclid's algorithm.
///
/// `gcd(0, 0)` is `0`.
#[must_use]
pub const fn gcd(a: i64, b: i64) -> u64 {
    let mut x = a.unsigned_abs();
    let mut y = b.unsigned_abs();
    while y != 0 {
        let t = x % y;
        x = y;
        y = t;
    }
    x
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` where `g = gcd(a, b)` and `a * x + b * y = g`.
/// `g` is non-negative and matches [`gcd`], including `gcd(i64::MIN, 0)`
/// which only fits in a `u64`. Iterative, so the call depth does not grow
/// with the inputs.
#[must_use]
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub const fn extended_gcd(a: i64, b: i64) -> (u64, i64, i64) {
    // Widened so i64::MIN / -1 and the final sign flip cannot overflow.
    let (mut old_r, mut r) = (a as i128, b as i128);
    let (mut old_x, mut x) = (1_i128, 0_i128);
    let (mut old_y, mut y) = (0_i128, 1_i128);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
        (old_y, y) = (y, old_y - q * y);
    }

    if old_r < 0 {
        old_r = -old_r;
        old_x = -old_x;
        old_y = -old_y;
    }

    // Bezout coefficients are bounded by |a| and |b|, so they fit back in i64.
    (old_r as u64, old_x as i64, old_y as i64)
}

/// Modular inverse of `a` modulo `m`, in `[0, m - 1]`.
///
/// # Errors
///
/// Returns [`CipherError::NoInverse`] if `gcd(a, m) != 1`.
///
/// # Panics
///
/// Panics if `m` is zero.
pub fn mod_inverse(a: i64, m: i64) -> Result<i64> {
    let reduced = modulo(a, m);
    let (g, x, _) = extended_gcd(reduced, m);
    if g != 1 {
        return Err(CipherError::NoInverse {
            value: a,
            modulus: m,
        });
    }
    Ok(modulo(x, m))
}

/// Ensures `value` is a finite integer that fits in an `i64` and converts it.
///
/// Key components that arrive as floating-point numbers (JSON, form fields)
/// pass through here before any arithmetic happens.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] naming `label` if the value is NaN,
/// infinite, fractional or out of range.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn assert_integer(value: f64, label: &str) -> Result<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(CipherError::InvalidKey(format!(
            "{label} must be a finite integer. Got: {value}"
        )));
    }
    // 2^63 is exactly representable; anything at or above it does not fit.
    if value < i64::MIN as f64 || value >= 9_223_372_036_854_775_808.0 {
        return Err(CipherError::InvalidKey(format!(
            "{label} is out of range. Got: {value}"
        )));
    }
    Ok(value as i64)
}
