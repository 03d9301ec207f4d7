// File:    affine.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Affine substitution cipher E(x) = (a*x + b) mod 26, D(y) = a^-1 * (y - b) mod 26.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Affine substitution cipher.

use serde::{Deserialize, Serialize};

use super::map_ascii_letters;
use crate::error::{CipherError, Result};
use crate::math::{ALPHABET_LEN, assert_integer, gcd, mod_inverse, modulo};

/// Affine key `(a, b)`. `a` must be coprime with 26 to be usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffineKey {
    /// Multiplier.
    pub a: i64,
    /// Offset.
    pub b: i64,
}

impl AffineKey {
    /// Builds a key from raw numbers, rejecting non-integers.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if either component is not a
    /// finite integer.
    pub fn from_numbers(a: f64, b: f64) -> Result<Self> {
        Ok(Self {
            a: assert_integer(a, "Affine key.a")?,
            b: assert_integer(b, "Affine key.b")?,
        })
    }
}

/// Checks that `a mod 26` is coprime with 26.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] naming the offending gcd.
pub fn validate_affine_key(key: &AffineKey) -> Result<()> {
    let a = modulo(key.a, ALPHABET_LEN);
    let g = gcd(a, ALPHABET_LEN);
    if g != 1 {
        return Err(CipherError::InvalidKey(format!(
            "'a' must be coprime with 26. Got a={} (mod 26 => {a}), gcd(a,26)={g}.",
            key.a
        )));
    }
    Ok(())
}

/// Encrypts with `E(x) = (a*x + b) mod 26`, keeping case and non-letters.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `a` is not invertible mod 26.
pub fn encrypt(plaintext: &str, key: &AffineKey) -> Result<String> {
    validate_affine_key(key)?;
    let a = modulo(key.a, ALPHABET_LEN);
    let b = modulo(key.b, ALPHABET_LEN);
    Ok(map_ascii_letters(plaintext, |x| a * x + b))
}

/// Decrypts with `D(y) = a^-1 * (y - b) mod 26`, keeping case and non-letters.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `a` is not invertible mod 26.
pub fn decrypt(ciphertext: &str, key: &AffineKey) -> Result<String> {
    validate_affine_key(key)?;
    let a = modulo(key.a, ALPHABET_LEN);
    let b = modulo(key.b, ALPHABET_LEN);
    let a_inv = mod_inverse(a, ALPHABET_LEN).map_err(|e| CipherError::InvalidKey(e.to_string()))?;
    Ok(map_ascii_letters(ciphertext, |y| a_inv * (y - b)))
}
