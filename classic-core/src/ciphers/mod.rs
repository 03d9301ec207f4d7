// File:    mod.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Cipher modules plus the direction flag and letter mapping they share.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The four classical ciphers.
//!
//! Caesar, Affine and Playfair keep the case and punctuation of their input.
//! Hill always returns letters-only uppercase text.

/// Caesar shift cipher.
pub mod caesar;
/// Affine substitution cipher, `E(x) = (a*x + b) mod 26`.
pub mod affine;
/// Playfair 5x5 key-square digraph cipher.
pub mod playfair;
/// 2x2 Hill block cipher.
pub mod hill;

use serde::{Deserialize, Serialize};

use crate::math::{ALPHABET_LEN, modulo};

/// Whether a symmetric cipher operation encrypts or decrypts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl Direction {
    /// `+1` for encryption, `-1` for decryption.
    #[must_use]
    pub const fn step(self) -> i64 {
        match self {
            Self::Encrypt => 1,
            Self::Decrypt => -1,
        }
    }
}

/// Applies `f` to the 0..=25 index of every ASCII letter, keeping its case.
/// Everything else passes through unchanged.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn map_ascii_letters(text: &str, f: impl Fn(i64) -> i64) -> String {
    text.chars()
        .map(|ch| {
            let base = match ch {
                'A'..='Z' => b'A',
                'a'..='z' => b'a',
                _ => return ch,
            };
            let x = i64::from(ch as u8 - base);
            (base + modulo(f(x), ALPHABET_LEN) as u8) as char
        })
        .collect()
}
