// File:    caesar.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Caesar shift cipher over A-Z / a-z, preserving case and non-letters.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Caesar shift cipher.

use log::debug;

use super::map_ascii_letters;
use crate::math::{ALPHABET_LEN, modulo};

/// Shifts every ASCII letter forward by `shift` places (mod 26).
///
/// Case is kept and all other characters pass through unchanged.
#[must_use]
pub fn encrypt(plaintext: &str, shift: i64) -> String {
    shift_letters(plaintext, modulo(shift, ALPHABET_LEN))
}

/// Inverse of [`encrypt`]: the same transform with the shift negated.
#[must_use]
pub fn decrypt(ciphertext: &str, shift: i64) -> String {
    // Negate after reducing so i64::MIN cannot overflow.
    shift_letters(ciphertext, -modulo(shift, ALPHABET_LEN))
}

fn shift_letters(input: &str, shift: i64) -> String {
    let normalized_shift = modulo(shift, ALPHABET_LEN);
    debug!("Caesar shift of {normalized_shift} over {} chars", input.len());
    map_ascii_letters(input, |x| x + normalized_shift)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_known_vector() {
        assert_eq!(encrypt("Hello, World!", 3), "Khoor, Zruog!");
        assert_eq!(decrypt("Khoor, Zruog!", 3), "Hello, World!");
    }

    #[test]
    fn test_caesar_wraps_and_accepts_any_integer() {
        assert_eq!(encrypt("xyz XYZ", 3), "abc ABC");
        assert_eq!(encrypt("abc", -1), "zab");
        assert_eq!(encrypt("abc", 26 * 1000 + 1), "bcd");
        assert_eq!(encrypt("abc", 0), "abc");
    }

    #[test]
    fn test_caesar_roundtrip_for_extreme_shifts() {
        let text = "The quick brown fox jumps over the lazy dog. 0123 ¿ñ?";
        for shift in [i64::MIN, -27, -1, 0, 1, 13, 25, 26, 27, i64::MAX] {
            assert_eq!(decrypt(&encrypt(text, shift), shift), text, "shift {shift}");
        }
    }

    #[test]
    fn test_non_ascii_letters_pass_through() {
        assert_eq!(encrypt("ñÄ", 5), "ñÄ");
    }
}
