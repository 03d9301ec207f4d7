// File:    alphabet.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Letter/index mapping for the 26-letter Latin alphabet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! A=0 .. Z=25 mapping and letters-only normalization.

use crate::math::{ALPHABET_LEN, modulo};

/// Maps an uppercase letter `'A'..='Z'` to `0..=25`.
///
/// Callers only pass already-validated uppercase ASCII letters.
#[must_use]
pub fn letter_to_index(ch: char) -> i64 {
    i64::from(u32::from(ch)) - i64::from(u32::from('A'))
}

/// Maps an index to an uppercase letter, reducing it into `0..=25` first.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn index_to_letter(index: i64) -> char {
    (b'A' + modulo(index, ALPHABET_LEN) as u8) as char
}

/// Keeps only ASCII letters, uppercased, in their original order.
#[must_use]
pub fn normalize_letters_only_upper(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index_bijection() {
        for (i, ch) in ('A'..='Z').enumerate() {
            let idx = letter_to_index(ch);
            assert_eq!(idx, i64::try_from(i).unwrap());
            assert_eq!(index_to_letter(idx), ch);
        }
    }

    #[test]
    fn test_index_to_letter_wraps() {
        assert_eq!(index_to_letter(26), 'A');
        assert_eq!(index_to_letter(-1), 'Z');
    }

    #[test]
    fn test_normalize_letters_only_upper() {
        assert_eq!(normalize_letters_only_upper("short example"), "SHORTEXAMPLE");
        assert_eq!(normalize_letters_only_upper("Hello, World! 123"), "HELLOWORLD");
        assert_eq!(normalize_letters_only_upper("  ¡über! "), "BER");
        assert_eq!(normalize_letters_only_upper(""), "");
    }
}
