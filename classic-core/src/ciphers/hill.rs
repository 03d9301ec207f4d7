// File:    hill.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: 2x2 Hill block cipher over A-Z (mod 26).
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Hill cipher with a 2x2 key.
//!
//! Unlike the other ciphers, output is always letters-only uppercase: case,
//! spaces and punctuation are dropped before encryption.

use log::debug;

use crate::alphabet::{index_to_letter, letter_to_index, normalize_letters_only_upper};
use crate::error::{CipherError, Result};
use crate::math::assert_integer;
use crate::matrix::{Matrix2x2, Vector2};

const PAD_LETTER: char = 'X';

/// A Hill key as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HillKeyInput {
    /// Exactly four letters, row-major (`"HILL"` => `[[7, 8], [11, 11]]`).
    Text(String),
    /// An integer matrix.
    Matrix(Matrix2x2),
}

impl From<&str> for HillKeyInput {
    fn from(key: &str) -> Self {
        Self::Text(key.to_owned())
    }
}

impl From<String> for HillKeyInput {
    fn from(key: String) -> Self {
        Self::Text(key)
    }
}

impl From<Matrix2x2> for HillKeyInput {
    fn from(key: Matrix2x2) -> Self {
        Self::Matrix(key)
    }
}

/// Builds a key matrix from raw numbers, rejecting non-integer entries.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] naming the first offending entry.
pub fn matrix_from_numbers(entries: [[f64; 2]; 2]) -> Result<Matrix2x2> {
    let [[a, b], [c, d]] = entries;
    Ok(Matrix2x2::new(
        assert_integer(a, "Hill key[0][0]")?,
        assert_integer(b, "Hill key[0][1]")?,
        assert_integer(c, "Hill key[1][0]")?,
        assert_integer(d, "Hill key[1][1]")?,
    ))
}

/// Parses a key and checks it is invertible mod 26. Entries come back in `[0, 25]`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] for a malformed string key and
/// [`CipherError::KeyNotInvertible`] for a singular matrix.
pub fn parse_and_validate_hill_key(input: &HillKeyInput) -> Result<Matrix2x2> {
    let matrix = match input {
        HillKeyInput::Text(key) => parse_hill_key_string(key)?,
        HillKeyInput::Matrix(m) => *m,
    };

    if !matrix.is_invertible() {
        return Err(CipherError::KeyNotInvertible {
            determinant: matrix.determinant(),
        });
    }

    let key = matrix.normalize();
    debug!("Using Hill key {:?}", key.0);
    Ok(key)
}

/// Renders a matrix as its row-major 4-letter key (`[[7, 8], [11, 11]]` => `"HILL"`).
#[must_use]
pub fn key_string(matrix: &Matrix2x2) -> String {
    matrix.entries().into_iter().map(index_to_letter).collect()
}

/// Encrypts `plaintext`, padding with `X` to an even letter count.
///
/// # Errors
///
/// Fails if the key is malformed or not invertible.
pub fn encrypt(plaintext: &str, key: &HillKeyInput) -> Result<String> {
    let key = parse_and_validate_hill_key(key)?;
    let mut prepared = normalize_letters_only_upper(plaintext);
    if prepared.len() % 2 != 0 {
        prepared.push(PAD_LETTER);
    }
    Ok(apply_key(&key, &prepared))
}

/// Decrypts `ciphertext` with the inverse key. Does not pad.
///
/// # Errors
///
/// Fails if the key is malformed or not invertible, or with
/// [`CipherError::OddLength`] if the letters-only ciphertext is odd.
pub fn decrypt(ciphertext: &str, key: &HillKeyInput) -> Result<String> {
    let key = parse_and_validate_hill_key(key)?;
    let inverse = key.invert()?;

    let normalized = normalize_letters_only_upper(ciphertext);
    if normalized.len() % 2 != 0 {
        return Err(CipherError::OddLength {
            context: "Hill ciphertext",
            len: normalized.len(),
        });
    }

    Ok(apply_key(&inverse, &normalized))
}

/// Splits an even-length uppercase string into digraph index vectors.
#[must_use]
pub fn digraph_vectors(letters: &str) -> Vec<Vector2> {
    letters
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| {
            [
                letter_to_index(char::from(pair[0])),
                letter_to_index(char::from(pair[1])),
            ]
        })
        .collect()
}

fn apply_key(key: &Matrix2x2, letters: &str) -> String {
    digraph_vectors(letters)
        .into_iter()
        .flat_map(|v| key.multiply_vector(v))
        .map(index_to_letter)
        .collect()
}

fn parse_hill_key_string(key: &str) -> Result<Matrix2x2> {
    let compact: Vec<char> = key.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() != 4 {
        return Err(CipherError::InvalidKey(format!(
            "Hill string key must be exactly 4 characters (letters). Got length {}.",
            compact.len()
        )));
    }
    if !compact.iter().all(char::is_ascii_alphabetic) {
        return Err(CipherError::InvalidKey(format!(
            "Hill string key must contain only letters A-Z. Got: \"{key}\""
        )));
    }

    let n: Vec<i64> = compact
        .iter()
        .map(|c| letter_to_index(c.to_ascii_uppercase()))
        .collect();
    Ok(Matrix2x2::new(n[0], n[1], n[2], n[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hill_string_key_maps_row_major() {
        let key = parse_and_validate_hill_key(&"HILL".into()).unwrap();
        assert_eq!(key, Matrix2x2::new(7, 8, 11, 11));
        assert_eq!(key_string(&key), "HILL");
        assert_eq!(
            parse_and_validate_hill_key(&" h i l l ".into()).unwrap(),
            key
        );
    }

    #[test]
    fn test_hill_reference_vector() {
        assert_eq!(encrypt("short example", &"HILL".into()).unwrap(), "APADJTFTWLFJ");
        assert_eq!(decrypt("APADJTFTWLFJ", &"HILL".into()).unwrap(), "SHORTEXAMPLE");
    }

    #[test]
    fn test_hill_matrix_key_is_normalized() {
        let raw = HillKeyInput::Matrix(Matrix2x2::new(-19, 34, 11, 37));
        assert_eq!(
            parse_and_validate_hill_key(&raw).unwrap(),
            Matrix2x2::new(7, 8, 11, 11)
        );
        assert_eq!(encrypt("short example", &raw).unwrap(), "APADJTFTWLFJ");
    }

    #[test]
    fn test_hill_pads_odd_plaintext() {
        let ct = encrypt("abc", &"HILL".into()).unwrap();
        assert_eq!(ct.len(), 4);
        assert_eq!(decrypt(&ct, &"HILL".into()).unwrap(), "ABCX");
    }

    #[test]
    fn test_hill_rejects_bad_keys() {
        let singular = HillKeyInput::Matrix(Matrix2x2::new(2, 4, 1, 2));
        assert_eq!(
            encrypt("hello", &singular),
            Err(CipherError::KeyNotInvertible { determinant: 0 })
        );
        assert_eq!(
            decrypt("hell", &singular),
            Err(CipherError::KeyNotInvertible { determinant: 0 })
        );
        assert!(matches!(
            encrypt("hello", &"HIL".into()),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            encrypt("hello", &"H1LL".into()),
            Err(CipherError::InvalidKey(_))
        ));
        // "AAAA" has determinant 0
        assert!(matches!(
            encrypt("hello", &"AAAA".into()),
            Err(CipherError::KeyNotInvertible { .. })
        ));
    }

    #[test]
    fn test_hill_decrypt_rejects_odd_length() {
        assert_eq!(
            decrypt("ABC", &"HILL".into()),
            Err(CipherError::OddLength {
                context: "Hill ciphertext",
                len: 3
            })
        );
    }

    #[test]
    fn test_matrix_from_numbers() {
        assert_eq!(
            matrix_from_numbers([[7.0, 8.0], [11.0, 11.0]]),
            Ok(Matrix2x2::new(7, 8, 11, 11))
        );
        let err = matrix_from_numbers([[7.0, 8.5], [11.0, 11.0]]).unwrap_err();
        assert!(err.to_string().contains("Hill key[0][1]"));
    }
}
