// File:    playfair.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Playfair digraph cipher over a 5x5 key square (J merged into I).
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Playfair cipher.
//!
//! Letters are uppercased and `J` is folded into `I`. Non-letters keep their
//! position and every letter keeps its original case. Encryption may insert
//! filler `X` letters; any surplus is appended to the end of the output.
//! Decryption does not try to remove fillers.

use std::fmt;

use log::debug;

use super::Direction;
use crate::error::{CipherError, Result};
use crate::math::modulo;

const FILLER_LETTER: char = 'X';
const SQUARE_SIDE: usize = 5;
const SQUARE_CELLS: usize = SQUARE_SIDE * SQUARE_SIDE;

/// A 5x5 Playfair key square with a direct-indexed position table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairKeySquare {
    cells: [char; SQUARE_CELLS],
    positions: [Option<(usize, usize)>; 26],
}

impl PlayfairKeySquare {
    /// Builds the square from `key`: first occurrences of the key's letters,
    /// then the rest of A-Z (minus J) in order.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the key is empty after removing
    /// whitespace or contains anything other than ASCII letters.
    pub fn new(key: &str) -> Result<Self> {
        let compact: String = key.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(CipherError::InvalidKey(
                "Playfair key must not be empty.".into(),
            ));
        }
        if !compact.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CipherError::InvalidKey(format!(
                "Playfair key must contain letters only (A-Z). Got: \"{key}\""
            )));
        }

        let mut used = [false; 26];
        let mut square = Vec::with_capacity(SQUARE_CELLS);
        let key_letters = normalize_playfair_letters(&compact);
        let rest = ('A'..='Z').filter(|&c| c != 'J');

        for ch in key_letters.chars().chain(rest) {
            let slot = &mut used[letter_slot(ch)];
            if !*slot {
                *slot = true;
                square.push(ch);
            }
        }

        let cells: [char; SQUARE_CELLS] = square
            .try_into()
            .map_err(|v: Vec<char>| CipherError::InvalidKeySquare(v.len()))?;

        let mut positions = [None; 26];
        for (idx, &ch) in cells.iter().enumerate() {
            positions[letter_slot(ch)] = Some((idx / SQUARE_SIDE, idx % SQUARE_SIDE));
        }

        debug!("Built Playfair key square {}", cells.iter().collect::<String>());
        Ok(Self { cells, positions })
    }

    /// `(row, column)` of an uppercase letter, or `None` if it is not in the square.
    #[must_use]
    pub fn position(&self, ch: char) -> Option<(usize, usize)> {
        if ch.is_ascii_uppercase() {
            self.positions[letter_slot(ch)]
        } else {
            None
        }
    }

    /// The letter at `(row, col)`, wrapping both coordinates around the square.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn at(&self, row: i64, col: i64) -> char {
        let side = SQUARE_SIDE as i64;
        let idx = modulo(row, side) * side + modulo(col, side);
        self.cells[idx as usize]
    }

    /// The 25 letters in row-major order.
    #[must_use]
    pub fn letters(&self) -> String {
        self.cells.iter().collect()
    }

    /// The five rows as strings.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(SQUARE_SIDE)
            .map(|row| row.iter().collect())
            .collect()
    }
}

impl fmt::Display for PlayfairKeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(SQUARE_SIDE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Builds the key square for `key`. See [`PlayfairKeySquare::new`].
///
/// # Errors
///
/// Same as [`PlayfairKeySquare::new`].
pub fn build_key_square(key: &str) -> Result<PlayfairKeySquare> {
    PlayfairKeySquare::new(key)
}

/// Encrypts `plaintext` with the square built from `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] for a bad key.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    let square = PlayfairKeySquare::new(key)?;
    transform_preserving_non_letters(plaintext, |letters| {
        let prepared = prepare_digraphs(letters);
        apply_playfair(&prepared, &square, Direction::Encrypt)
    })
}

/// Decrypts `ciphertext` with the square built from `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] for a bad key and
/// [`CipherError::OddLength`] if the ciphertext has an odd letter count.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    let square = PlayfairKeySquare::new(key)?;
    transform_preserving_non_letters(ciphertext, |letters| {
        let normalized = normalize_playfair_letters(letters);
        apply_playfair(&normalized, &square, Direction::Decrypt)
    })
}

/// Applies the digraph rules to an even-length, J-free, uppercase string.
///
/// # Errors
///
/// Returns [`CipherError::OddLength`] for odd input and
/// [`CipherError::LetterNotInSquare`] for a letter the square lacks.
pub fn apply_playfair(
    prepared: &str,
    square: &PlayfairKeySquare,
    direction: Direction,
) -> Result<String> {
    let letters: Vec<char> = prepared.chars().collect();
    if letters.len() % 2 != 0 {
        return Err(CipherError::OddLength {
            context: "Playfair input",
            len: letters.len(),
        });
    }

    let step = direction.step();
    let mut out = String::with_capacity(letters.len());

    for pair in letters.chunks_exact(2) {
        let (first, second) = (pair[0], pair[1]);
        let (r1, c1) = lookup(square, first)?;
        let (r2, c2) = lookup(square, second)?;

        if r1 == r2 {
            out.push(square.at(r1, c1 + step));
            out.push(square.at(r2, c2 + step));
        } else if c1 == c2 {
            out.push(square.at(r1 + step, c1));
            out.push(square.at(r2 + step, c2));
        } else {
            out.push(square.at(r1, c2));
            out.push(square.at(r2, c1));
        }
    }

    Ok(out)
}

/// Uppercases, keeps only ASCII letters and maps `J` to `I`.
#[must_use]
pub fn normalize_playfair_letters(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| match c.to_ascii_uppercase() {
            'J' => 'I',
            up => up,
        })
        .collect()
}

/// Pairs letters into digraphs, inserting `X` after the first of a doubled
/// pair and after a trailing single letter.
#[must_use]
pub fn prepare_digraphs(letters: &str) -> String {
    let s: Vec<char> = normalize_playfair_letters(letters).chars().collect();
    let mut out = String::with_capacity(s.len() + s.len() / 2 + 1);
    let mut i = 0;

    while i < s.len() {
        let a = s[i];
        match s.get(i + 1) {
            None => {
                out.push(a);
                out.push(FILLER_LETTER);
                i += 1;
            }
            Some(&b) if a == b => {
                out.push(a);
                out.push(FILLER_LETTER);
                i += 1;
            }
            Some(&b) => {
                out.push(a);
                out.push(b);
                i += 2;
            }
        }
    }

    out
}

/// Runs `transform` over the letters of `original`, then splices the result
/// back into the non-letter skeleton with the original casing. Surplus
/// transformed letters are appended.
fn transform_preserving_non_letters(
    original: &str,
    transform: impl FnOnce(&str) -> Result<String>,
) -> Result<String> {
    let letters: String = original.chars().filter(char::is_ascii_alphabetic).collect();
    let transformed: Vec<char> = transform(&letters)?.chars().collect();

    let mut idx = 0;
    let mut rebuilt = String::with_capacity(original.len() + transformed.len());
    for ch in original.chars() {
        if !ch.is_ascii_alphabetic() {
            rebuilt.push(ch);
            continue;
        }
        match transformed.get(idx) {
            Some(out) if ch.is_ascii_uppercase() => rebuilt.push(out.to_ascii_uppercase()),
            Some(out) => rebuilt.push(out.to_ascii_lowercase()),
            None => rebuilt.push(ch),
        }
        idx += 1;
    }

    if let Some(surplus) = transformed.get(idx..) {
        rebuilt.extend(surplus);
    }

    Ok(rebuilt)
}

#[allow(clippy::cast_possible_wrap)]
fn lookup(square: &PlayfairKeySquare, ch: char) -> Result<(i64, i64)> {
    square
        .position(ch)
        .map(|(r, c)| (r as i64, c as i64))
        .ok_or(CipherError::LetterNotInSquare(ch))
}

fn letter_slot(ch: char) -> usize {
    usize::from(ch.to_ascii_uppercase() as u8 - b'A')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monarchy_square_layout() {
        let square = build_key_square("MONARCHY").unwrap();
        assert_eq!(square.letters(), "MONARCHYBDEFGIKLPQSTUVWXZ");
        assert_eq!(
            square.to_string(),
            "M O N A R\nC H Y B D\nE F G I K\nL P Q S T\nU V W X Z"
        );
        assert_eq!(square.position('M'), Some((0, 0)));
        assert_eq!(square.position('Z'), Some((4, 4)));
        assert_eq!(square.position('J'), None);
        assert_eq!(square.at(-1, 5), 'U');
    }

    #[test]
    fn test_key_square_has_25_distinct_letters_without_j() {
        for key in ["MONARCHY", "jJjJ", "The Quick Brown Fox", "z"] {
            let square = build_key_square(key).unwrap();
            let letters = square.letters();
            assert_eq!(letters.len(), 25);
            assert!(!letters.contains('J'));
            let mut sorted: Vec<char> = letters.chars().collect();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 25, "duplicates for key {key}");
        }
        assert!(build_key_square("jazz").unwrap().letters().starts_with("IAZ"));
    }

    #[test]
    fn test_key_validation() {
        assert_eq!(
            build_key_square("   "),
            Err(CipherError::InvalidKey("Playfair key must not be empty.".into()))
        );
        assert!(matches!(
            build_key_square("MON4RCHY"),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(build_key_square("MON ARCHY").is_ok());
    }

    #[test]
    fn test_prepare_digraphs() {
        assert_eq!(prepare_digraphs("balloon"), "BALXLOON");
        assert_eq!(prepare_digraphs("abc"), "ABCX");
        assert_eq!(prepare_digraphs("jig"), "IXIG");
        assert_eq!(prepare_digraphs(""), "");
    }

    #[test]
    fn test_monarchy_known_vector() {
        assert_eq!(encrypt("instrumentsx", "MONARCHY").unwrap(), "gatlmzclrqxa");
        assert_eq!(decrypt("gatlmzclrqxa", "MONARCHY").unwrap(), "instrumentsx");
        assert_eq!(encrypt("INSTRUMENTSX", "monarchy").unwrap(), "GATLMZCLRQXA");
    }

    #[test]
    fn test_preserves_punctuation_and_appends_surplus() {
        // HE LX LO WO RL DX: two fillers, so two surplus letters.
        let out = encrypt("Hello, World!", "MONARCHY").unwrap();
        assert_eq!(out.chars().count(), "Hello, World!".len() + 2);
        assert_eq!(out.chars().nth(5), Some(','));
        assert_eq!(out.chars().nth(6), Some(' '));
        assert_eq!(out.chars().nth(12), Some('!'));
        assert!(out.chars().next().unwrap().is_ascii_uppercase());
        assert!(out.chars().nth(1).unwrap().is_ascii_lowercase());
        assert!(out.chars().skip(13).all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_decrypt_rejects_odd_length() {
        assert_eq!(
            decrypt("abc", "MONARCHY"),
            Err(CipherError::OddLength {
                context: "Playfair input",
                len: 3
            })
        );
    }

    #[test]
    fn test_apply_rejects_letter_outside_square() {
        let square = build_key_square("MONARCHY").unwrap();
        assert_eq!(
            apply_playfair("JA", &square, Direction::Encrypt),
            Err(CipherError::LetterNotInSquare('J'))
        );
    }
}
