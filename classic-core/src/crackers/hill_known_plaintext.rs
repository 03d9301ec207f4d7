// File:    hill_known_plaintext.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Recovers a 2x2 Hill key from an aligned plaintext/ciphertext snippet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Known-plaintext recovery of a 2x2 Hill key.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::alphabet::normalize_letters_only_upper;
use crate::ciphers::hill::{digraph_vectors, key_string};
use crate::error::{CipherError, Result};
use crate::matrix::{Matrix2x2, Vector2};

/// A key recovered by the cracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HillRecoveredKey {
    /// Row-major key matrix, entries in `[0, 25]`.
    pub matrix: Matrix2x2,
    /// The same key as four letters, row-major.
    #[serde(rename = "keyString")]
    pub key_string: String,
}

impl HillRecoveredKey {
    fn new(matrix: Matrix2x2) -> Self {
        Self {
            key_string: key_string(&matrix),
            matrix,
        }
    }
}

/// Recovers the Hill key that maps `known_plaintext` onto `known_ciphertext`.
///
/// Non-letters are stripped from both sides independently. Plaintext digraph
/// pairs `(i, j)` are scanned in ascending order; the first pair whose matrix
/// is invertible yields the candidate key, which must then reproduce every
/// digraph of the snippet.
///
/// # Errors
///
/// - [`CipherError::InsufficientData`] if either side has fewer than 4 letters.
/// - [`CipherError::LengthMismatch`] if the letter counts differ.
/// - [`CipherError::OddLength`] if the letter count is odd.
/// - [`CipherError::InconsistentSnippet`] if the first candidate key fails to
///   reproduce the snippet. Other pairs are not tried.
/// - [`CipherError::NoInvertiblePair`] if no plaintext pair is invertible.
pub fn crack_hill_key_known_plaintext(
    known_plaintext: &str,
    known_ciphertext: &str,
) -> Result<HillRecoveredKey> {
    let p = normalize_letters_only_upper(known_plaintext);
    let c = normalize_letters_only_upper(known_ciphertext);

    if p.len() < 4 {
        return Err(CipherError::InsufficientData("Known plaintext"));
    }
    if c.len() < 4 {
        return Err(CipherError::InsufficientData("Ciphertext"));
    }
    if p.len() != c.len() {
        return Err(CipherError::LengthMismatch {
            plaintext: p.len(),
            ciphertext: c.len(),
        });
    }
    if p.len() % 2 != 0 {
        return Err(CipherError::OddLength {
            context: "Known plaintext/ciphertext",
            len: p.len(),
        });
    }

    let p_vecs = digraph_vectors(&p);
    let c_vecs = digraph_vectors(&c);

    for i in 0..p_vecs.len() {
        for j in (i + 1)..p_vecs.len() {
            let p_pair = Matrix2x2::from_columns(p_vecs[i], p_vecs[j]);
            if !p_pair.is_invertible() {
                trace!("Skipping digraph pair ({i}, {j}): determinant {}", p_pair.determinant());
                continue;
            }

            let c_pair = Matrix2x2::from_columns(c_vecs[i], c_vecs[j]);
            let key = c_pair.multiply(&p_pair.invert()?).normalize();

            if !verify_key(&key, &p_vecs, &c_vecs) {
                warn!("Key {:?} from digraph pair ({i}, {j}) does not fit the snippet", key.0);
                return Err(CipherError::InconsistentSnippet);
            }

            debug!("Recovered Hill key {:?} from digraph pair ({i}, {j})", key.0);
            return Ok(HillRecoveredKey::new(key));
        }
    }

    Err(CipherError::NoInvertiblePair)
}

fn verify_key(key: &Matrix2x2, plaintext: &[Vector2], ciphertext: &[Vector2]) -> bool {
    plaintext
        .iter()
        .zip(ciphertext)
        .all(|(&p, &c)| key.multiply_vector(p) == c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovers_reference_key() {
        let recovered = crack_hill_key_known_plaintext("short example", "APADJTFTWLFJ").unwrap();
        assert_eq!(recovered.matrix, Matrix2x2::new(7, 8, 11, 11));
        assert_eq!(recovered.key_string, "HILL");
    }

    #[test]
    fn test_skips_singular_pairs_before_recovering() {
        // AA is the zero vector, so pairs (0, 1), (0, 2) and (0, 3) are
        // singular and the key comes from pair (1, 2).
        let key = Matrix2x2::new(3, 3, 2, 5);
        let ciphertext = crate::ciphers::hill::encrypt("AABBCDEF", &key.into()).unwrap();
        let recovered = crack_hill_key_known_plaintext("AABBCDEF", &ciphertext).unwrap();
        assert_eq!(recovered.matrix, key);
        assert_eq!(recovered.key_string, "DDCF");
    }

    #[test]
    fn test_ignores_punctuation_on_each_side() {
        let recovered =
            crack_hill_key_known_plaintext("Short, example!", "ap-ad jt.ft wl fj").unwrap();
        assert_eq!(recovered.key_string, "HILL");
    }

    #[test]
    fn test_input_shape_errors() {
        assert_eq!(
            crack_hill_key_known_plaintext("abc", "ABCD"),
            Err(CipherError::InsufficientData("Known plaintext"))
        );
        assert_eq!(
            crack_hill_key_known_plaintext("abcd", "A-B-C"),
            Err(CipherError::InsufficientData("Ciphertext"))
        );
        assert_eq!(
            crack_hill_key_known_plaintext("short example", "APADJTFTWL"),
            Err(CipherError::LengthMismatch {
                plaintext: 12,
                ciphertext: 10
            })
        );
        assert_eq!(
            crack_hill_key_known_plaintext("abcde", "ABCDE"),
            Err(CipherError::OddLength {
                context: "Known plaintext/ciphertext",
                len: 5
            })
        );
    }

    #[test]
    fn test_no_invertible_pair() {
        // Every plaintext digraph is a multiple of (1, 1), so all pairs are singular.
        assert_eq!(
            crack_hill_key_known_plaintext("AABBCC", "ABCDEF"),
            Err(CipherError::NoInvertiblePair)
        );
    }

    #[test]
    fn test_inconsistent_snippet_fails_fast() {
        // Last digraph of the ciphertext corrupted.
        assert_eq!(
            crack_hill_key_known_plaintext("short example", "APADJTFTWLFK"),
            Err(CipherError::InconsistentSnippet)
        );
    }
}
