// File:    error.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Error taxonomy shared by every cipher and cracker in the crate.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Errors produced by the cipher and cracker operations.

use thiserror::Error;

/// Every way a cipher, key parser or cracker call can fail.
///
/// All failures are terminal for the call that raised them. The `Display`
/// text is meant to be shown to a user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A key component is non-integer, not invertible, empty or malformed.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// The Hill key determinant shares a factor with 26.
    #[error("Invalid Hill key: determinant {determinant} is not invertible mod 26.")]
    KeyNotInvertible {
        /// The determinant, already reduced mod 26.
        determinant: i64,
    },

    /// Letters-only input has odd length where whole digraphs are required.
    #[error("{context} must have an even number of letters after normalization, got {len}.")]
    OddLength {
        /// What was being processed, e.g. "Hill ciphertext".
        context: &'static str,
        /// The offending letter count.
        len: usize,
    },

    /// A Playfair digraph references a letter absent from the key square.
    #[error("Letter not in key square: {0}")]
    LetterNotInSquare(char),

    /// A Playfair key square came out with the wrong number of cells.
    #[error("Key square must be 25 characters, got {0}.")]
    InvalidKeySquare(usize),

    /// No modular inverse exists for `value` modulo `modulus`.
    #[error("No modular inverse for a={value} mod m={modulus}.")]
    NoInverse {
        /// The value that was asked to be inverted.
        value: i64,
        /// The modulus.
        modulus: i64,
    },

    /// Cracker input is too short to contain two digraphs.
    #[error("{0} must contain at least 4 letters (2 digraphs).")]
    InsufficientData(&'static str),

    /// Cracker plaintext and ciphertext letter counts differ.
    #[error(
        "Known plaintext and ciphertext must have the same number of letters after removing punctuation/spaces. Got plaintext={plaintext}, ciphertext={ciphertext}."
    )]
    LengthMismatch {
        /// Letters in the normalized plaintext.
        plaintext: usize,
        /// Letters in the normalized ciphertext.
        ciphertext: usize,
    },

    /// No pair of plaintext digraphs forms an invertible matrix.
    #[error(
        "Cannot derive a Hill key: none of the plaintext digraph pairs form an invertible 2x2 matrix modulo 26. Try a snippet with more varied digraphs."
    )]
    NoInvertiblePair,

    /// A derived key does not reproduce the whole aligned snippet.
    #[error(
        "The plaintext/ciphertext snippet is not consistent with a single 2x2 Hill key (mod 26). Check that the snippet is aligned."
    )]
    InconsistentSnippet,
}

impl CipherError {
    /// Stable, machine-readable name of the failure kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidKey(_) => "InvalidKey",
            Self::KeyNotInvertible { .. } => "KeyNotInvertible",
            Self::OddLength { .. } => "OddLength",
            Self::LetterNotInSquare(_) => "LetterNotInSquare",
            Self::InvalidKeySquare(_) => "InvalidKeySquare",
            Self::NoInverse { .. } => "NoInverse",
            Self::InsufficientData(_) => "InsufficientData",
            Self::LengthMismatch { .. } => "LengthMismatch",
            Self::NoInvertiblePair => "NoInvertiblePair",
            Self::InconsistentSnippet => "InconsistentSnippet",
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CipherError>;
