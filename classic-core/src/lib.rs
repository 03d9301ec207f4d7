// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: The main library crate for classic-core, exposing the classical ciphers and the Hill cracker.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Classic Core Library
//!
//! Classical ciphers over the 26-letter Latin alphabet (Caesar, Affine,
//! Playfair and 2x2 Hill) plus a known-plaintext key recovery for Hill.
//!
//! None of this is secure. Every operation is a pure, synchronous function
//! of its inputs.
//!
//! ```
//! use classic_core::ciphers::hill;
//! use classic_core::crackers::hill_known_plaintext::crack_hill_key_known_plaintext;
//!
//! let ct = hill::encrypt("short example", &"HILL".into()).unwrap();
//! assert_eq!(ct, "APADJTFTWLFJ");
//!
//! let key = crack_hill_key_known_plaintext("short example", &ct).unwrap();
//! assert_eq!(key.key_string, "HILL");
//! ```

/// A=0 .. Z=25 mapping and letters-only normalization.
pub mod alphabet;
/// Caesar, Affine, Playfair and Hill.
pub mod ciphers;
/// Key-recovery attacks.
pub mod crackers;
/// The crate's error type.
pub mod error;
/// Modular arithmetic primitives.
pub mod math;
/// 2x2 matrices modulo 26.
pub mod matrix;

pub use ciphers::Direction;
pub use ciphers::affine::AffineKey;
pub use ciphers::hill::HillKeyInput;
pub use ciphers::playfair::PlayfairKeySquare;
pub use crackers::hill_known_plaintext::{HillRecoveredKey, crack_hill_key_known_plaintext};
pub use error::{CipherError, Result};
pub use matrix::{Matrix2x2, Vector2};
