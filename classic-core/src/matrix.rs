// File:    matrix.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: 2x2 matrix and vector arithmetic modulo 26 for the Hill cipher and its cracker.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! 2x2 matrices interpreted modulo 26.

use serde::{Deserialize, Serialize};

use crate::error::{CipherError, Result};
use crate::math::{ALPHABET_LEN, gcd, mod_inverse, modulo};

/// A column vector of two letter indices, e.g. one digraph.
pub type Vector2 = [i64; 2];

/// A 2x2 integer matrix in row-major form: `[[a, b], [c, d]]`.
///
/// Serializes as the bare nested array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix2x2(pub [[i64; 2]; 2]);

impl Matrix2x2 {
    /// Builds `[[a, b], [c, d]]`.
    #[must_use]
    pub const fn new(a: i64, b: i64, c: i64, d: i64) -> Self {
        Self([[a, b], [c, d]])
    }

    /// Builds `[[v1[0], v2[0]], [v1[1], v2[1]]]` from two column vectors.
    #[must_use]
    pub const fn from_columns(v1: Vector2, v2: Vector2) -> Self {
        Self([[v1[0], v2[0]], [v1[1], v2[1]]])
    }

    /// The four entries in row-major order.
    #[must_use]
    pub const fn entries(&self) -> [i64; 4] {
        let [[a, b], [c, d]] = self.0;
        [a, b, c, d]
    }

    /// Reduces every entry into `[0, 25]`.
    #[must_use]
    pub const fn normalize(&self) -> Self {
        let [[a, b], [c, d]] = self.0;
        Self([
            [modulo(a, ALPHABET_LEN), modulo(b, ALPHABET_LEN)],
            [modulo(c, ALPHABET_LEN), modulo(d, ALPHABET_LEN)],
        ])
    }

    /// `(a*d - b*c) mod 26`.
    ///
    /// Entries are reduced first, so arbitrarily large keys cannot overflow.
    #[must_use]
    pub const fn determinant(&self) -> i64 {
        let [[a, b], [c, d]] = self.normalize().0;
        modulo(a * d - b * c, ALPHABET_LEN)
    }

    /// Whether the determinant is coprime with 26.
    #[must_use]
    pub const fn is_invertible(&self) -> bool {
        gcd(self.determinant(), ALPHABET_LEN) == 1
    }

    /// Inverse modulo 26 via the adjugate times the inverse determinant.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::KeyNotInvertible`] if the determinant shares a
    /// factor with 26.
    pub fn invert(&self) -> Result<Self> {
        let det = self.determinant();
        let det_inv = mod_inverse(det, ALPHABET_LEN)
            .map_err(|_| CipherError::KeyNotInvertible { determinant: det })?;
        let [[a, b], [c, d]] = self.normalize().0;

        Ok(Self([
            [
                modulo(d * det_inv, ALPHABET_LEN),
                modulo(-b * det_inv, ALPHABET_LEN),
            ],
            [
                modulo(-c * det_inv, ALPHABET_LEN),
                modulo(a * det_inv, ALPHABET_LEN),
            ],
        ]))
    }

    /// `self * other`, every entry reduced mod 26.
    #[must_use]
    pub const fn multiply(&self, other: &Self) -> Self {
        let [[a00, a01], [a10, a11]] = self.normalize().0;
        let [[b00, b01], [b10, b11]] = other.normalize().0;

        Self([
            [
                modulo(a00 * b00 + a01 * b10, ALPHABET_LEN),
                modulo(a00 * b01 + a01 * b11, ALPHABET_LEN),
            ],
            [
                modulo(a10 * b00 + a11 * b10, ALPHABET_LEN),
                modulo(a10 * b01 + a11 * b11, ALPHABET_LEN),
            ],
        ])
    }

    /// `self * v`, reduced mod 26.
    #[must_use]
    pub const fn multiply_vector(&self, v: Vector2) -> Vector2 {
        let [[a, b], [c, d]] = self.normalize().0;
        let x = modulo(v[0], ALPHABET_LEN);
        let y = modulo(v[1], ALPHABET_LEN);
        [
            modulo(a * x + b * y, ALPHABET_LEN),
            modulo(c * x + d * y, ALPHABET_LEN),
        ]
    }
}
