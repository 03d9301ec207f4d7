// File:    mod.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Attacks that recover cipher keys from known material.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Key-recovery attacks.

/// Known-plaintext recovery of a 2x2 Hill key.
pub mod hill_known_plaintext;
