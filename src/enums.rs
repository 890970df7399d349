// src/enums.rs
//! Public enum types used throughout the crate

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BLOCK_SIZE, BLOWFISH_DEFAULT_KEY_LEN, BLOWFISH_MAX_KEY_LEN, BLOWFISH_MIN_KEY_LEN, TDES_KEY_LEN,
};

/// The two supported cipher algorithm families.
///
/// Both operate on 8-byte blocks; they differ only in key-length rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherFamily {
    /// Blowfish — variable key length, 4 to 56 bytes
    Blowfish,
    /// Three-key Triple DES (EDE) — fixed 24-byte key
    TripleDes,
}

impl CipherFamily {
    /// Cipher block size in bytes (8 for both families)
    pub const fn block_size(self) -> usize {
        BLOCK_SIZE
    }

    /// Key length produced by key generation for this family
    pub const fn generated_key_len(self) -> usize {
        match self {
            CipherFamily::Blowfish => BLOWFISH_DEFAULT_KEY_LEN,
            CipherFamily::TripleDes => TDES_KEY_LEN,
        }
    }

    /// Whether `len` is a valid key length for this family
    pub const fn accepts_key_len(self, len: usize) -> bool {
        match self {
            CipherFamily::Blowfish => len >= BLOWFISH_MIN_KEY_LEN && len <= BLOWFISH_MAX_KEY_LEN,
            CipherFamily::TripleDes => len == TDES_KEY_LEN,
        }
    }
}

impl fmt::Display for CipherFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherFamily::Blowfish => f.write_str("Blowfish"),
            CipherFamily::TripleDes => f.write_str("TripleDES"),
        }
    }
}
