// src/key_ops.rs
//! Key generation and representation utilities
//!
//! This module handles secure key generation, wrapping of externally
//! supplied key bytes, and string representations (hex, base64) for
//! export/display.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::RngCore;

use crate::enums::CipherFamily;
use crate::error::{CryptError, Result};

/// Symmetric key material for one cipher family.
///
/// The byte length is validated against the family's rule at construction;
/// nothing else is — weak or degenerate patterns (all-zero included) are
/// accepted. Key bytes are NOT zeroed on drop; callers who need that must
/// manage the key's lifetime themselves.
#[derive(Clone)]
pub struct CipherKey {
    family: CipherFamily,
    bytes: Vec<u8>,
}

impl CipherKey {
    /// Generate a fresh, uniformly random key sized for `family`
    pub fn generate(family: CipherFamily) -> Self {
        let mut bytes = vec![0u8; family.generated_key_len()];
        rand::rng().fill_bytes(&mut bytes);
        Self { family, bytes }
    }

    /// Wrap externally supplied key bytes.
    ///
    /// Fails with [`CryptError::InvalidKeyLength`] if the length is outside
    /// the family's rule (4–56 bytes for Blowfish, exactly 24 for Triple
    /// DES). Never truncates or pads silently.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, family: CipherFamily) -> Result<Self> {
        let bytes = bytes.into();
        if !family.accepts_key_len(bytes.len()) {
            return Err(CryptError::InvalidKeyLength {
                family,
                len: bytes.len(),
            });
        }
        Ok(Self { family, bytes })
    }

    pub fn family(&self) -> CipherFamily {
        self.family
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Key bytes stay out of debug output
impl fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherKey")
            .field("family", &self.family)
            .field("len", &self.bytes.len())
            .field("bytes", &"<redacted>")
            .finish()
    }
}

/// Generate a new random key for `family`
#[inline]
pub fn generate_key(family: CipherFamily) -> CipherKey {
    CipherKey::generate(family)
}

/// String representations of a key for export/display
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
}

pub fn key_representations(key: &CipherKey) -> KeyRepr {
    KeyRepr {
        hex: hex::encode(key.as_bytes()),
        base64: STANDARD.encode(key.as_bytes()),
    }
}
