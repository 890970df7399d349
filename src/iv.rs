// src/iv.rs
//! Initialization vectors — fresh random 8-byte values, one per encryption
//!
//! The historic defect this crate exists to fix was a fixed, predictable IV.
//! Every encryption operation calls [`Iv::generate`] itself; callers never
//! pick IVs for encryption, only carry them to the matching decryption.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::consts::IV_LEN;
use crate::error::{CryptError, Result};

/// An 8-byte CBC initialization vector.
///
/// Unique per encryption under a given key, but not secret — it is returned
/// alongside the ciphertext precisely so it can travel openly. Any 8-byte
/// value is accepted for decryption: a wrong IV does not raise, it silently
/// yields garbage plaintext (see the crate-level caveats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Iv([u8; IV_LEN]);

impl Iv {
    /// Generate a fresh IV from the process entropy source.
    ///
    /// `rand::rng()` is a lazily initialized, per-thread CSPRNG reseeded
    /// from the OS — the shared generator is never rebuilt per call, and
    /// concurrent use needs no external locking. Entropy-source failure
    /// panics inside `rand`; there is no fallback source.
    pub fn generate() -> Self {
        let mut bytes = [0u8; IV_LEN];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub const fn from_bytes(bytes: [u8; IV_LEN]) -> Self {
        Self(bytes)
    }

    /// Wrap an IV received as a byte slice, checking only its length
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; IV_LEN] =
            bytes
                .try_into()
                .map_err(|_| CryptError::InvalidIvLength {
                    expected: IV_LEN,
                    len: bytes.len(),
                })?;
        Ok(Self(bytes))
    }

    /// Decode an IV from its base64 transport form
    pub fn from_base64(encoded: &str) -> Result<Self> {
        Self::from_slice(&STANDARD.decode(encoded)?)
    }

    /// Encode the IV in its base64 transport form
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }

    pub const fn as_bytes(&self) -> &[u8; IV_LEN] {
        &self.0
    }
}
