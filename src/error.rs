// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

use crate::enums::CipherFamily;

pub type Result<T> = std::result::Result<T, CryptError>;

#[derive(Error, Debug)]
pub enum CryptError {
    /// Caller-supplied key bytes do not match the family's required length.
    /// Raised at key construction, never later.
    #[error("invalid key length for {family}: got {len} bytes")]
    InvalidKeyLength { family: CipherFamily, len: usize },

    /// Ciphertext length is not a block multiple, or the trailing padding is
    /// structurally invalid after decryption.
    ///
    /// This is the only decrypt-time failure signal and it is NOT an
    /// integrity check: a wrong key or IV that happens to leave a valid
    /// padding suffix decrypts "successfully" to wrong bytes.
    #[error("ciphertext has invalid length or padding")]
    Padding,

    /// An IV was supplied with the wrong number of bytes.
    #[error("invalid IV length: expected {expected} bytes, got {len}")]
    InvalidIvLength { expected: usize, len: usize },

    /// Base64 transport decoding of a ciphertext or IV failed.
    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Recovered plaintext is not valid UTF-8 — an expected outcome of
    /// decrypting with a wrong key or IV.
    #[error("recovered plaintext is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Recovered text is not well-formed JSON — likewise an expected outcome
    /// of a wrong key or IV, recoverable by matching on it.
    #[error("recovered text is not well-formed JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
