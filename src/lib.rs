// src/lib.rs
//! cbc-envelope — Blowfish / Triple-DES CBC encryption that returns a fresh
//! random IV alongside every ciphertext
//!
//! Features:
//! - Key generation and validated key wrapping for both cipher families
//! - Byte, base64-text, streaming, and JSON encrypt/decrypt variants
//! - A fresh, cryptographically random 8-byte IV per encryption call,
//!   paired with the ciphertext in one struct so the two travel together
//!
//! # Safety caveats (read before use)
//!
//! - **No authentication.** CBC with PKCS#7 padding provides confidentiality
//!   only. There is no MAC or AEAD: ciphertext can be tampered with
//!   undetected, and the only decrypt-time error (`Padding`) is NOT an
//!   integrity check. Decrypting with a wrong key or IV usually yields a
//!   padding, UTF-8, or JSON error — but can silently yield garbage bytes.
//!   Callers who need integrity must layer a MAC themselves.
//! - **IVs must never be reused.** Encryption handles this by generating a
//!   new IV internally on every call; never cache an `Iv` to encrypt twice.
//!   IVs are not secret and may be stored/transmitted openly.
//! - **No key zeroization.** `CipherKey` does not wipe its bytes on drop.

pub mod consts;
pub mod crypto;
pub mod enums;
pub mod error;
pub mod file_ops;
pub mod iv;
pub mod key_ops;

// Re-export everything users need at the crate root
pub use crypto::stream::{
    decrypt_stream, encrypt_stream, read_to_vec, DecryptingReader, EncryptedStream,
    EncryptingReader,
};
pub use crypto::{
    decrypt_bytes, decrypt_json, decrypt_text, encrypt_bytes, encrypt_json, encrypt_text,
    Encrypted, EncryptedText,
};
pub use enums::CipherFamily;
pub use error::{CryptError, Result};
pub use file_ops::{decrypt_file, encrypt_file};
pub use iv::Iv;
pub use key_ops::{generate_key, key_representations, CipherKey, KeyRepr};
