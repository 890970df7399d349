// src/crypto/encrypt.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use super::{encrypt_with_iv, Encrypted, EncryptedText};
use crate::error::Result;
use crate::iv::Iv;
use crate::key_ops::CipherKey;

/// Encrypt a byte buffer under `key` with a freshly generated IV.
///
/// Repeated calls with identical inputs produce different ciphertext, since
/// the IV is new every time. The returned IV must be kept with the
/// ciphertext — decryption requires it.
pub fn encrypt_bytes(plaintext: &[u8], key: &CipherKey) -> Result<Encrypted> {
    let iv = Iv::generate();
    let ciphertext = encrypt_with_iv(plaintext, key, &iv)?;
    Ok(Encrypted { ciphertext, iv })
}

/// Encrypt a UTF-8 string; ciphertext and IV come back base64-encoded
pub fn encrypt_text(plaintext: &str, key: &CipherKey) -> Result<EncryptedText> {
    let encrypted = encrypt_bytes(plaintext.as_bytes(), key)?;
    Ok(EncryptedText {
        ciphertext: STANDARD.encode(&encrypted.ciphertext),
        iv: encrypted.iv.to_base64(),
    })
}

/// Serialize `value` to JSON text and encrypt it via the text path
pub fn encrypt_json<T: Serialize>(value: &T, key: &CipherKey) -> Result<EncryptedText> {
    let text = serde_json::to_string(value)?;
    encrypt_text(&text, key)
}
