// src/crypto/decrypt.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;

use super::decrypt_with_iv;
use crate::error::Result;
use crate::iv::Iv;
use crate::key_ops::CipherKey;

/// Decrypt a byte buffer with the key and the IV returned by encryption.
///
/// Fails with [`CryptError::Padding`](crate::CryptError::Padding) if the
/// ciphertext length is not a block multiple or the padding is invalid after
/// decryption. A wrong key or IV that leaves structurally valid padding is
/// NOT detected — the result is silently wrong bytes.
pub fn decrypt_bytes(ciphertext: &[u8], key: &CipherKey, iv: &Iv) -> Result<Vec<u8>> {
    decrypt_with_iv(ciphertext, key, iv)
}

/// Decrypt base64 ciphertext + base64 IV back to a UTF-8 string
pub fn decrypt_text(ciphertext_b64: &str, key: &CipherKey, iv_b64: &str) -> Result<String> {
    let ciphertext = STANDARD.decode(ciphertext_b64)?;
    let iv = Iv::from_base64(iv_b64)?;
    let plaintext = decrypt_bytes(&ciphertext, key, &iv)?;
    Ok(String::from_utf8(plaintext)?)
}

/// Decrypt via the text path and re-parse the recovered JSON.
///
/// A parse failure ([`CryptError::JsonParse`](crate::CryptError::JsonParse))
/// is an expected, recoverable outcome of decrypting with a wrong key or IV,
/// not a fault in the input handling.
pub fn decrypt_json<T: DeserializeOwned>(
    ciphertext_b64: &str,
    key: &CipherKey,
    iv_b64: &str,
) -> Result<T> {
    let text = decrypt_text(ciphertext_b64, key, iv_b64)?;
    Ok(serde_json::from_str(&text)?)
}
