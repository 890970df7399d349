// src/crypto/mod.rs
//! Pure cryptographic operations — no I/O beyond the stream adapters
//!
//! The pipeline is fixed: CBC chaining with PKCS#7 padding over one of the
//! two 64-bit block cipher families. Every encrypt operation generates its
//! own fresh IV and returns it with the ciphertext; every decrypt operation
//! takes the IV as an explicit input. Nothing persists between calls.

mod decrypt;
mod encrypt;
pub mod stream;

pub use decrypt::{decrypt_bytes, decrypt_json, decrypt_text};
pub use encrypt::{encrypt_bytes, encrypt_json, encrypt_text};

use blowfish::Blowfish;
use cbc::cipher::generic_array::GenericArray;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, InnerIvInit, KeyInit};
use cbc::cipher::block_padding::Pkcs7;
use des::TdesEde3;
use serde::{Deserialize, Serialize};

use crate::enums::CipherFamily;
use crate::error::{CryptError, Result};
use crate::iv::Iv;
use crate::key_ops::CipherKey;

pub(crate) type BlowfishCbcEnc = cbc::Encryptor<Blowfish>;
pub(crate) type BlowfishCbcDec = cbc::Decryptor<Blowfish>;
pub(crate) type TdesCbcEnc = cbc::Encryptor<TdesEde3>;
pub(crate) type TdesCbcDec = cbc::Decryptor<TdesEde3>;

/// Ciphertext together with the IV that must travel with it.
///
/// The pairing is deliberate: decryption is impossible without the IV, so
/// the two are never handed back separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encrypted {
    pub ciphertext: Vec<u8>,
    pub iv: Iv,
}

/// Base64 transport form of [`Encrypted`], produced by the text/JSON APIs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedText {
    pub ciphertext: String,
    pub iv: String,
}

/// Build a CBC encryptor for `key` + `iv`.
///
/// The key length was validated at `CipherKey` construction, so the inner
/// cipher init cannot fail in practice; the error is still propagated rather
/// than unwrapped.
pub(crate) fn encryptor<C>(key: &CipherKey, iv: &Iv) -> Result<cbc::Encryptor<C>>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    let cipher = C::new_from_slice(key.as_bytes()).map_err(|_| CryptError::InvalidKeyLength {
        family: key.family(),
        len: key.len(),
    })?;
    Ok(cbc::Encryptor::inner_iv_init(
        cipher,
        GenericArray::from_slice(iv.as_bytes()),
    ))
}

pub(crate) fn decryptor<C>(key: &CipherKey, iv: &Iv) -> Result<cbc::Decryptor<C>>
where
    C: BlockCipher + BlockDecryptMut + KeyInit,
{
    let cipher = C::new_from_slice(key.as_bytes()).map_err(|_| CryptError::InvalidKeyLength {
        family: key.family(),
        len: key.len(),
    })?;
    Ok(cbc::Decryptor::inner_iv_init(
        cipher,
        GenericArray::from_slice(iv.as_bytes()),
    ))
}

/// One-shot CBC+PKCS#7 encryption under an already-chosen IV
pub(crate) fn encrypt_with_iv(plaintext: &[u8], key: &CipherKey, iv: &Iv) -> Result<Vec<u8>> {
    match key.family() {
        CipherFamily::Blowfish => {
            Ok(encryptor::<Blowfish>(key, iv)?.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
        CipherFamily::TripleDes => {
            Ok(encryptor::<TdesEde3>(key, iv)?.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
    }
}

/// One-shot CBC+PKCS#7 decryption; [`CryptError::Padding`] on malformed
/// length or padding
pub(crate) fn decrypt_with_iv(ciphertext: &[u8], key: &CipherKey, iv: &Iv) -> Result<Vec<u8>> {
    let plaintext = match key.family() {
        CipherFamily::Blowfish => {
            decryptor::<Blowfish>(key, iv)?.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        }
        CipherFamily::TripleDes => {
            decryptor::<TdesEde3>(key, iv)?.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        }
    };
    plaintext.map_err(|_| CryptError::Padding)
}
