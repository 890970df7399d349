// src/file_ops.rs
//! File-level encryption/decryption convenience
//!
//! Thin wrappers that run a file through the streaming pipeline without
//! buffering it whole. The IV returned by `encrypt_file` must be stored by
//! the caller — the output file holds only ciphertext.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::crypto::stream::{decrypt_stream, encrypt_stream, EncryptedStream};
use crate::error::Result;
use crate::iv::Iv;
use crate::key_ops::CipherKey;

/// Encrypt a file on disk, streaming. Returns the IV needed to decrypt it.
pub fn encrypt_file<P: AsRef<Path>>(input_path: P, output_path: P, key: &CipherKey) -> Result<Iv> {
    let source = File::open(input_path.as_ref())?;
    let mut sink = File::create(output_path.as_ref())?;

    let EncryptedStream { mut reader, iv } = encrypt_stream(source, key)?;
    io::copy(&mut reader, &mut sink)?;
    Ok(iv)
}

/// Decrypt a file on disk, streaming. Returns the plaintext size in bytes.
pub fn decrypt_file<P: AsRef<Path>>(
    input_path: P,
    output_path: P,
    key: &CipherKey,
    iv: &Iv,
) -> Result<u64> {
    let source = File::open(input_path.as_ref())?;
    let mut reader = decrypt_stream(source, key, iv)?;
    let mut sink = File::create(output_path.as_ref())?;

    let plaintext_size_bytes = io::copy(&mut reader, &mut sink)?;
    Ok(plaintext_size_bytes)
}
