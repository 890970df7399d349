// src/crypto/stream.rs
//! Incremental CBC over `io::Read` sources
//!
//! The stream variants apply the exact same cipher configuration as the
//! in-memory ones, but transform lazily as the returned reader is consumed.
//! Single pass only: a drained reader stays drained. Encryption generates
//! its IV synchronously, before any output exists, so the caller always has
//! it in hand. Decryption holds the final ciphertext block back until EOF,
//! where the PKCS#7 padding is validated and stripped; a malformed tail
//! surfaces as an `io::ErrorKind::InvalidData` read error.

use std::io::{self, Read};

use blowfish::Blowfish;
use cbc::cipher::block_padding::{Padding, Pkcs7};
use cbc::cipher::{Block, BlockDecryptMut, BlockEncryptMut, BlockSizeUser};
use des::TdesEde3;

use super::{decryptor, encryptor, BlowfishCbcDec, BlowfishCbcEnc, TdesCbcDec, TdesCbcEnc};
use crate::consts::STREAM_CHUNK_SIZE;
use crate::enums::CipherFamily;
use crate::error::{CryptError, Result};
use crate::iv::Iv;
use crate::key_ops::CipherKey;

/// An encrypting reader handle paired with the IV that must travel with the
/// ciphertext it will produce
pub struct EncryptedStream<R: Read> {
    pub reader: EncryptingReader<R>,
    pub iv: Iv,
}

/// Start encrypting `source` under `key`.
///
/// The IV is generated here, before any ciphertext is produced; the reader
/// emits ciphertext as it is pulled from.
pub fn encrypt_stream<R: Read>(source: R, key: &CipherKey) -> Result<EncryptedStream<R>> {
    let iv = Iv::generate();
    let inner = match key.family() {
        CipherFamily::Blowfish => {
            EncInner::Blowfish(EncryptState::new(encryptor::<Blowfish>(key, &iv)?, source))
        }
        CipherFamily::TripleDes => {
            EncInner::TripleDes(EncryptState::new(encryptor::<TdesEde3>(key, &iv)?, source))
        }
    };
    Ok(EncryptedStream {
        reader: EncryptingReader { inner },
        iv,
    })
}

/// Start decrypting `source` under `key` with the IV from encryption
pub fn decrypt_stream<R: Read>(source: R, key: &CipherKey, iv: &Iv) -> Result<DecryptingReader<R>> {
    let inner = match key.family() {
        CipherFamily::Blowfish => {
            DecInner::Blowfish(DecryptState::new(decryptor::<Blowfish>(key, iv)?, source))
        }
        CipherFamily::TripleDes => {
            DecInner::TripleDes(DecryptState::new(decryptor::<TdesEde3>(key, iv)?, source))
        }
    };
    Ok(DecryptingReader { inner })
}

/// Drain a reader to completion into a buffer
pub fn read_to_vec<R: Read>(mut source: R) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    source.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Reader producing CBC+PKCS#7 ciphertext from a plaintext source
pub struct EncryptingReader<R: Read> {
    inner: EncInner<R>,
}

enum EncInner<R: Read> {
    Blowfish(EncryptState<BlowfishCbcEnc, R>),
    TripleDes(EncryptState<TdesCbcEnc, R>),
}

impl<R: Read> Read for EncryptingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.inner {
            EncInner::Blowfish(state) => state.read(buf),
            EncInner::TripleDes(state) => state.read(buf),
        }
    }
}

/// Reader producing plaintext from a CBC+PKCS#7 ciphertext source
pub struct DecryptingReader<R: Read> {
    inner: DecInner<R>,
}

enum DecInner<R: Read> {
    Blowfish(DecryptState<BlowfishCbcDec, R>),
    TripleDes(DecryptState<TdesCbcDec, R>),
}

impl<R: Read> Read for DecryptingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.inner {
            DecInner::Blowfish(state) => state.read(buf),
            DecInner::TripleDes(state) => state.read(buf),
        }
    }
}

struct EncryptState<M: BlockEncryptMut, R: Read> {
    mode: M,
    source: R,
    // plaintext bytes still short of a full block
    partial: Block<M>,
    partial_len: usize,
    out: Vec<u8>,
    pos: usize,
    finished: bool,
}

impl<M: BlockEncryptMut, R: Read> EncryptState<M, R> {
    fn new(mode: M, source: R) -> Self {
        Self {
            mode,
            source,
            partial: Block::<M>::default(),
            partial_len: 0,
            out: Vec::new(),
            pos: 0,
            finished: false,
        }
    }

    /// Pull one chunk from the source and encrypt every completed block.
    /// On EOF, pad the remainder (always 1..=block_size pad bytes) and emit
    /// the final block.
    fn fill(&mut self) -> io::Result<()> {
        self.out.clear();
        self.pos = 0;

        let mut chunk = [0u8; STREAM_CHUNK_SIZE];
        let n = self.source.read(&mut chunk)?;
        if n == 0 {
            let block_size = self.partial.len();
            let pad = (block_size - self.partial_len) as u8;
            for byte in self.partial[self.partial_len..].iter_mut() {
                *byte = pad;
            }
            self.mode.encrypt_block_mut(&mut self.partial);
            self.out.extend_from_slice(&self.partial);
            self.finished = true;
            return Ok(());
        }

        for &byte in &chunk[..n] {
            self.partial[self.partial_len] = byte;
            self.partial_len += 1;
            if self.partial_len == self.partial.len() {
                self.mode.encrypt_block_mut(&mut self.partial);
                self.out.extend_from_slice(&self.partial);
                self.partial_len = 0;
            }
        }
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            if self.pos < self.out.len() {
                let len = usize::min(buf.len(), self.out.len() - self.pos);
                buf[..len].copy_from_slice(&self.out[self.pos..self.pos + len]);
                self.pos += len;
                return Ok(len);
            }
            if self.finished {
                return Ok(0);
            }
            self.fill()?;
        }
    }
}

struct DecryptState<M: BlockDecryptMut, R: Read> {
    mode: M,
    source: R,
    // ciphertext not yet decrypted; always keeps one full block back so the
    // padding pass at EOF sees the true final block
    held: Vec<u8>,
    out: Vec<u8>,
    pos: usize,
    finished: bool,
}

impl<M: BlockDecryptMut, R: Read> DecryptState<M, R> {
    fn new(mode: M, source: R) -> Self {
        Self {
            mode,
            source,
            held: Vec::new(),
            out: Vec::new(),
            pos: 0,
            finished: false,
        }
    }

    fn fill(&mut self) -> io::Result<()> {
        self.out.clear();
        self.pos = 0;
        let block_size = M::block_size();

        let mut chunk = [0u8; STREAM_CHUNK_SIZE];
        let n = self.source.read(&mut chunk)?;
        if n == 0 {
            // The stream must end on exactly one held-back block; anything
            // else means the ciphertext length was not a block multiple.
            if self.held.len() != block_size {
                return Err(invalid_data());
            }
            let mut block = Block::<M>::clone_from_slice(&self.held);
            self.mode.decrypt_block_mut(&mut block);
            let unpadded = Pkcs7::unpad(&block).map_err(|_| invalid_data())?;
            self.out.extend_from_slice(unpadded);
            self.held.clear();
            self.finished = true;
            return Ok(());
        }

        self.held.extend_from_slice(&chunk[..n]);
        let keep = if self.held.len() % block_size == 0 {
            block_size
        } else {
            self.held.len() % block_size
        };
        let emit = self.held.len() - keep;
        for blk in self.held[..emit].chunks(block_size) {
            let mut block = Block::<M>::clone_from_slice(blk);
            self.mode.decrypt_block_mut(&mut block);
            self.out.extend_from_slice(&block);
        }
        self.held.drain(..emit);
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            if self.pos < self.out.len() {
                let len = usize::min(buf.len(), self.out.len() - self.pos);
                buf[..len].copy_from_slice(&self.out[self.pos..self.pos + len]);
                self.pos += len;
                return Ok(len);
            }
            if self.finished {
                return Ok(0);
            }
            self.fill()?;
        }
    }
}

fn invalid_data() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, CryptError::Padding)
}
