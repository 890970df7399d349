// src/consts.rs
//! Shared constants — cipher parameters and defaults

/// Block size of both supported ciphers (Blowfish, Triple DES), in bytes
pub const BLOCK_SIZE: usize = 8;

/// IV length — always one block
pub const IV_LEN: usize = BLOCK_SIZE;

/// Smallest key Blowfish accepts (32 bits)
pub const BLOWFISH_MIN_KEY_LEN: usize = 4;

/// Largest key Blowfish accepts (448 bits)
pub const BLOWFISH_MAX_KEY_LEN: usize = 56;

/// Key length produced by `generate_key` for Blowfish (128 bits)
pub const BLOWFISH_DEFAULT_KEY_LEN: usize = 16;

/// Three-key Triple DES key length (192 bits) — the only accepted size
pub const TDES_KEY_LEN: usize = 24;

/// Read granularity of the streaming pipeline
pub const STREAM_CHUNK_SIZE: usize = 4096;
