// tests/key_tests.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cbc_envelope::error::CryptError;
use cbc_envelope::{decrypt_bytes, encrypt_bytes, generate_key, key_representations};
use cbc_envelope::{CipherFamily, CipherKey};

#[test]
fn test_generated_key_lengths() {
    assert_eq!(generate_key(CipherFamily::Blowfish).len(), 16);
    assert_eq!(generate_key(CipherFamily::TripleDes).len(), 24);
}

#[test]
fn test_generated_keys_differ() {
    let a = generate_key(CipherFamily::TripleDes);
    let b = generate_key(CipherFamily::TripleDes);
    assert_ne!(a.as_bytes(), b.as_bytes());
}

#[test]
fn test_from_bytes_rejects_wrong_lengths() {
    let too_short = CipherKey::from_bytes(vec![0u8; 3], CipherFamily::Blowfish);
    assert!(matches!(
        too_short,
        Err(CryptError::InvalidKeyLength {
            family: CipherFamily::Blowfish,
            len: 3
        })
    ));

    let too_long = CipherKey::from_bytes(vec![0u8; 57], CipherFamily::Blowfish);
    assert!(too_long.is_err());

    for len in [16, 23, 25] {
        let wrong = CipherKey::from_bytes(vec![0u8; len], CipherFamily::TripleDes);
        assert!(
            matches!(wrong, Err(CryptError::InvalidKeyLength { len: l, .. }) if l == len),
            "TripleDES must reject {len}-byte keys"
        );
    }
}

#[test]
fn test_blowfish_accepts_full_variable_range() {
    // Boundary sizes round-trip, not just the generated default
    for len in [4usize, 16, 56] {
        let key = CipherKey::from_bytes(vec![0xA5; len], CipherFamily::Blowfish).unwrap();
        let encrypted = encrypt_bytes(b"variable key material", &key).unwrap();
        let decrypted = decrypt_bytes(&encrypted.ciphertext, &key, &encrypted.iv).unwrap();
        assert_eq!(decrypted, b"variable key material");
    }
}

#[test]
fn test_all_zero_key_is_accepted() {
    // No strength validation: degenerate keys are the caller's problem
    let key = CipherKey::from_bytes(vec![0u8; 24], CipherFamily::TripleDes).unwrap();
    let encrypted = encrypt_bytes(b"zero key", &key).unwrap();
    let decrypted = decrypt_bytes(&encrypted.ciphertext, &key, &encrypted.iv).unwrap();
    assert_eq!(decrypted, b"zero key");
}

#[test]
fn test_key_representations() {
    let key = CipherKey::from_bytes(vec![0xAB; 24], CipherFamily::TripleDes).unwrap();
    let repr = key_representations(&key);

    assert_eq!(repr.hex.len(), 48);
    assert_eq!(repr.hex, "ab".repeat(24));
    assert_eq!(STANDARD.decode(&repr.base64).unwrap(), key.as_bytes());
}

#[test]
fn test_debug_output_redacts_key_bytes() {
    let key = CipherKey::from_bytes(vec![0xCD; 24], CipherFamily::TripleDes).unwrap();
    let debug = format!("{key:?}");
    assert!(debug.contains("<redacted>"));
    assert!(!debug.contains("205")); // 0xCD
}
