use prefcrypt::consts::{KEY_FILLER_BYTE, KEY_LENGTH};
use prefcrypt::key_ops::{
    derive_from_bytes, derive_from_hex, derive_from_identity, derive_from_string, generate_key,
    key_representations,
};
use prefcrypt::{CipherEngine, CipherError, CipherMode, KeyPolicy, StaticIdentity, SymmetricKey};

const DEVICE_ID: &[u8] = b"9774d56d682e549c";

#[test]
fn test_too_short_key_is_rejected() {
    let err = CipherEngine::from_key_str("?").unwrap_err();
    assert_eq!(
        err,
        CipherError::InvalidKeyLength {
            expected: KEY_LENGTH,
            actual: 1
        }
    );
    assert!(err.to_string().contains("too short"));
}

#[test]
fn test_too_long_key_is_rejected() {
    let err = CipherEngine::from_key_str(&".".repeat(KEY_LENGTH + 1)).unwrap_err();
    assert_eq!(
        err,
        CipherError::InvalidKeyLength {
            expected: KEY_LENGTH,
            actual: 17
        }
    );
    assert!(err.to_string().contains("too long"));
}

#[test]
fn test_key_length_counts_utf8_bytes() {
    // 16 chars, more than 16 bytes
    assert!(derive_from_string("ああああああああああああああああ", KeyPolicy::Strict).is_err());
    // 5 chars × 3 bytes + 1 = 16 bytes
    assert!(derive_from_string("あいうえおx", KeyPolicy::Strict).is_ok());
}

#[test]
fn test_lenient_policy_pads_and_truncates() {
    let padded = derive_from_string("short", KeyPolicy::Lenient).unwrap();
    let mut expected = [KEY_FILLER_BYTE; KEY_LENGTH];
    expected[..5].copy_from_slice(b"short");
    assert_eq!(padded.expose_secret(), &expected);

    let truncated = derive_from_string("0123456789abcdefXYZ", KeyPolicy::Lenient).unwrap();
    assert_eq!(
        truncated,
        derive_from_string("0123456789abcdef", KeyPolicy::Strict).unwrap()
    );

    assert!(derive_from_string("", KeyPolicy::Lenient).is_err());
}

#[test]
fn test_lenient_engine_roundtrip() {
    let engine =
        CipherEngine::from_key_str_with("pw", KeyPolicy::Lenient, CipherMode::Cbc).unwrap();
    let blob = engine.encrypt("value").unwrap();
    assert_eq!(engine.decrypt(&blob).unwrap(), "value");
}

#[test]
fn test_raw_and_hex_keys() {
    assert!(derive_from_bytes(&[0u8; 15]).is_err());
    assert!(derive_from_bytes(&[0u8; 17]).is_err());

    let from_hex = derive_from_hex("000102030405060708090a0b0c0d0e0f").unwrap();
    let from_bytes = derive_from_bytes(&(0u8..16).collect::<Vec<_>>()).unwrap();
    assert_eq!(from_hex, from_bytes);

    assert!(matches!(
        derive_from_hex("zz"),
        Err(CipherError::InvalidKeyEncoding(_))
    ));
    assert!(matches!(
        derive_from_hex("0001"),
        Err(CipherError::InvalidKeyLength { actual: 2, .. })
    ));
}

#[test]
fn test_identity_key_is_md5_xor_device_id() {
    // MD5("") = d41d8cd98f00b204e9800998ecf8427e
    let key = derive_from_identity(&[0u8; KEY_LENGTH], "").unwrap();
    assert_eq!(hex::encode(key.expose_secret()), "d41d8cd98f00b204e9800998ecf8427e");

    let flipped = derive_from_identity(&[0xFF; KEY_LENGTH], "").unwrap();
    assert_eq!(hex::encode(flipped.expose_secret()), "2be2732670ff4dfb167ff6671307bd81");
}

#[test]
fn test_identity_key_is_deterministic_and_app_scoped() {
    let a1 = derive_from_identity(DEVICE_ID, "pkg-a").unwrap();
    let a2 = derive_from_identity(DEVICE_ID, "pkg-a").unwrap();
    let b = derive_from_identity(DEVICE_ID, "pkg-b").unwrap();
    assert_eq!(a1, a2);
    assert_ne!(a1, b);
}

#[test]
fn test_identity_requires_16_byte_device_id() {
    assert!(matches!(
        derive_from_identity(b"short", "pkg"),
        Err(CipherError::InvalidKeyLength { actual: 5, .. })
    ));
}

#[test]
fn test_identity_engine_roundtrip_across_instances() {
    let identity = StaticIdentity::new(DEVICE_ID, "com.example.app");
    let engine = CipherEngine::from_provider(&identity, CipherMode::Cbc).unwrap();

    let blob = engine.encrypt("Hello, world!").unwrap();
    let again = CipherEngine::from_provider(&identity, CipherMode::Cbc).unwrap();
    assert_eq!(again.decrypt(&blob).unwrap(), "Hello, world!");

    let other_app =
        CipherEngine::from_identity(DEVICE_ID, "com.example.other", CipherMode::Cbc).unwrap();
    if let Ok(text) = other_app.decrypt(&blob) {
        assert_ne!(text, "Hello, world!");
    }
}

#[test]
fn test_generate_key_is_random() {
    let key1 = generate_key();
    let key2 = generate_key();
    assert_ne!(key1, key2);
    assert_ne!(key1.fingerprint(), key2.fingerprint());
}

#[test]
fn test_key_representations_are_consistent() {
    let key = SymmetricKey::new([0x42; KEY_LENGTH]);
    let repr = key_representations(&key);

    assert_eq!(repr.hex, "42424242424242424242424242424242");
    assert_eq!(repr.base64, "QkJCQkJCQkJCQkJCQkJCQg==");
    assert_eq!(repr.fingerprint.len(), 16);
    assert_eq!(repr.fingerprint, key.fingerprint());
}
