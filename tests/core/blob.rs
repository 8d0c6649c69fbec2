use prefcrypt::{CipherEngine, EncodedBlob, IV_LENGTH};

use crate::common::SAMPLE_KEY;

#[test]
fn test_engine_output_parses_as_blob() {
    let engine = CipherEngine::from_key_str(SAMPLE_KEY).unwrap();
    let text = engine.encrypt("0123456789abcdefX").unwrap();

    let blob = EncodedBlob::from_base64(&text).unwrap();
    assert_eq!(blob.iv.len(), IV_LENGTH);
    assert_eq!(blob.ciphertext.len(), 32);
    assert_eq!(blob.to_base64(), text);
}

#[test]
fn test_surrounding_whitespace_is_tolerated() {
    let engine = CipherEngine::from_key_str(SAMPLE_KEY).unwrap();
    let text = engine.encrypt("trim me").unwrap();
    assert_eq!(engine.decrypt(&format!("{text}\n")).unwrap(), "trim me");
}
