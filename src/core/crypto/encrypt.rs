use cipher::block_padding::{Pkcs7, RawPadding};
use cipher::{BlockEncryptMut, KeyIvInit, StreamCipher};
use rand::RngCore;

use super::{Aes128CbcEnc, Aes128Ctr};
use crate::aliases::{Iv, SymmetricKey};
use crate::consts::IV_LENGTH;
use crate::enums::CipherMode;
use crate::error::{CipherError, Result};

/// Fresh random IV from the thread-local CSPRNG
pub fn generate_iv() -> Iv {
    let mut iv = [0u8; IV_LENGTH];
    rand::rng().fill_bytes(&mut iv);
    iv
}

/// Encrypt plaintext → ciphertext (without the IV prefix)
///
/// Output is always a non-empty multiple of the block size: an empty
/// plaintext becomes one full padding block.
pub fn encrypt_to_vec(
    mode: CipherMode,
    key: &SymmetricKey,
    iv: &Iv,
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    match mode {
        CipherMode::Cbc => {
            let encryptor = Aes128CbcEnc::new_from_slices(key.expose_secret(), iv)
                .map_err(|_| CipherError::EncryptionFailure)?;
            Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
        CipherMode::Ctr => {
            let mut keystream = Aes128Ctr::new_from_slices(key.expose_secret(), iv)
                .map_err(|_| CipherError::EncryptionFailure)?;
            let mut buffer = pad_to_block(plaintext);
            keystream.apply_keystream(&mut buffer);
            Ok(buffer)
        }
    }
}

// CTR has no padding of its own; legacy blobs are still whole blocks
fn pad_to_block(plaintext: &[u8]) -> Vec<u8> {
    let pos = plaintext.len() % IV_LENGTH;
    let padded_len = plaintext.len() - pos + IV_LENGTH;

    let mut buffer = Vec::with_capacity(padded_len);
    buffer.extend_from_slice(plaintext);
    buffer.resize(padded_len, 0);

    let last_block = padded_len - IV_LENGTH;
    Pkcs7::raw_pad(&mut buffer[last_block..], pos);
    buffer
}
