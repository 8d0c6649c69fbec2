use cipher::block_padding::{Pkcs7, RawPadding};
use cipher::{BlockDecryptMut, KeyIvInit, StreamCipher};

use super::{Aes128CbcDec, Aes128Ctr};
use crate::aliases::{Iv, SymmetricKey};
use crate::consts::IV_LENGTH;
use crate::enums::CipherMode;
use crate::error::{CipherError, Result};

/// Decrypt ciphertext (without the IV prefix) → plaintext bytes
///
/// Bad padding and partial blocks both surface as
/// [`CipherError::DecryptionFailure`].
pub fn decrypt_to_vec(
    mode: CipherMode,
    key: &SymmetricKey,
    iv: &Iv,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % IV_LENGTH != 0 {
        return Err(CipherError::DecryptionFailure);
    }

    match mode {
        CipherMode::Cbc => {
            let decryptor = Aes128CbcDec::new_from_slices(key.expose_secret(), iv)
                .map_err(|_| CipherError::DecryptionFailure)?;
            decryptor
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
                .map_err(|_| CipherError::DecryptionFailure)
        }
        CipherMode::Ctr => {
            let mut keystream = Aes128Ctr::new_from_slices(key.expose_secret(), iv)
                .map_err(|_| CipherError::DecryptionFailure)?;
            let mut buffer = ciphertext.to_vec();
            keystream.apply_keystream(&mut buffer);

            let last_block = buffer.len() - IV_LENGTH;
            let kept = Pkcs7::raw_unpad(&buffer[last_block..])
                .map_err(|_| CipherError::DecryptionFailure)?
                .len();
            buffer.truncate(last_block + kept);
            Ok(buffer)
        }
    }
}
