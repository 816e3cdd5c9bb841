//! AES-256-CBC cipher engine.
//!
//! Produces and consumes containers: a 16-byte IV followed by CBC
//! ciphertext over PKCS#7-padded plaintext.
//!
//! # Security
//! - A fresh IV is drawn from the OS CSPRNG for every encryption
//! - There is no authentication tag; the padding check is the only signal
//!   that a key or ciphertext is wrong

use aes::Aes256;
use cbc::cipher::generic_array::GenericArray;
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;

use super::key::Key;
use crate::error::CryptError;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES block size
pub const BLOCK_SIZE: usize = 16;
/// IV size (one block)
pub const IV_SIZE: usize = 16;

/// CBC encrypt/decrypt bound to one key.
///
/// The key schedule is rebuilt per call and wiped when the mode drops.
#[derive(Clone)]
pub struct CipherEngine {
    key: Key,
}

impl CipherEngine {
    pub fn new(key: &Key) -> Self {
        Self { key: key.clone() }
    }

    /// Encrypt under a fresh random IV. Returns IV || ciphertext.
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let iv = generate_iv();
        self.encrypt_with_iv(plaintext, &iv)
    }

    /// Encrypt under a caller-chosen IV. Never reuse an IV with the same key.
    pub fn encrypt_with_iv(&self, plaintext: &[u8], iv: &[u8; IV_SIZE]) -> Vec<u8> {
        let encryptor = Aes256CbcEnc::new(
            GenericArray::from_slice(self.key.as_bytes()),
            GenericArray::from_slice(iv),
        );
        let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

        let mut container = Vec::with_capacity(IV_SIZE + ciphertext.len());
        container.extend_from_slice(iv);
        container.extend_from_slice(&ciphertext);

        tracing::debug!(plaintext_len = plaintext.len(), container_len = container.len(), "encrypted");
        container
    }

    /// Split off the IV, CBC-decrypt the rest and strip the padding.
    pub fn decrypt(&self, container: &[u8]) -> Result<Vec<u8>, CryptError> {
        if container.len() < IV_SIZE + BLOCK_SIZE || (container.len() - IV_SIZE) % BLOCK_SIZE != 0 {
            return Err(CryptError::MalformedContainer { len: container.len() });
        }

        let (iv, ciphertext) = container.split_at(IV_SIZE);
        let decryptor = Aes256CbcDec::new(
            GenericArray::from_slice(self.key.as_bytes()),
            GenericArray::from_slice(iv),
        );
        let plaintext = decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| CryptError::InvalidPadding)?;

        tracing::debug!(container_len = container.len(), plaintext_len = plaintext.len(), "decrypted");
        Ok(plaintext)
    }
}

/// Encrypt `plaintext` under `key` with a fresh IV.
pub fn encrypt(plaintext: &[u8], key: &Key) -> Vec<u8> {
    CipherEngine::new(key).encrypt(plaintext)
}

/// Decrypt a container produced by [`encrypt`].
pub fn decrypt(container: &[u8], key: &Key) -> Result<Vec<u8>, CryptError> {
    CipherEngine::new(key).decrypt(container)
}

/// Generate a random IV from the OS CSPRNG.
pub fn generate_iv() -> [u8; IV_SIZE] {
    let mut iv = [0u8; IV_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut iv[..]);
    iv
}

#[cfg(test)]
#[path = "cipher_tests.rs"]
mod tests;
