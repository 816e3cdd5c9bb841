//! Password-to-key derivation.
//!
//! Two schemes produce the same 32-byte [`Key`]:
//! - [`LegacyKeyDeriver`]: UTF-8 bytes zero-padded or truncated to 32 bytes.
//!   No salt and no cost factor, so short passwords give predictable keys.
//!   Kept because existing `.enc` files were written with it.
//! - [`Pbkdf2KeyDeriver`]: PBKDF2-HMAC-SHA256 with a caller-supplied salt.
//!
//! Callers only ever see a [`Key`], so swapping the scheme does not touch the
//! cipher engine or the file codec.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, Zeroizing};

/// Encryption key size (256 bits)
pub const KEY_SIZE: usize = 32;
/// Minimum salt size accepted for PBKDF2 (16 bytes = 128 bits)
pub const MIN_SALT_SIZE: usize = 16;
/// PBKDF2 iteration count (600,000 iterations per OWASP 2023 recommendations)
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 600_000;

/// A 32-byte AES-256 key. Wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Key(Zeroizing<[u8; KEY_SIZE]>);

impl Key {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Key([REDACTED])")
    }
}

/// Maps an arbitrary-length password to a fixed-length [`Key`].
///
/// Implementations must be total: every input string yields a key.
pub trait KeyDeriver {
    fn derive(&self, password: &str) -> Key;

    /// Short scheme name for logs.
    fn name(&self) -> &'static str;
}

/// Zero-pad / truncate derivation. Deterministic and unsalted.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyKeyDeriver;

impl KeyDeriver for LegacyKeyDeriver {
    fn derive(&self, password: &str) -> Key {
        derive_key(password)
    }

    fn name(&self) -> &'static str {
        "legacy"
    }
}

/// Salted, iterated derivation using PBKDF2-HMAC-SHA256.
#[derive(Clone)]
pub struct Pbkdf2KeyDeriver {
    salt: Vec<u8>,
    iterations: u32,
}

impl Pbkdf2KeyDeriver {
    pub fn new(salt: Vec<u8>, iterations: u32) -> Self {
        Self { salt, iterations }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl KeyDeriver for Pbkdf2KeyDeriver {
    fn derive(&self, password: &str) -> Key {
        let mut key = [0u8; KEY_SIZE];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), &self.salt, self.iterations, &mut key[..]);
        let result = Key::from_bytes(key);
        key.zeroize();
        result
    }

    fn name(&self) -> &'static str {
        "pbkdf2"
    }
}

impl std::fmt::Debug for Pbkdf2KeyDeriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pbkdf2KeyDeriver")
            .field("salt_len", &self.salt.len())
            .field("iterations", &self.iterations)
            .finish()
    }
}

/// Legacy derivation: UTF-8 bytes, right-padded with zeros or cut to 32 bytes.
///
/// Truncation is byte-wise and may split a multi-byte character.
pub fn derive_key(password: &str) -> Key {
    let bytes = password.as_bytes();
    let len = bytes.len().min(KEY_SIZE);
    let mut key = [0u8; KEY_SIZE];
    key[..len].copy_from_slice(&bytes[..len]);
    let result = Key::from_bytes(key);
    key.zeroize();
    result
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
