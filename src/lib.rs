//! filecrypt - password-based single-file encryption.
//!
//! The engine turns a password into a 32-byte key, encrypts a file's bytes
//! with AES-256-CBC under a fresh random IV, and stores `IV || ciphertext`
//! next to the source as `<name>.enc`.
//!
//! There is no authentication tag: a wrong password and a tampered file are
//! both reported as [`CryptError::InvalidPadding`].

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod telemetry;

pub use config::Config;
pub use crypto::{decrypt, derive_key, encrypt, CipherEngine, FileCodec, Key, KeyDeriver};
pub use error::CryptError;
