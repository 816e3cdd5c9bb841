//! File encryption engine.
//!
//! Split into sub-modules:
//! - `key`: password-to-key derivation
//! - `cipher`: AES-256-CBC with PKCS#7 padding
//! - `codec`: on-disk container and file naming
//! - `codec_io`: read/write helpers

pub mod cipher;
pub mod codec;
mod codec_io;
pub mod key;

pub use cipher::{decrypt, encrypt, CipherEngine, BLOCK_SIZE, IV_SIZE};
pub use codec::{FileCodec, DEFAULT_SUFFIX};
pub use key::{derive_key, Key, KeyDeriver, LegacyKeyDeriver, Pbkdf2KeyDeriver, KEY_SIZE};
