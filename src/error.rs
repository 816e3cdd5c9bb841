//! Error taxonomy for filecrypt.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by key derivation, the cipher engine and file I/O.
///
/// None of these are fatal to the interactive loop: each one aborts the
/// current operation and control returns to the menu.
#[derive(Debug, Error)]
pub enum CryptError {
    /// Reading or writing a file failed (missing, unreadable, unwritable).
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is too short or not block-aligned to be an encrypted container.
    #[error("Malformed container: {len} bytes is not an IV followed by whole 16-byte blocks")]
    MalformedContainer { len: usize },

    /// Padding check failed after decryption.
    ///
    /// There is no authentication tag, so a wrong password and a corrupted
    /// file look identical here.
    #[error("Invalid padding: wrong password or corrupted file")]
    InvalidPadding,

    /// The configuration file is unreadable or holds invalid values.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CryptError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CryptError::Io { path: path.into(), source }
    }
}
