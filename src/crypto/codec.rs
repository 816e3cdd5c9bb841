//! On-disk container handling and the encrypted-file naming convention.
//!
//! Container layout: `IV (16 bytes) || ciphertext (n * 16 bytes)`.
//! `foo.txt` encrypts to `foo.txt.enc`; decrypting strips the suffix length
//! from the end of the name without checking that the suffix is there.

use std::path::{Path, PathBuf};

use super::cipher::CipherEngine;
use super::codec_io;
use super::key::Key;
use crate::error::CryptError;

/// Default suffix appended to encrypted files.
pub const DEFAULT_SUFFIX: &str = ".enc";

/// Reads a file, runs it through the cipher engine and writes the sibling file.
#[derive(Debug, Clone)]
pub struct FileCodec {
    suffix: String,
    atomic_writes: bool,
}

impl Default for FileCodec {
    fn default() -> Self {
        Self::new(DEFAULT_SUFFIX, false)
    }
}

impl FileCodec {
    pub fn new(suffix: impl Into<String>, atomic_writes: bool) -> Self {
        Self { suffix: suffix.into(), atomic_writes }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// `path` with the suffix appended.
    pub fn encrypted_path(&self, path: &str) -> String {
        format!("{}{}", path, self.suffix)
    }

    /// `path` with as many trailing characters removed as the suffix has.
    ///
    /// Purely positional: `notes.bin` becomes `notes` with the default suffix.
    pub fn decrypted_path(&self, path: &str) -> String {
        let strip = self.suffix.chars().count();
        let keep = path.chars().count().saturating_sub(strip);
        path.chars().take(keep).collect()
    }

    /// Encrypt the file at `path` into `path + suffix`. Returns the output path.
    pub fn encrypt_file(&self, path: &str, key: &Key) -> Result<PathBuf, CryptError> {
        let plaintext = codec_io::read_file_bytes(Path::new(path))?;
        let container = CipherEngine::new(key).encrypt(&plaintext);

        let output = PathBuf::from(self.encrypted_path(path));
        self.write(&output, &container)?;
        tracing::info!(input = %path, output = %output.display(), bytes = plaintext.len(), "file encrypted");
        Ok(output)
    }

    /// Decrypt the file at `path` into `path` minus the suffix. Returns the output path.
    pub fn decrypt_file(&self, path: &str, key: &Key) -> Result<PathBuf, CryptError> {
        if !path.ends_with(&self.suffix) {
            tracing::warn!(input = %path, suffix = %self.suffix, "decrypt path does not end with suffix, stripping anyway");
        }

        let container = codec_io::read_file_bytes(Path::new(path))?;
        let plaintext = CipherEngine::new(key).decrypt(&container)?;

        let output = PathBuf::from(self.decrypted_path(path));
        self.write(&output, &plaintext)?;
        tracing::info!(input = %path, output = %output.display(), bytes = plaintext.len(), "file decrypted");
        Ok(output)
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<(), CryptError> {
        if self.atomic_writes {
            codec_io::write_file_atomic(path, data)
        } else {
            codec_io::write_file_bytes(path, data)
        }
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
