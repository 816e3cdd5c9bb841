//! Optional TOML configuration.
//!
//! Every field has a default, and the defaults reproduce the classic
//! behaviour: `.enc` suffix, zero-pad key derivation, plain writes.

use std::path::Path;

use serde::Deserialize;

use crate::crypto::codec::{FileCodec, DEFAULT_SUFFIX};
use crate::crypto::key::{
    KeyDeriver, LegacyKeyDeriver, Pbkdf2KeyDeriver, DEFAULT_PBKDF2_ITERATIONS, MIN_SALT_SIZE,
};
use crate::error::CryptError;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Suffix appended on encrypt and stripped (by length) on decrypt.
    pub suffix: String,
    /// Write output through a temp file and rename.
    pub atomic_writes: bool,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub log_format: LogFormat,
    pub kdf: KdfConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            atomic_writes: false,
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            kdf: KdfConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KdfScheme {
    Legacy,
    Pbkdf2,
}

/// Key derivation settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct KdfConfig {
    pub scheme: KdfScheme,
    /// Hex-encoded salt, required for `pbkdf2`.
    pub salt: Option<String>,
    pub iterations: u32,
}

impl Default for KdfConfig {
    fn default() -> Self {
        Self {
            scheme: KdfScheme::Legacy,
            salt: None,
            iterations: DEFAULT_PBKDF2_ITERATIONS,
        }
    }
}

impl Config {
    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, CryptError> {
        let text = std::fs::read_to_string(path).map_err(|e| CryptError::io(path, e))?;
        let config = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, CryptError> {
        let config: Config = toml::from_str(text).map_err(|e| CryptError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CryptError> {
        if self.suffix.is_empty() {
            return Err(CryptError::Config("suffix must not be empty".to_string()));
        }
        if self.kdf.scheme == KdfScheme::Pbkdf2 {
            if self.kdf.iterations == 0 {
                return Err(CryptError::Config("kdf.iterations must be greater than 0".to_string()));
            }
            let salt = self.kdf.salt_bytes()?;
            if salt.len() < MIN_SALT_SIZE {
                return Err(CryptError::Config(format!(
                    "kdf.salt must be at least {} bytes, got {}",
                    MIN_SALT_SIZE,
                    salt.len()
                )));
            }
        }
        Ok(())
    }

    pub fn file_codec(&self) -> FileCodec {
        FileCodec::new(self.suffix.clone(), self.atomic_writes)
    }
}

impl KdfConfig {
    fn salt_bytes(&self) -> Result<Vec<u8>, CryptError> {
        let salt = self
            .salt
            .as_deref()
            .ok_or_else(|| CryptError::Config("kdf.salt is required for pbkdf2".to_string()))?;
        hex::decode(salt).map_err(|e| CryptError::Config(format!("kdf.salt is not valid hex: {}", e)))
    }

    /// Build the configured key deriver.
    pub fn build_deriver(&self) -> Result<Box<dyn KeyDeriver>, CryptError> {
        match self.scheme {
            KdfScheme::Legacy => Ok(Box::new(LegacyKeyDeriver)),
            KdfScheme::Pbkdf2 => Ok(Box::new(Pbkdf2KeyDeriver::new(self.salt_bytes()?, self.iterations))),
        }
    }
}
