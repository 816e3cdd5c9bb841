//! File I/O helpers for the file codec.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::CryptError;

/// Read a whole file into memory.
pub fn read_file_bytes(path: &Path) -> Result<Vec<u8>, CryptError> {
    std::fs::read(path).map_err(|e| CryptError::io(path, e))
}

/// Write `data` to `path`, replacing any existing file.
///
/// A crash mid-write can leave a truncated file behind.
pub fn write_file_bytes(path: &Path, data: &[u8]) -> Result<(), CryptError> {
    std::fs::write(path, data).map_err(|e| CryptError::io(path, e))
}

/// Write `data` to a temp file next to `path`, then rename it into place.
pub fn write_file_atomic(path: &Path, data: &[u8]) -> Result<(), CryptError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| CryptError::io(dir, e))?;
    tmp.write_all(data).map_err(|e| CryptError::io(tmp.path(), e))?;
    tmp.as_file().sync_all().map_err(|e| CryptError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| CryptError::io(path, e.error))?;
    Ok(())
}
