//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt a document on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::RentlogError;

/// Read a whole file as raw bytes
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, RentlogError> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| RentlogError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Temp file used while writing `path`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all. Every
/// failure is reported as `RentlogError::Write`.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), RentlogError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            RentlogError::Write(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must be in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let result = (|| {
        let file = File::create(&temp_path)
            .map_err(|e| RentlogError::Write(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(contents.as_bytes())
            .map_err(|e| RentlogError::Write(format!("Failed to write data: {}", e)))?;

        writer
            .flush()
            .map_err(|e| RentlogError::Write(format!("Failed to flush data: {}", e)))?;

        writer
            .get_ref()
            .sync_all()
            .map_err(|e| RentlogError::Write(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, path).map_err(|e| {
            RentlogError::Write(format!("Failed to replace {}: {}", path.display(), e))
        })
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}
