//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::KontuakError;

/// Read a whole text file
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, KontuakError> {
    let path = path.as_ref();

    fs::read_to_string(path)
        .map_err(|e| KontuakError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, text: &str) -> Result<(), KontuakError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            KontuakError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target, so the rename stays on one filesystem
    let mut temp_name = path.as_os_str().to_os_string();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    let file = File::create(temp_path)
        .map_err(|e| KontuakError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| KontuakError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| KontuakError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| KontuakError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(temp_path, path).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        KontuakError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("triodos.journal");

        write_text_atomic(&path, "2019-12-05 RECIBO Mobile\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), "2019-12-05 RECIBO Mobile\n");

        write_text_atomic(&path, "\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), "\n");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("triodos.journal");

        write_text_atomic(&path, "text").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("triodos.journal.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("2019").join("n26").join("12-tmp.yml");

        write_text_atomic(&path, "[]\n").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_text(temp_dir.path().join("missing.yml")).unwrap_err();
        assert!(matches!(err, KontuakError::Storage(_)));
        assert!(err.to_string().contains("missing.yml"));
    }
}
