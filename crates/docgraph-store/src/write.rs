//! Atomic file writes: temp file in the same directory, then rename.

use docgraph_core::{Error, Result};
use std::path::Path;

/// Write content to a path atomically. The parent directory is created if
/// missing. Readers never observe a half-written file.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(Error::io)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, content).map_err(Error::io)?;
    std::fs::rename(&temp_path, path).map_err(Error::io)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_replace() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");

        write_atomic(&path, "# First").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# First");

        write_atomic(&path, "# Second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Second");
    }

    #[test]
    fn test_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deep/doc.md");

        write_atomic(&path, "# Nested").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");

        write_atomic(&path, "content").unwrap();
        assert!(!dir.path().join("doc.tmp").exists());
    }
}
