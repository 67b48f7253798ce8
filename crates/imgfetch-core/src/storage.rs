//! Output directory and write-once file creation.
//!
//! Files are created with `create_new`, so an existing name is never
//! overwritten: the collision is reported back instead.

use crate::error::FetchError;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Result of [`OutputDir::write_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Bytes were written to a new file at this path.
    Written(PathBuf),
    /// Something already exists at this path; nothing was written.
    Exists(PathBuf),
}

/// The folder fetched images are saved into.
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Create the directory (and parents) if missing. Idempotent.
    pub fn ensure(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)
            .with_context(|| format!("failed to create output directory: {}", root.display()))?;
        Ok(OutputDir {
            root: root.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// `<output_dir>/<filename>`.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Write `bytes` to `<output_dir>/<filename>` unless that path exists.
    pub fn write_new(&self, filename: &str, bytes: &[u8]) -> Result<WriteOutcome, FetchError> {
        let path = self.path_for(filename);
        let mut file = match File::options().write(true).create_new(true).open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Ok(WriteOutcome::Exists(path));
            }
            Err(source) => return Err(FetchError::Storage { path, source }),
        };
        if let Err(source) = file.write_all(bytes) {
            return Err(FetchError::Storage { path, source });
        }
        Ok(WriteOutcome::Written(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_creates_nested_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("a").join("Fetched_Images");
        OutputDir::ensure(&root).unwrap();
        assert!(root.is_dir());
        let out = OutputDir::ensure(&root).unwrap();
        assert_eq!(out.path(), root.as_path());
    }

    #[test]
    fn ensure_fails_when_path_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, b"x").unwrap();
        assert!(OutputDir::ensure(&file).is_err());
    }

    #[test]
    fn write_new_then_exists() {
        let dir = tempfile::tempdir().unwrap();
        let out = OutputDir::ensure(dir.path()).unwrap();

        let first = out.write_new("photo.png", b"first").unwrap();
        assert_eq!(first, WriteOutcome::Written(dir.path().join("photo.png")));

        let second = out.write_new("photo.png", b"second").unwrap();
        assert_eq!(second, WriteOutcome::Exists(dir.path().join("photo.png")));

        assert_eq!(fs::read(dir.path().join("photo.png")).unwrap(), b"first");
    }

    #[test]
    fn write_into_missing_subdir_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = OutputDir::ensure(dir.path()).unwrap();
        let err = out.write_new("missing/photo.png", b"x").unwrap_err();
        assert!(matches!(err, FetchError::Storage { .. }));
        assert!(!err.is_connection());
    }
}
