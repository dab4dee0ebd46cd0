// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Storage interface for persisted annotation artifacts.
//!
//! The save pipeline writes through this trait so callers can substitute
//! their own backend (or a test double). Writes are synchronous and
//! atomic per call; there is no partial-file state to detect.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Synchronous byte-oriented storage backend.
pub trait Storage {
    /// Write `bytes` to `path`, replacing any existing content.
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        (**self).write(path, bytes)
    }
}

/// Filesystem-backed storage.
///
/// Creates missing parent directories before writing, mirroring the
/// output folder setup the annotation tool performs on startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::storage(parent, e))?;
            }
        }
        fs::write(path, bytes).map_err(|e| Error::storage(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_directories() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("annotations").join("labels.txt");

        FsStorage.write(&path, b"cat\ndog\n")?;

        assert_eq!(std::fs::read_to_string(&path)?, "cat\ndog\n");
        Ok(())
    }

    #[test]
    fn test_write_overwrites_existing_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("labels.txt");

        FsStorage.write(&path, b"first\n")?;
        FsStorage.write(&path, b"second\n")?;

        assert_eq!(std::fs::read_to_string(&path)?, "second\n");
        Ok(())
    }

    #[test]
    fn test_write_failure_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        // A path that treats an existing file as a directory cannot be created
        let file_path = dir.path().join("occupied");
        FsStorage.write(&file_path, b"data").unwrap();
        let bad_path = file_path.join("child.txt");

        let result = FsStorage.write(&bad_path, b"data");
        match result {
            Err(Error::Storage { path, .. }) => {
                assert!(path.starts_with(dir.path()));
            }
            other => panic!("expected storage error, got {:?}", other),
        }
    }
}
