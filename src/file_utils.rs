use anyhow::{Result, Context};
use std::fs;
use std::path::Path;
use log::debug;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Delete a file if it exists. Absence is not an error.
    ///
    /// Returns true when a file was actually removed.
    pub fn remove_file_if_present<P: AsRef<Path>>(path: P) -> Result<bool> {
        let path = path.as_ref();
        if !Self::file_exists(path) {
            debug!("Nothing to delete at {:?}", path);
            return Ok(false);
        }

        fs::remove_file(path)
            .with_context(|| format!("Failed to delete file: {:?}", path))?;
        Ok(true)
    }

    /// Delete every file directly inside a directory, leaving the directory
    /// itself in place. A missing directory is not an error.
    ///
    /// Returns the number of files removed.
    pub fn clear_directory<P: AsRef<Path>>(dir: P) -> Result<usize> {
        let dir = dir.as_ref();
        if !Self::dir_exists(dir) {
            debug!("Nothing to clear at {:?}", dir);
            return Ok(0);
        }

        let mut removed = 0;
        for entry in fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory: {:?}", dir))?
        {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if path.is_file() {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to delete file: {:?}", path))?;
                removed += 1;
            }
        }

        Ok(removed)
    }
}
