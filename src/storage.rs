//! Cart Storage
//!
//! Local durable storage for the cart. A storage holds a single slot of
//! serialized cart lines; interpreting the contents is up to the cart.

use std::{
    fmt::Debug,
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A single keyed slot of durable storage.
pub trait CartStorage: Debug {
    /// Read the slot. `None` means nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend can't be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the slot contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend can't be written.
    fn save(&mut self, contents: &str) -> Result<(), StorageError>;

    /// Empty the slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend can't be written.
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// Storage that only lives as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slot: Option<String>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage already holding `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Some(contents.into()),
        }
    }

    /// Current slot contents.
    pub fn contents(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, contents: &str) -> Result<(), StorageError> {
        self.slot = Some(contents.to_string());

        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.slot = None;

        Ok(())
    }
}

/// Storage backed by a single file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Use the file at `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn save(&mut self, contents: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, contents)?;

        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}
