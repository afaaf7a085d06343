use std::{
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use thiserror::Error;

use super::Library;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("library I/O failed: {0}")]
    IoError(#[from] io::Error),
    #[error("library document is malformed: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Owns a [`Library`] together with the file it is read from and written to.
///
/// Every command loads one snapshot, works on it and persists it once; two
/// concurrent writers resolve as last-write-wins on the file.
pub struct LibraryManager {
    path: PathBuf,
    library: Library,
}

impl LibraryManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            library: Library::default(),
        }
    }

    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let content = async_fs::read_to_string(&path).await?;
        let library: Library = serde_json::from_str(&content)?;
        Ok(Self { path, library })
    }

    pub async fn load_or_default(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        match Self::load(path.clone()).await {
            Err(StoreError::IoError(e)) if e.kind() == ErrorKind::NotFound => Ok(Self::new(path)),
            other => other,
        }
    }

    pub async fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.library)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut Library {
        &mut self.library
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
