use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use jobby_logging::{jobby_info, jobby_warn};
use thiserror::Error;

use crate::persist::{AtomicFileWriter, PersistError};

/// Source of the bearer token attached to every request.
pub trait CredentialStore: Send + Sync {
    /// Current token, or `None` when signed out.
    fn get(&self) -> Option<String>;
    fn clear(&self);
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("token must not be empty")]
    EmptyToken,
    #[error("token path has no parent directory or file name: {0}")]
    InvalidPath(PathBuf),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Keeps the token in a single file; the file is re-read on every `get`.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set(&self, token: &str) -> Result<(), CredentialError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(CredentialError::EmptyToken);
        }
        let (dir, filename) = match (self.path.parent(), self.path.file_name()) {
            (Some(dir), Some(name)) => (dir, name.to_string_lossy()),
            _ => return Err(CredentialError::InvalidPath(self.path.clone())),
        };
        let dir = if dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            dir
        };
        AtomicFileWriter::new(dir.to_path_buf()).write(&filename, token)?;
        jobby_info!("Stored bearer token at {:?}", self.path);
        Ok(())
    }

    pub fn try_clear(&self) -> Result<(), CredentialError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                let token = text.trim();
                (!token.is_empty()).then(|| token.to_string())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                jobby_warn!("Failed to read token from {:?}: {}", self.path, err);
                None
            }
        }
    }

    fn clear(&self) {
        if let Err(err) = self.try_clear() {
            jobby_warn!("Failed to remove token at {:?}: {}", self.path, err);
        }
    }
}
