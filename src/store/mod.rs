// Document store module
// Whole-file JSON persistence behind a load/save seam so handlers
// never touch the filesystem directly.

use std::fmt;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Structural check run after deserialization, before a document is
/// handed to a handler.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

// The leaked document is opaque; any JSON value passes.
impl Validate for serde_json::Value {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Load/save seam over one persisted document.
pub trait DocumentStore<T>: Send + Sync {
    fn load(&self) -> Result<T, StoreError>;
    fn save(&self, doc: &T) -> Result<(), StoreError>;
}

/// Failure while loading or saving a document.
#[derive(Debug)]
pub enum StoreError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Invalid { path: PathBuf, reason: String },
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            Self::Invalid { path, reason } => {
                write!(f, "invalid document {}: {reason}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// One JSON file on disk. Every load reads and re-validates the whole
/// file; every save rewrites it pretty-printed through a temp file and
/// an atomic rename, so readers never observe torn JSON.
pub struct JsonFileStore<T> {
    path: PathBuf,
    _doc: PhantomData<T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _doc: PhantomData,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl<T> DocumentStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Validate + Send + Sync,
{
    fn load(&self) -> Result<T, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        let doc: T = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        doc.validate().map_err(|reason| StoreError::Invalid {
            path: self.path.clone(),
            reason,
        })?;
        Ok(doc)
    }

    fn save(&self, doc: &T) -> Result<(), StoreError> {
        // Matches the original files' format: two-space indent plus a
        // trailing newline.
        let mut json =
            serde_json::to_string_pretty(doc).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        json.push('\n');

        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|source| StoreError::Write {
            path: temp.clone(),
            source,
        })?;
        fs::rename(&temp, &self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory store for handler tests; no filesystem involved.
#[cfg(test)]
pub struct MemoryStore<T> {
    doc: std::sync::Mutex<T>,
}

#[cfg(test)]
impl<T: Clone + Send + Sync> MemoryStore<T> {
    pub fn new(doc: T) -> Self {
        Self {
            doc: std::sync::Mutex::new(doc),
        }
    }
}

#[cfg(test)]
impl<T: Clone + Send + Sync> DocumentStore<T> for MemoryStore<T> {
    fn load(&self) -> Result<T, StoreError> {
        Ok(self.doc.lock().expect("store lock poisoned").clone())
    }

    fn save(&self, doc: &T) -> Result<(), StoreError> {
        *self.doc.lock().expect("store lock poisoned") = doc.clone();
        Ok(())
    }
}
