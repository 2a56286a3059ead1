use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use nexora_core::{CommunityPost, RoadmapItem, COMMUNITY_STORAGE_KEY, ROADMAP_STORAGE_KEY};
use nexora_logging::{nexora_info, nexora_warn};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("data directory missing or not writable: {0}")]
    DataDir(String),
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure the data directory exists; create if missing.
pub fn ensure_data_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::DataDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::DataDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::DataDir(e.to_string()))?;
    }
    Ok(())
}

/// Atomically write content to `{dir}/{filename}` by writing a temp file then renaming.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_data_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}

/// Simple text key-value store.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PersistError>;
    fn remove(&self, key: &str) -> Result<(), PersistError>;
}

/// One file per key inside a directory, replaced atomically on every write.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn filename(key: &str) -> Result<&str, PersistError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(key)
        } else {
            Err(PersistError::InvalidKey(key.to_string()))
        }
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        let path = self.dir.join(Self::filename(key)?);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let filename = Self::filename(key)?;
        AtomicFileWriter::new(self.dir.clone()).write(filename, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PersistError> {
        let path = self.dir.join(Self::filename(key)?);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Roadmap list stored as JSON text under [`ROADMAP_STORAGE_KEY`].
pub struct RoadmapStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> RoadmapStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read once at startup. Unreadable or malformed data yields an empty list.
    pub fn load(&self) -> Vec<RoadmapItem> {
        let text = match self.store.get(ROADMAP_STORAGE_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(err) => {
                nexora_warn!("Failed to read roadmap: {}", err);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<RoadmapItem>>(&text) {
            Ok(items) => {
                nexora_info!("Loaded {} roadmap items", items.len());
                items
            }
            Err(err) => {
                nexora_warn!("Failed to parse stored roadmap: {}", err);
                Vec::new()
            }
        }
    }

    pub fn save(&self, items: &[RoadmapItem]) -> Result<(), PersistError> {
        let text = serde_json::to_string(items)?;
        self.store.set(ROADMAP_STORAGE_KEY, &text)
    }
}

/// Community board, counters included, stored under [`COMMUNITY_STORAGE_KEY`].
pub struct CommunityStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> CommunityStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// `None` when nothing usable is stored, so the caller can seed the board.
    pub fn load(&self) -> Option<Vec<CommunityPost>> {
        let text = match self.store.get(COMMUNITY_STORAGE_KEY) {
            Ok(text) => text?,
            Err(err) => {
                nexora_warn!("Failed to read community posts: {}", err);
                return None;
            }
        };
        match serde_json::from_str::<Vec<CommunityPost>>(&text) {
            Ok(posts) => Some(posts),
            Err(err) => {
                nexora_warn!("Failed to parse stored community posts: {}", err);
                None
            }
        }
    }

    pub fn save(&self, posts: &[CommunityPost]) -> Result<(), PersistError> {
        let text = serde_json::to_string(posts)?;
        self.store.set(COMMUNITY_STORAGE_KEY, &text)
    }
}
