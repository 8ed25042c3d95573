#[cfg(test)]
#[path = "../../tests/unit/storage/store_test.rs"]
mod store_test;

use crate::models::NodeId;
use crate::utils::{GenericError, GenericResult};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Specifies a kind of persisted artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoreKind {
    /// A pheromone map learned by the ant colony.
    Pheromone,
    /// Ranked alternate paths.
    Fallback,
}

impl StoreKind {
    fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Pheromone => "pheromones",
            StoreKind::Fallback => "fallbacks",
        }
    }
}

/// A key of a persisted entry. The pair is direction sensitive: (a, b) and (b, a) are distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StoreKey {
    /// Artifact kind.
    pub kind: StoreKind,
    /// A start node.
    pub source: NodeId,
    /// A destination node.
    pub target: NodeId,
}

impl StoreKey {
    /// Creates a key for a pheromone map.
    pub fn pheromone(source: NodeId, target: NodeId) -> Self {
        Self { kind: StoreKind::Pheromone, source, target }
    }

    /// Creates a key for fallback paths.
    pub fn fallback(source: NodeId, target: NodeId) -> Self {
        Self { kind: StoreKind::Fallback, source, target }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}_{}", self.kind.as_str(), self.source, self.target)
    }
}

/// A storage of opaque binary payloads. A payload is always written and read whole.
pub trait KeyValueStore {
    /// Saves payload replacing an existing one.
    fn save(&self, key: &StoreKey, payload: &[u8]) -> GenericResult<()>;

    /// Loads payload, returns `None` when nothing is stored under the key.
    fn load(&self, key: &StoreKey) -> GenericResult<Option<Vec<u8>>>;
}

/// Stores every entry as a separate file under root directory: `<root>/<kind>/<source>_<target>.json`.
///
/// Node ids are numeric, so the underscore separated name is unique per key.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a new instance of `FileStore`. Directories are created on the first save.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    /// Returns a file path used for the key.
    pub fn entry_path(&self, key: &StoreKey) -> PathBuf {
        self.root.join(key.kind.as_str()).join(format!("{}_{}.json", key.source, key.target))
    }
}

impl KeyValueStore for FileStore {
    fn save(&self, key: &StoreKey, payload: &[u8]) -> GenericResult<()> {
        let path = self.entry_path(key);
        let directory = path.parent().ok_or_else(|| GenericError::from(format!("invalid store path for '{key}'")))?;

        fs::create_dir_all(directory)?;

        // write to a sibling temporary file and rename it over, so readers never see a partial entry
        let mut file = NamedTempFile::new_in(directory)?;
        file.write_all(payload)?;
        file.as_file().sync_all()?;
        file.persist(&path).map_err(|err| GenericError::from(format!("cannot persist '{key}': {}", err.error)))?;

        Ok(())
    }

    fn load(&self, key: &StoreKey) -> GenericResult<Option<Vec<u8>>> {
        match fs::read(self.entry_path(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(GenericError::from(format!("cannot read '{key}': {err}"))),
        }
    }
}

/// Keeps entries in memory, useful for tests and for callers without a writable file system.
#[derive(Default)]
pub struct InMemoryStore {
    entries: RefCell<FxHashMap<StoreKey, Vec<u8>>>,
}

impl InMemoryStore {
    /// Returns true if there is an entry for the key.
    pub fn contains(&self, key: &StoreKey) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for InMemoryStore {
    fn save(&self, key: &StoreKey, payload: &[u8]) -> GenericResult<()> {
        self.entries.borrow_mut().insert(*key, payload.to_vec());

        Ok(())
    }

    fn load(&self, key: &StoreKey) -> GenericResult<Option<Vec<u8>>> {
        Ok(self.entries.borrow().get(key).cloned())
    }
}
