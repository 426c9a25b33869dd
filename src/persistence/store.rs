//! Storage backends for the simulation history.
//!
//! - [`HistoryStore`]: trait for history backends
//! - [`MemoryStore`]: in-process store, used by default and in tests
//! - [`JsonFileStore`]: one `<namespace>.json` file per namespace in a directory

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::SimulationResult;

/// A local key-value store holding one list of results per namespace.
pub trait HistoryStore: Send + Sync {
    /// Loads every result stored under `namespace`, oldest first.
    ///
    /// An unknown namespace yields an empty list.
    fn load(&self, namespace: &str) -> EngineResult<Vec<SimulationResult>>;

    /// Replaces the results stored under `namespace`.
    fn save(&self, namespace: &str, records: &[SimulationResult]) -> EngineResult<()>;

    /// Store name for logging.
    fn name(&self) -> &str;
}

/// Type alias for a shared store.
pub type SharedHistoryStore = Arc<dyn HistoryStore>;

fn persistence_error(namespace: &str, message: impl Into<String>) -> EngineError {
    EngineError::Persistence {
        namespace: namespace.to_string(),
        message: message.into(),
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, Vec<SimulationResult>>>,
}

impl MemoryStore {
    /// Creates an empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self, namespace: &str) -> EngineResult<Vec<SimulationResult>> {
        let data = self
            .data
            .read()
            .map_err(|_| persistence_error(namespace, "memory store lock poisoned"))?;
        Ok(data.get(namespace).cloned().unwrap_or_default())
    }

    fn save(&self, namespace: &str, records: &[SimulationResult]) -> EngineResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|_| persistence_error(namespace, "memory store lock poisoned"))?;
        data.insert(namespace.to_string(), records.to_vec());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// File-based store.
///
/// Each namespace is a JSON array of results in `<root>/<namespace>.json`.
/// The directory is created on the first save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Returns the directory holding the namespace files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file backing `namespace`.
    pub fn namespace_path(&self, namespace: &str) -> PathBuf {
        self.root.join(format!("{}.json", namespace))
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self, namespace: &str) -> EngineResult<Vec<SimulationResult>> {
        let path = self.namespace_path(namespace);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(persistence_error(
                    namespace,
                    format!("failed to read {}: {}", path.display(), err),
                ));
            }
        };

        let records: Vec<SimulationResult> = serde_json::from_str(&contents).map_err(|e| {
            persistence_error(
                namespace,
                format!("failed to parse {}: {}", path.display(), e),
            )
        })?;

        debug!(path = %path.display(), records = records.len(), "History namespace loaded");
        Ok(records)
    }

    fn save(&self, namespace: &str, records: &[SimulationResult]) -> EngineResult<()> {
        fs::create_dir_all(&self.root).map_err(|e| {
            persistence_error(
                namespace,
                format!("failed to create {}: {}", self.root.display(), e),
            )
        })?;

        let path = self.namespace_path(namespace);
        let contents = serde_json::to_string_pretty(records)
            .map_err(|e| persistence_error(namespace, format!("failed to encode records: {}", e)))?;

        fs::write(&path, contents).map_err(|e| {
            persistence_error(
                namespace,
                format!("failed to write {}: {}", path.display(), e),
            )
        })?;

        debug!(path = %path.display(), records = records.len(), "History namespace saved");
        Ok(())
    }

    fn name(&self) -> &str {
        "json_file"
    }
}
