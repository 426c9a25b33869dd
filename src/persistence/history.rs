//! Append-only simulation history.

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::SimulationResult;

use super::store::SharedHistoryStore;

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "simulations";

/// What happened when a result was written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceOutcome {
    /// The history has no store attached.
    NotPersisted,
    /// The store accepted the updated history.
    Persisted,
    /// The store rejected the write; the in-memory record was kept.
    Failed(String),
}

/// The list of simulations performed, oldest first.
///
/// Results are appended in memory first and then written through to the
/// optional store. A store failure never drops a record.
pub struct SimulationHistory {
    namespace: String,
    records: Vec<SimulationResult>,
    store: Option<SharedHistoryStore>,
}

impl SimulationHistory {
    /// Creates an empty history without a store.
    pub fn in_memory() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            records: Vec::new(),
            store: None,
        }
    }

    /// Opens a history backed by `store`, loading the existing records.
    pub fn open(store: SharedHistoryStore, namespace: impl Into<String>) -> EngineResult<Self> {
        let namespace = namespace.into();
        let records = store.load(&namespace)?;
        info!(
            store = store.name(),
            namespace = %namespace,
            records = records.len(),
            "Simulation history opened"
        );
        Ok(Self {
            namespace,
            records,
            store: Some(store),
        })
    }

    /// Returns the namespace records are stored under.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Appends a result and writes the history through to the store.
    pub fn record(&mut self, result: SimulationResult) -> PersistenceOutcome {
        self.records.push(result);

        let Some(store) = &self.store else {
            return PersistenceOutcome::NotPersisted;
        };

        match store.save(&self.namespace, &self.records) {
            Ok(()) => PersistenceOutcome::Persisted,
            Err(err) => {
                warn!(
                    store = store.name(),
                    namespace = %self.namespace,
                    error = %err,
                    "Failed to persist simulation history"
                );
                PersistenceOutcome::Failed(err.to_string())
            }
        }
    }

    /// Returns every recorded result, oldest first.
    pub fn list(&self) -> &[SimulationResult] {
        &self.records
    }

    /// Looks up a result by identifier.
    pub fn get(&self, id: Uuid) -> EngineResult<&SimulationResult> {
        self.records
            .iter()
            .find(|r| r.simulation_id == id)
            .ok_or(EngineError::SimulationNotFound { id })
    }

    /// Returns the number of recorded results.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for SimulationHistory {
    fn default() -> Self {
        Self::in_memory()
    }
}
