//! Simulation history and export.
//!
//! The history is an append-only list of results, optionally written through
//! to a local key-value store. Persistence runs after a result exists and
//! never changes it.

mod export;
mod history;
mod store;

pub use export::{export_json, import_json};
pub use history::{DEFAULT_NAMESPACE, PersistenceOutcome, SimulationHistory};
pub use store::{HistoryStore, JsonFileStore, MemoryStore, SharedHistoryStore};
