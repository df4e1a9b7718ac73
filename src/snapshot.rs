//! Ledger snapshots
//!
//! A [`LedgerSnapshot`] captures every record plus each registry's next id, so
//! a restored ledger keeps allocating where the old one stopped.
//!
//! ```text
//! {
//!   "experiments": { "next_id": 3, "records": { "1": {...}, "2": {...} } },
//!   "datasets":    { "next_id": 1, "records": {} }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dataset::{Dataset, DatasetRegistry};
use crate::experiment::{Experiment, ExperimentRegistry};
use crate::store::{Record, RecordStore};
use crate::{Ledger, Result};

/// One registry's records keyed by id, plus its counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot<R> {
    /// Id the next create will assign
    pub next_id: u64,
    /// Records keyed by id
    pub records: BTreeMap<u64, R>,
}

impl<R: Record> RegistrySnapshot<R> {
    fn capture(store: &RecordStore<R>) -> Self {
        Self {
            next_id: store.next_id(),
            records: store.entries().collect(),
        }
    }

    fn into_store(self) -> Result<RecordStore<R>> {
        RecordStore::restore(self.records, self.next_id)
    }
}

/// Point-in-time copy of a whole [`Ledger`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Experiment Registry state
    pub experiments: RegistrySnapshot<Experiment>,
    /// Dataset Registry state
    pub datasets: RegistrySnapshot<Dataset>,
}

impl LedgerSnapshot {
    /// Encode as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Snapshot`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Snapshot`] if the text is not a snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Write a snapshot file, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl Ledger {
    /// Capture the current state of both registries.
    #[must_use]
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            experiments: RegistrySnapshot::capture(self.experiments().store()),
            datasets: RegistrySnapshot::capture(self.datasets().store()),
        }
    }

    /// Rebuild a ledger from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CorruptSnapshot`] if any record breaks a ledger
    /// invariant (id 0, or a lead/owner missing from its own list).
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Result<Self> {
        let experiments = ExperimentRegistry::from_store(snapshot.experiments.into_store()?);
        let datasets = DatasetRegistry::from_store(snapshot.datasets.into_store()?);
        info!(
            experiments = experiments.len(),
            datasets = datasets.len(),
            "ledger restored from snapshot"
        );
        Ok(Self::from_parts(experiments, datasets))
    }
}
