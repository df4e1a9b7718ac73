//! Experiment Registry - experiments keyed by sequential id

use crate::store::RecordStore;
use crate::Result;

use super::Experiment;

/// Registry of experiments.
///
/// Each instance carries its own id counter; two registries never share ids
/// or records.
#[derive(Debug, Default)]
pub struct ExperimentRegistry {
    store: RecordStore<Experiment>,
}

impl ExperimentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: RecordStore::with_capacity(capacity),
        }
    }

    pub(crate) fn from_store(store: RecordStore<Experiment>) -> Self {
        Self { store }
    }

    pub(crate) const fn store(&self) -> &RecordStore<Experiment> {
        &self.store
    }

    /// Get the number of experiments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Create an experiment led by `caller` and return its id.
    ///
    /// Field contents are not validated.
    pub fn create_experiment(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<String>,
        caller: &str,
    ) -> u64 {
        self.store
            .create(Experiment::new(caller, title, description, parameters))
    }

    /// Append `collaborator` to the experiment's collaborator list.
    ///
    /// Duplicates are kept.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::NotFound`] if the experiment does not exist
    /// - [`crate::Error::Forbidden`] if `caller` is not the lead researcher
    pub fn add_collaborator(&self, id: u64, collaborator: &str, caller: &str) -> Result<()> {
        self.store
            .mutate_privileged(id, caller, |e| e.push_collaborator(collaborator))
    }

    /// Overwrite the experiment's status.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::NotFound`] if the experiment does not exist
    /// - [`crate::Error::Forbidden`] if `caller` is not the lead researcher
    pub fn update_experiment_status(&self, id: u64, status: &str, caller: &str) -> Result<()> {
        self.store.mutate_privileged(id, caller, |e| e.set_status(status))
    }

    /// Get a copy of an experiment by id.
    #[must_use]
    pub fn get_experiment(&self, id: u64) -> Option<Experiment> {
        self.store.get(id)
    }

    /// Experiments whose status is exactly `status`, in ascending id order.
    #[must_use]
    pub fn get_experiments_by_status(&self, status: &str) -> Vec<(u64, Experiment)> {
        self.store
            .list_by_predicate(|e| e.status() == status)
            .collect()
    }
}
