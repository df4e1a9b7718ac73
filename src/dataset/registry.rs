//! Dataset Registry - shared datasets keyed by sequential id

use crate::store::RecordStore;
use crate::Result;

use super::Dataset;

/// Registry of shared datasets.
///
/// `get_dataset` performs no read-side access control; consumers that want to
/// restrict reads check [`DatasetRegistry::has_access`] themselves.
#[derive(Debug, Default)]
pub struct DatasetRegistry {
    store: RecordStore<Dataset>,
}

impl DatasetRegistry {
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

    pub(crate) fn from_store(store: RecordStore<Dataset>) -> Self {
        Self { store }
    }

    pub(crate) const fn store(&self) -> &RecordStore<Dataset> {
        &self.store
    }

    /// Get the number of datasets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Share a dataset owned by `caller` and return its id.
    ///
    /// `experiment_id` is stored as given, whether or not that experiment
    /// exists.
    pub fn share_dataset(
        &self,
        experiment_id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        data_hash: impl Into<String>,
        caller: &str,
    ) -> u64 {
        self.store.create(Dataset::new(
            caller,
            experiment_id,
            title,
            description,
            data_hash,
        ))
    }

    /// Append `user` to the dataset's access list. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::NotFound`] if the dataset does not exist
    /// - [`crate::Error::Forbidden`] if `caller` is not the owner
    pub fn grant_access(&self, id: u64, user: &str, caller: &str) -> Result<()> {
        self.store.mutate_privileged(id, caller, |d| d.push_access(user))
    }

    /// Get a copy of a dataset by id.
    #[must_use]
    pub fn get_dataset(&self, id: u64) -> Option<Dataset> {
        self.store.get(id)
    }

    /// Whether `identity` is on the dataset's access list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the dataset does not exist.
    pub fn has_access(&self, id: u64, identity: &str) -> Result<bool> {
        self.store.inspect(id, |d| d.grants(identity))
    }

    /// Datasets that reference `experiment_id`, in ascending id order.
    #[must_use]
    pub fn get_datasets_for_experiment(&self, experiment_id: i64) -> Vec<(u64, Dataset)> {
        self.store
            .list_by_predicate(|d| d.experiment_id() == experiment_id)
            .collect()
    }
}
