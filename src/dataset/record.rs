//! Dataset - shared experimental data with an owner-managed access list

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Dataset record.
///
/// `experiment_id` is advisory: nothing checks that the experiment exists.
/// Only `owner` may extend `access_list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dataset {
    owner: String,
    experiment_id: i64,
    title: String,
    description: String,
    data_hash: String,
    access_list: Vec<String>,
}

impl Dataset {
    /// Create a new dataset owned by `owner`, who starts as the only entry on
    /// the access list.
    #[must_use]
    pub fn new(
        owner: impl Into<String>,
        experiment_id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        data_hash: impl Into<String>,
    ) -> Self {
        let owner = owner.into();
        Self {
            access_list: vec![owner.clone()],
            owner,
            experiment_id,
            title: title.into(),
            description: description.into(),
            data_hash: data_hash.into(),
        }
    }

    /// Get the owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the referenced experiment id.
    #[must_use]
    pub const fn experiment_id(&self) -> i64 {
        self.experiment_id
    }

    /// Get the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the content hash supplied at creation.
    #[must_use]
    pub fn data_hash(&self) -> &str {
        &self.data_hash
    }

    /// Get the access list, in grant order. May contain duplicates.
    #[must_use]
    pub fn access_list(&self) -> &[String] {
        &self.access_list
    }

    /// Exact-match membership test against the access list.
    #[must_use]
    pub fn grants(&self, identity: &str) -> bool {
        self.access_list.iter().any(|u| u == identity)
    }

    pub(crate) fn push_access(&mut self, identity: impl Into<String>) {
        self.access_list.push(identity.into());
    }
}

impl Record for Dataset {
    const KIND: &'static str = "dataset";

    fn privileged_identity(&self) -> &str {
        &self.owner
    }

    fn is_well_formed(&self) -> bool {
        self.grants(&self.owner)
    }
}
