//! Ledger - one session's Experiment and Dataset registries
//!
//! A [`Ledger`] is constructed once per session (or per test) and dropped with
//! it. Nothing is global: two ledgers never share ids or records.

use serde_json::Value;
use tracing::{debug, warn};

use crate::command::{CallResult, Operation, Outcome};
use crate::dataset::DatasetRegistry;
use crate::experiment::ExperimentRegistry;
use crate::Result;

/// The ledger state machine.
#[derive(Debug, Default)]
pub struct Ledger {
    experiments: ExperimentRegistry,
    datasets: DatasetRegistry,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new ledger builder
    #[must_use]
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    pub(crate) const fn from_parts(
        experiments: ExperimentRegistry,
        datasets: DatasetRegistry,
    ) -> Self {
        Self {
            experiments,
            datasets,
        }
    }

    /// The Experiment Registry.
    #[must_use]
    pub const fn experiments(&self) -> &ExperimentRegistry {
        &self.experiments
    }

    /// The Dataset Registry.
    #[must_use]
    pub const fn datasets(&self) -> &DatasetRegistry {
        &self.datasets
    }

    /// Run one typed operation on behalf of `caller`.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::NotFound`] if a mutation or `has-access` targets a
    ///   missing record
    /// - [`crate::Error::Forbidden`] if `caller` is not the record's lead/owner
    pub fn execute(&self, operation: Operation, caller: &str) -> Result<Outcome> {
        let outcome = match operation {
            Operation::CreateExperiment(op) => {
                let id = self.experiments.create_experiment(
                    op.title,
                    op.description,
                    op.parameters,
                    caller,
                );
                Outcome::Created(id)
            }
            Operation::AddCollaborator(op) => {
                self.experiments
                    .add_collaborator(op.experiment_id, &op.collaborator, caller)?;
                Outcome::Done
            }
            Operation::UpdateExperimentStatus(op) => {
                self.experiments
                    .update_experiment_status(op.experiment_id, &op.status, caller)?;
                Outcome::Done
            }
            Operation::GetExperiment(op) => {
                Outcome::Experiment(self.experiments.get_experiment(op.experiment_id))
            }
            Operation::GetExperimentsByStatus(op) => {
                Outcome::Experiments(self.experiments.get_experiments_by_status(&op.status))
            }
            Operation::ShareDataset(op) => {
                let id = self.datasets.share_dataset(
                    op.experiment_id,
                    op.title,
                    op.description,
                    op.data_hash,
                    caller,
                );
                Outcome::Created(id)
            }
            Operation::GrantAccess(op) => {
                self.datasets.grant_access(op.dataset_id, &op.user, caller)?;
                Outcome::Done
            }
            Operation::GetDataset(op) => {
                Outcome::Dataset(self.datasets.get_dataset(op.dataset_id))
            }
            Operation::HasAccess(op) => {
                Outcome::Access(self.datasets.has_access(op.dataset_id, &op.user)?)
            }
        };
        Ok(outcome)
    }

    /// Command-style entry point: decode `method` and its positional `args`,
    /// run the operation, and fold the result into a [`CallResult`].
    ///
    /// Never fails; every error becomes a failure result.
    pub fn call(&self, method: &str, args: Vec<Value>, caller: &str) -> CallResult {
        let result = Operation::decode(method, args).and_then(|operation| {
            debug!(method, caller, "dispatch");
            self.execute(operation, caller)
        });

        if let Err(err) = &result {
            if err.code().is_none() {
                warn!(method, caller, error = %err, "call rejected at boundary");
            }
        }

        CallResult::from(result)
    }
}

/// Ledger builder
#[derive(Debug, Default)]
pub struct LedgerBuilder {
    experiment_capacity: usize,
    dataset_capacity: usize,
}

impl LedgerBuilder {
    /// Pre-size the Experiment Registry
    #[must_use]
    pub const fn experiment_capacity(mut self, capacity: usize) -> Self {
        self.experiment_capacity = capacity;
        self
    }

    /// Pre-size the Dataset Registry
    #[must_use]
    pub const fn dataset_capacity(mut self, capacity: usize) -> Self {
        self.dataset_capacity = capacity;
        self
    }

    /// Build the ledger
    #[must_use]
    pub fn build(self) -> Ledger {
        Ledger::from_parts(
            ExperimentRegistry::with_capacity(self.experiment_capacity),
            DatasetRegistry::with_capacity(self.dataset_capacity),
        )
    }
}
