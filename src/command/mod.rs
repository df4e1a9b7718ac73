//! Command boundary
//!
//! Inside the crate every call is an [`Operation`]: a closed set of variants,
//! each carrying a parameter struct with named, typed fields. Method-name
//! strings and positional JSON argument arrays exist only here, in
//! [`Operation::decode`], which is the one place an unknown method can be
//! reported.
//!
//! ## Wire shape
//!
//! ```text
//! ("grant-access", [1, "user2"], "user1")
//!        │              │
//!        │              └─ decoded positionally into GrantAccess { dataset_id, user }
//!        └─ selects Operation::GrantAccess
//! ```

mod outcome;

pub use outcome::{CallResult, ErrorCode, Outcome};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// `create-experiment [title, description, parameters]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateExperiment {
    /// Experiment title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Ordered parameter names
    pub parameters: Vec<String>,
}

/// `add-collaborator [experimentId, collaborator]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCollaborator {
    /// Target experiment
    pub experiment_id: u64,
    /// Identity to append
    pub collaborator: String,
}

/// `update-experiment-status [experimentId, newStatus]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateExperimentStatus {
    /// Target experiment
    pub experiment_id: u64,
    /// Replacement status (open string)
    pub status: String,
}

/// `get-experiment [experimentId]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetExperiment {
    /// Requested experiment
    pub experiment_id: u64,
}

/// `get-experiments-by-status [status]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetExperimentsByStatus {
    /// Exact status to match
    pub status: String,
}

/// `share-dataset [experimentId, title, description, dataHash]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareDataset {
    /// Advisory experiment reference
    pub experiment_id: i64,
    /// Dataset title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Content hash supplied by the sharer
    pub data_hash: String,
}

/// `grant-access [datasetId, user]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantAccess {
    /// Target dataset
    pub dataset_id: u64,
    /// Identity to append to the access list
    pub user: String,
}

/// `get-dataset [datasetId]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetDataset {
    /// Requested dataset
    pub dataset_id: u64,
}

/// `has-access [datasetId, user]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HasAccess {
    /// Target dataset
    pub dataset_id: u64,
    /// Identity to look up
    pub user: String,
}

/// Every operation the ledger understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Create an experiment led by the caller
    CreateExperiment(CreateExperiment),
    /// Append a collaborator (lead only)
    AddCollaborator(AddCollaborator),
    /// Overwrite the status (lead only)
    UpdateExperimentStatus(UpdateExperimentStatus),
    /// Point lookup
    GetExperiment(GetExperiment),
    /// Exact-status scan
    GetExperimentsByStatus(GetExperimentsByStatus),
    /// Share a dataset owned by the caller
    ShareDataset(ShareDataset),
    /// Append to the access list (owner only)
    GrantAccess(GrantAccess),
    /// Point lookup
    GetDataset(GetDataset),
    /// Access-list membership
    HasAccess(HasAccess),
}

impl Operation {
    /// Every method name accepted by [`Operation::decode`].
    pub const METHODS: [&'static str; 9] = [
        "create-experiment",
        "add-collaborator",
        "update-experiment-status",
        "get-experiment",
        "get-experiments-by-status",
        "share-dataset",
        "grant-access",
        "get-dataset",
        "has-access",
    ];

    /// Decode a method name and positional argument list.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownOperation`] if `method` is not one of [`Self::METHODS`]
    /// - [`Error::InvalidArguments`] if `args` has the wrong arity or types
    pub fn decode(method: &str, args: Vec<Value>) -> Result<Self> {
        match method {
            "create-experiment" => positional(method, args).map(Self::CreateExperiment),
            "add-collaborator" => positional(method, args).map(Self::AddCollaborator),
            "update-experiment-status" => {
                positional(method, args).map(Self::UpdateExperimentStatus)
            }
            "get-experiment" => positional(method, args).map(Self::GetExperiment),
            "get-experiments-by-status" => {
                positional(method, args).map(Self::GetExperimentsByStatus)
            }
            "share-dataset" => positional(method, args).map(Self::ShareDataset),
            "grant-access" => positional(method, args).map(Self::GrantAccess),
            "get-dataset" => positional(method, args).map(Self::GetDataset),
            "has-access" => positional(method, args).map(Self::HasAccess),
            other => Err(Error::UnknownOperation(other.to_string())),
        }
    }

    /// The wire method name of this operation.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        let index = match self {
            Self::CreateExperiment(_) => 0,
            Self::AddCollaborator(_) => 1,
            Self::UpdateExperimentStatus(_) => 2,
            Self::GetExperiment(_) => 3,
            Self::GetExperimentsByStatus(_) => 4,
            Self::ShareDataset(_) => 5,
            Self::GrantAccess(_) => 6,
            Self::GetDataset(_) => 7,
            Self::HasAccess(_) => 8,
        };
        Self::METHODS[index]
    }

    /// Whether this operation can change ledger state.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::CreateExperiment(_)
                | Self::AddCollaborator(_)
                | Self::UpdateExperimentStatus(_)
                | Self::ShareDataset(_)
                | Self::GrantAccess(_)
        )
    }
}

/// Structs derive `Deserialize` from JSON arrays field-by-field, which is
/// exactly the positional calling convention. Surplus elements are rejected.
fn positional<T: DeserializeOwned>(method: &str, args: Vec<Value>) -> Result<T> {
    serde_json::from_value(Value::Array(args))
        .map_err(|e| Error::InvalidArguments(format!("{method}: {e}")))
}
