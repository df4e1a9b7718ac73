//! Success values and the tagged wire result

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dataset::Dataset;
use crate::experiment::Experiment;
use crate::Error;

/// Typed success value of an [`super::Operation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A record was created with this id
    Created(u64),
    /// A mutation was applied; nothing to return
    Done,
    /// Point lookup result
    Experiment(Option<Experiment>),
    /// Status scan result, ascending id
    Experiments(Vec<(u64, Experiment)>),
    /// Point lookup result
    Dataset(Option<Dataset>),
    /// Access-list membership
    Access(bool),
}

impl Outcome {
    /// JSON rendering of the success value, `None` when there is nothing to
    /// return (mutations and absent records).
    ///
    /// Status scans render as a list of single-entry objects keyed by the
    /// decimal id: `[{"1": {...}}, {"3": {...}}]`.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Created(id) => Some(Value::from(id)),
            Self::Done | Self::Experiment(None) | Self::Dataset(None) => None,
            Self::Experiment(Some(experiment)) => Some(to_value(&experiment)),
            Self::Dataset(Some(dataset)) => Some(to_value(&dataset)),
            Self::Experiments(experiments) => Some(Value::Array(
                experiments
                    .into_iter()
                    .map(|(id, experiment)| {
                        let mut entry = Map::with_capacity(1);
                        entry.insert(id.to_string(), to_value(&experiment));
                        Value::Object(entry)
                    })
                    .collect(),
            )),
            Self::Access(granted) => Some(Value::Bool(granted)),
        }
    }
}

// Records are plain strings and integers; serializing them cannot fail.
fn to_value<T: Serialize>(record: &T) -> Value {
    serde_json::to_value(record).unwrap_or(Value::Null)
}

/// Failure code carried on the wire.
///
/// Record errors are small integers (404, 403, 400); an unknown method is the
/// literal string `"Unknown method"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    /// Numeric code
    Code(u16),
    /// Non-numeric failure
    Message(String),
}

impl ErrorCode {
    /// Code reported for an unrecognized method name.
    pub const UNKNOWN_METHOD: &'static str = "Unknown method";
}

impl From<&Error> for ErrorCode {
    fn from(err: &Error) -> Self {
        match (err, err.code()) {
            (_, Some(code)) => Self::Code(code),
            (Error::UnknownOperation(_), None) => {
                Self::Message(Self::UNKNOWN_METHOD.to_string())
            }
            (other, None) => Self::Message(other.to_string()),
        }
    }
}

/// Tagged result returned across the command boundary.
///
/// Serializes as `{"success": true, "value": ...}` or
/// `{"success": false, "error": 404}`; `value` is omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallResult {
    /// Whether the call succeeded
    pub success: bool,
    /// Success value, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Failure code on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
}

impl CallResult {
    /// Successful call with an optional value.
    #[must_use]
    pub const fn success(value: Option<Value>) -> Self {
        Self {
            success: true,
            value,
            error: None,
        }
    }

    /// Failed call.
    #[must_use]
    pub const fn failure(error: ErrorCode) -> Self {
        Self {
            success: false,
            value: None,
            error: Some(error),
        }
    }
}

impl From<crate::Result<Outcome>> for CallResult {
    fn from(result: crate::Result<Outcome>) -> Self {
        match result {
            Ok(outcome) => Self::success(outcome.into_value()),
            Err(err) => Self::failure(ErrorCode::from(&err)),
        }
    }
}
