//! Experiment - a proposed or running piece of research with one lead

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Status every experiment starts in.
pub const INITIAL_STATUS: &str = "proposed";

/// Experiment record.
///
/// `lead_researcher` is the only identity that may add collaborators or change
/// the status. `status` is an open string: no set of values is enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Experiment {
    lead_researcher: String,
    title: String,
    description: String,
    parameters: Vec<String>,
    collaborators: Vec<String>,
    status: String,
}

impl Experiment {
    /// Create a new experiment led by `lead_researcher`.
    ///
    /// The lead becomes the first collaborator and the status starts as
    /// [`INITIAL_STATUS`].
    #[must_use]
    pub fn new(
        lead_researcher: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<String>,
    ) -> Self {
        let lead_researcher = lead_researcher.into();
        Self {
            collaborators: vec![lead_researcher.clone()],
            lead_researcher,
            title: title.into(),
            description: description.into(),
            parameters,
            status: INITIAL_STATUS.to_string(),
        }
    }

    /// Get the lead researcher.
    #[must_use]
    pub fn lead_researcher(&self) -> &str {
        &self.lead_researcher
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

    /// Get the parameters, in creation order.
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Get the collaborators. The lead is always first.
    #[must_use]
    pub fn collaborators(&self) -> &[String] {
        &self.collaborators
    }

    /// Get the current status.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether `identity` is listed as a collaborator.
    #[must_use]
    pub fn is_collaborator(&self, identity: &str) -> bool {
        self.collaborators.iter().any(|c| c == identity)
    }

    pub(crate) fn push_collaborator(&mut self, collaborator: impl Into<String>) {
        self.collaborators.push(collaborator.into());
    }

    pub(crate) fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

impl Record for Experiment {
    const KIND: &'static str = "experiment";

    fn privileged_identity(&self) -> &str {
        &self.lead_researcher
    }

    fn is_well_formed(&self) -> bool {
        self.collaborators.first() == Some(&self.lead_researcher)
    }
}
