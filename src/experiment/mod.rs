//! Experiment Registry
//!
//! Experiments are led by the researcher who created them. Only the lead may
//! add collaborators or move the experiment to a new status.
//!
//! ## Usage
//!
//! ```rust
//! use collab_ledger::experiment::ExperimentRegistry;
//!
//! let registry = ExperimentRegistry::new();
//! let id = registry.create_experiment(
//!     "Tokamak Optimization",
//!     "Improving plasma confinement",
//!     vec!["temperature".into(), "magnetic field".into()],
//!     "user1",
//! );
//!
//! registry.add_collaborator(id, "user2", "user1")?;
//! registry.update_experiment_status(id, "in-progress", "user1")?;
//!
//! assert_eq!(registry.get_experiments_by_status("in-progress").len(), 1);
//! # Ok::<(), collab_ledger::Error>(())
//! ```

mod record;
mod registry;

pub use record::{Experiment, INITIAL_STATUS};
pub use registry::ExperimentRegistry;
