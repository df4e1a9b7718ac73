//! Dataset Registry
//!
//! Datasets are shared by their owner, who alone can extend the access list.
//! Each dataset names the experiment it came from; that reference is advisory
//! and never checked against the Experiment Registry.
//!
//! ## Usage
//!
//! ```rust
//! use collab_ledger::dataset::DatasetRegistry;
//!
//! let registry = DatasetRegistry::new();
//! let id = registry.share_dataset(1, "Results", "Plasma test", "0x1234", "user1");
//!
//! registry.grant_access(id, "user2", "user1")?;
//! assert!(registry.has_access(id, "user2")?);
//! assert!(!registry.has_access(id, "user3")?);
//! # Ok::<(), collab_ledger::Error>(())
//! ```

mod record;
mod registry;

pub use record::Dataset;
pub use registry::DatasetRegistry;
