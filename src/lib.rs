//! # collab-ledger: State Ledger for Scientific Collaboration
//!
//! collab-ledger tracks two record kinds, Experiments and Datasets, for a
//! research collaboration platform. Each record has exactly one privileged
//! identity (the lead researcher or the dataset owner) who alone may extend
//! its collaborator or access list, or change its status.
//!
//! ## Design
//!
//! - **Record Store**: one generic id-allocating store backs both registries
//! - **Typed operations**: method names and positional arguments are decoded
//!   once, at the command boundary
//! - **Total operations**: failures come back as values (`NotFound`,
//!   `Forbidden`, `UnknownOperation`), never panics
//! - **Session-scoped state**: a [`Ledger`] owns its registries; there are no
//!   statics
//!
//! ## Example Usage
//!
//! ```rust
//! use collab_ledger::Ledger;
//! use serde_json::json;
//!
//! let ledger = Ledger::new();
//!
//! let created = ledger.call(
//!     "create-experiment",
//!     vec![json!("Tokamak Optimization"), json!("Improving plasma confinement"), json!([])],
//!     "user1",
//! );
//! assert_eq!(created.value, Some(json!(1)));
//!
//! let denied = ledger.call("add-collaborator", vec![json!(1), json!("user3")], "user2");
//! assert!(!denied.success);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod command;
pub mod dataset;
pub mod error;
pub mod experiment;
mod ledger;
pub mod replay;
pub mod snapshot;
pub mod store;

pub use error::{Error, Result};
pub use ledger::{Ledger, LedgerBuilder};
