//! Record Store - the id-indexed mapping shared by both registries
//!
//! A [`RecordStore`] owns every record of one kind. It hands out sequential
//! ids, returns owned copies on read, and gates mutation behind the record's
//! single privileged identity.
//!
//! ## Concurrency
//!
//! Records live in a `DashMap`. A privileged mutation holds the shard's write
//! guard across both the authorization check and the change, so a
//! check-then-act race between two callers cannot interleave.
//!
//! # Example
//!
//! ```rust
//! use collab_ledger::experiment::Experiment;
//! use collab_ledger::store::RecordStore;
//!
//! let store = RecordStore::new();
//! let id = store.create(Experiment::new("user1", "Tokamak", "Confinement", vec![]));
//! assert_eq!(id, 1);
//!
//! assert!(store.mutate_privileged(id, "user1", |_| {}).is_ok());
//! assert!(store.mutate_privileged(id, "user2", |_| {}).is_err());
//! assert!(store.get(id).is_some());
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use tracing::{debug, warn};

use crate::{Error, Result};

/// Highest id or counter a restored store may carry.
///
/// The upper half of the `u64` range is left as allocation headroom, so the
/// counter never wraps.
pub const MAX_ID: u64 = u64::MAX / 2;

/// A record kept in a [`RecordStore`].
pub trait Record: Clone + Send + Sync {
    /// Short kind name used in errors and log events.
    const KIND: &'static str;

    /// The one identity allowed to mutate this record.
    fn privileged_identity(&self) -> &str;

    /// Whether the record's list invariants hold (checked on restore).
    fn is_well_formed(&self) -> bool;
}

/// Sequential-id store with an ownership gate on mutation.
#[derive(Debug)]
pub struct RecordStore<R> {
    records: DashMap<u64, R, FxBuildHasher>,
    last_id: AtomicU64,
}

impl<R: Record> RecordStore<R> {
    /// Create an empty store. The first id handed out is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: DashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            last_id: AtomicU64::new(0),
        }
    }

    /// Rebuild a store from previously exported entries.
    ///
    /// The counter resumes at `next_id` or one past the highest restored id,
    /// whichever is larger, so ids are never handed out twice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptSnapshot`] if an id is 0, above [`MAX_ID`], or
    /// appears twice, if `next_id` is above [`MAX_ID`], or if a record fails
    /// [`Record::is_well_formed`].
    pub fn restore(entries: impl IntoIterator<Item = (u64, R)>, next_id: u64) -> Result<Self> {
        if next_id > MAX_ID {
            return Err(Error::CorruptSnapshot(format!(
                "{} next_id {next_id} exceeds {MAX_ID}",
                R::KIND
            )));
        }

        let records = DashMap::with_hasher(FxBuildHasher);
        let mut last_id = next_id.saturating_sub(1);
        for (id, record) in entries {
            if id == 0 || id > MAX_ID {
                return Err(Error::CorruptSnapshot(format!(
                    "{} id {id} is not allocatable",
                    R::KIND
                )));
            }
            if !record.is_well_formed() {
                return Err(Error::CorruptSnapshot(format!(
                    "{} {id} is missing its privileged identity",
                    R::KIND
                )));
            }
            if records.insert(id, record).is_some() {
                return Err(Error::CorruptSnapshot(format!(
                    "{} {id} appears twice",
                    R::KIND
                )));
            }
            last_id = last_id.max(id);
        }
        Ok(Self {
            records,
            last_id: AtomicU64::new(last_id),
        })
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The id the next `create` will assign.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.last_id.load(Ordering::SeqCst).saturating_add(1)
    }

    /// Store a new record and return its freshly allocated id.
    pub fn create(&self, record: R) -> u64 {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            kind = R::KIND,
            id,
            owner = record.privileged_identity(),
            "record created"
        );
        self.records.insert(id, record);
        id
    }

    /// Owned copy of the record, if present.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<R> {
        self.records.get(&id).map(|r| r.value().clone())
    }

    /// Read a record without copying it out.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record has this id.
    pub fn inspect<T>(&self, id: u64, read: impl FnOnce(&R) -> T) -> Result<T> {
        self.records
            .get(&id)
            .map(|r| read(r.value()))
            .ok_or(Error::NotFound { kind: R::KIND, id })
    }

    /// Apply `change` if `caller` is the record's privileged identity.
    ///
    /// The record either takes the whole change or stays untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if no record has this id
    /// - [`Error::Forbidden`] if `caller` is not the privileged identity
    pub fn mutate_privileged(
        &self,
        id: u64,
        caller: &str,
        change: impl FnOnce(&mut R),
    ) -> Result<()> {
        let Some(mut entry) = self.records.get_mut(&id) else {
            debug!(kind = R::KIND, id, caller, "mutation on missing record");
            return Err(Error::NotFound { kind: R::KIND, id });
        };

        if entry.privileged_identity() != caller {
            warn!(kind = R::KIND, id, caller, "mutation rejected");
            return Err(Error::Forbidden {
                kind: R::KIND,
                id,
                caller: caller.to_string(),
            });
        }

        change(entry.value_mut());
        debug!(kind = R::KIND, id, caller, "record updated");
        Ok(())
    }

    /// `(id, record)` pairs matching `predicate`, in ascending id order.
    ///
    /// Evaluated against the current state on every call.
    pub fn list_by_predicate<P>(&self, predicate: P) -> std::vec::IntoIter<(u64, R)>
    where
        P: Fn(&R) -> bool,
    {
        let mut matches: Vec<(u64, R)> = self
            .records
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        matches.sort_unstable_by_key(|(id, _)| *id);
        matches.into_iter()
    }

    /// Every record in ascending id order.
    pub fn entries(&self) -> std::vec::IntoIter<(u64, R)> {
        self.list_by_predicate(|_| true)
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
