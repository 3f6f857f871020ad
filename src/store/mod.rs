//! Record store: typed CRUD over the six persisted collections.
//!
//! Every mutation is a full read-modify-write of one collection, serialized
//! by a store-level mutex. That makes each operation atomic from the caller's
//! perspective within one process; writers in *other* processes sharing the
//! same substrate are not coordinated (last write wins), which matches the
//! single-writer deployment this demo assumes.

mod absences;
mod accounts;
mod employees;
mod invoices;
mod payroll;
mod transactions;

pub use absences::{AbsencePatch, NewAbsence};
pub use accounts::{AccountPatch, NewAccount};
pub use employees::{EmployeePatch, NewEmployee};
pub use invoices::{InvoicePatch, NewInvoice};
pub use payroll::{NewPayrollEntry, PayrollPatch};
pub use transactions::{NewTransaction, TransactionPatch};

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::{StoreError, WriteOutcome};
use crate::storage::Storage;

/// A row in one of the persisted collections.
pub(crate) trait Record: Serialize + DeserializeOwned {
    /// Storage slot holding the collection.
    const KEY: &'static str;
    /// Prefix for identifiers generated at create time.
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;
}

pub struct Store {
    pub(crate) storage: Arc<dyn Storage>,
    write_lock: Mutex<()>,
}

impl Store {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// Fresh collection-scoped identifier. Random UUIDs keep ids unique even
    /// for back-to-back creates, which wall-clock-derived ids cannot.
    pub(crate) fn fresh_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", Uuid::new_v4())
    }

    pub(crate) fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().expect("store write lock poisoned")
    }

    /// Full collection in insertion order; empty if the slot was never
    /// written.
    pub(crate) fn load<R: Record>(&self) -> Result<Vec<R>, StoreError> {
        match self.storage.get(R::KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    pub(crate) fn persist<R: Record>(&self, rows: &[R]) -> Result<(), StoreError> {
        let json = serde_json::to_string(rows)?;
        self.storage.set(R::KEY, &json)
    }

    pub(crate) fn insert<R: Record + Clone>(&self, record: R) -> Result<R, StoreError> {
        let _guard = self.lock_writes();
        let mut rows = self.load::<R>()?;
        rows.push(record.clone());
        self.persist(&rows)?;
        Ok(record)
    }

    /// Apply `patch` to the row with `id` and persist. Missing ids report
    /// `NotFound` instead of silently doing nothing.
    pub(crate) fn modify<R: Record>(
        &self,
        id: &str,
        patch: impl FnOnce(&mut R),
    ) -> Result<WriteOutcome, StoreError> {
        let _guard = self.lock_writes();
        let mut rows = self.load::<R>()?;
        match rows.iter_mut().find(|row| row.id() == id) {
            Some(row) => {
                patch(row);
                self.persist(&rows)?;
                Ok(WriteOutcome::Applied)
            }
            None => Ok(WriteOutcome::NotFound),
        }
    }

    pub(crate) fn remove<R: Record>(&self, id: &str) -> Result<WriteOutcome, StoreError> {
        let _guard = self.lock_writes();
        let mut rows = self.load::<R>()?;
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        if rows.len() == before {
            return Ok(WriteOutcome::NotFound);
        }
        self.persist(&rows)?;
        Ok(WriteOutcome::Applied)
    }

    /// Whether the collection slot exists at all, seeded-empty included.
    /// Seeding keys off this, not off emptiness.
    pub(crate) fn collection_present<R: Record>(&self) -> Result<bool, StoreError> {
        Ok(self.storage.get(R::KEY)?.is_some())
    }
}
