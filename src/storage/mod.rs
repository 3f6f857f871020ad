//! Persistence substrate: independently keyed slots holding UTF-8 JSON.
//!
//! Each collection lives under one well-known key and is always read and
//! written whole. The substrate knows nothing about record shapes; the store
//! layer owns serialization.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StoreError;

pub mod keys {
    pub const ACCOUNTS: &str = "accounts";
    pub const INVOICES: &str = "invoices";
    pub const PAYROLL_ENTRIES: &str = "payroll_entries";
    pub const EMPLOYEES: &str = "employees";
    pub const ABSENCES: &str = "absences";
    pub const TRANSACTIONS: &str = "transactions";
    pub const CURRENT_ACCOUNT: &str = "current_account";
}

/// Keyed slot storage. Values are UTF-8 JSON documents.
pub trait Storage: Send + Sync {
    /// Value under `key`, or `None` if the slot was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the slot. A failed write must leave an error, never silently
    /// drop data.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Clear the slot. Clearing an absent slot is a no-op.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
