//! Data-access core of a business-management demo: six record collections
//! (accounts, invoices, payroll entries, employees, absences, transactions)
//! persisted as JSON under independent keys, lazily seeded with sample data,
//! with a role-gated session layer on top.
//!
//! The store assumes a single writing process per data directory; within the
//! process every read-modify-write is serialized, across processes the last
//! write wins.

pub mod auth;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod reports;
pub mod seed;
pub mod storage;
pub mod store;

pub use auth::{AccessDecision, check_access};
pub use config::Config;
pub use error::{StoreError, WriteOutcome};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::Store;
