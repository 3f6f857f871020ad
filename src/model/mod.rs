pub mod absence;
pub mod account;
pub mod employee;
pub mod invoice;
pub mod payroll;
pub mod transaction;

pub use absence::{Absence, AbsenceReason};
pub use account::{Account, Role};
pub use employee::{Employee, Position};
pub use invoice::{Invoice, InvoiceStatus};
pub use payroll::PayrollEntry;
pub use transaction::{Transaction, TransactionKind};
