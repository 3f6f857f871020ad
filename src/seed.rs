//! Lazy synthetic-data seeding.
//!
//! Each collection is populated independently, and only if its storage slot
//! has never been written. The generated population is random (sizes and
//! ranges are fixed, values are not), so two runs against fresh storage will
//! not produce identical data unless a seeded RNG is injected.
//!
//! Two processes seeding the same substrate at once are not guarded against;
//! both generate, the later write wins whole-collection, nothing corrupts.

use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::model::{
    Absence, AbsenceReason, Account, Employee, Invoice, InvoiceStatus, PayrollEntry, Position,
    Role, Transaction, TransactionKind,
};
use crate::store::{Record, Store};

pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const SEED_YEAR: i32 = 2024;
const CLIENT_COUNT: usize = 25;
const EMPLOYEE_COUNT: usize = 50;
const INVOICE_COUNT: usize = 100;
const TRANSACTION_COUNT: usize = 200;

const POSITIONS: [Position; 4] = [
    Position::Operator,
    Position::Supervisor,
    Position::Technician,
    Position::Manager,
];

const ABSENCE_REASONS: [AbsenceReason; 4] = [
    AbsenceReason::Sickness,
    AbsenceReason::Personal,
    AbsenceReason::Excused,
    AbsenceReason::Unexcused,
];

const INVOICE_STATUSES: [InvoiceStatus; 3] = [
    InvoiceStatus::Paid,
    InvoiceStatus::Pending,
    InvoiceStatus::Overdue,
];

const TRANSACTION_DESCRIPTIONS: [&str; 4] =
    ["Invoice payment", "Credit", "Service charge", "Adjustment"];

/// Seed every absent collection using a thread-local RNG.
pub fn initialize(store: &Store) -> Result<(), StoreError> {
    initialize_with(store, &mut rand::thread_rng())
}

/// Seed every absent collection from the given RNG. Tests inject a
/// `StdRng::seed_from_u64` here for reproducible populations.
pub fn initialize_with<R: Rng>(store: &Store, rng: &mut R) -> Result<(), StoreError> {
    seed_if_absent(store, "accounts", || accounts())?;
    seed_if_absent(store, "employees", || employees(rng))?;
    seed_if_absent(store, "invoices", || invoices(rng))?;

    // Payroll and absences are derived from whatever employee rows exist by
    // now, seeded this run or an earlier one.
    let staff = store.list_employees()?;
    seed_if_absent(store, "payroll_entries", || payroll(rng, &staff))?;
    seed_if_absent(store, "absences", || absences(rng, &staff))?;

    seed_if_absent(store, "transactions", || transactions(rng))?;
    Ok(())
}

fn seed_if_absent<T: Record>(
    store: &Store,
    what: &str,
    build: impl FnOnce() -> Vec<T>,
) -> Result<(), StoreError> {
    if store.collection_present::<T>()? {
        debug!(collection = what, "already seeded, skipping");
        return Ok(());
    }
    let rows = build();
    info!(collection = what, rows = rows.len(), "seeding collection");
    store.persist(&rows)
}

/// Day is capped at 28, so every generated (year, month, day) is a real date.
fn day_in_month(month0: usize, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(SEED_YEAR, month0 as u32 + 1, day)
        .expect("day 1-28 exists in every month")
}

fn accounts() -> Vec<Account> {
    let mut rows = Vec::with_capacity(CLIENT_COUNT + 1);
    rows.push(Account {
        id: "1".to_string(),
        username: "admin".to_string(),
        password: "admin123".to_string(),
        role: Role::Admin,
        email: "admin@company.com".to_string(),
        name: "Administrator".to_string(),
    });
    for i in 1..=CLIENT_COUNT {
        rows.push(Account {
            id: format!("client-{i}"),
            username: format!("client{i}"),
            password: "client123".to_string(),
            role: Role::Client,
            email: format!("client{i}@company.com"),
            name: format!("Client {i}"),
        });
    }
    rows
}

fn employees<R: Rng>(rng: &mut R) -> Vec<Employee> {
    (1..=EMPLOYEE_COUNT)
        .map(|i| Employee {
            id: format!("emp-{i}"),
            name: format!("Employee {i}"),
            position: POSITIONS[rng.gen_range(0..POSITIONS.len())],
            ranking: rng.gen_range(1..=100),
            absence_count: rng.gen_range(0..15),
            performance: rng.gen_range(50..100),
            active: rng.gen_bool(0.9),
        })
        .collect()
}

fn invoices<R: Rng>(rng: &mut R) -> Vec<Invoice> {
    (0..INVOICE_COUNT)
        .map(|i| Invoice {
            id: format!("inv-{}", i + 1),
            account_id: format!("client-{}", i % CLIENT_COUNT + 1),
            number: format!("F-{:06}", i + 1),
            issue_date: day_in_month(i / 9, (i % 28) as u32 + 1),
            amount: rng.gen_range(1_000..51_000) as f64,
            status: INVOICE_STATUSES[rng.gen_range(0..INVOICE_STATUSES.len())],
            description: "Professional services".to_string(),
        })
        .collect()
}

fn payroll<R: Rng>(rng: &mut R, staff: &[Employee]) -> Vec<PayrollEntry> {
    let mut rows = Vec::with_capacity(staff.len() * 12);
    for emp in staff {
        for month0 in 0..12 {
            let base_salary = rng.gen_range(15_000..35_000) as f64;
            let bonuses = rng.gen_range(0..5_000) as f64;
            let deductions = rng.gen_range(0..3_000) as f64;
            rows.push(PayrollEntry {
                id: format!("pay-{}-{}", emp.id, month0 + 1),
                employee_id: emp.id.clone(),
                month: MONTH_NAMES[month0].to_string(),
                year: SEED_YEAR,
                base_salary,
                bonuses,
                deductions,
                total: base_salary + bonuses - deductions,
            });
        }
    }
    rows
}

/// One row per counted absence. The employee's `absence_count` is the source
/// here and is never revisited afterwards; later edits on either side drift.
fn absences<R: Rng>(rng: &mut R, staff: &[Employee]) -> Vec<Absence> {
    let mut rows = Vec::new();
    for emp in staff {
        for n in 0..emp.absence_count {
            let month0 = rng.gen_range(0..12);
            rows.push(Absence {
                id: format!("abs-{}-{}", emp.id, n + 1),
                employee_id: emp.id.clone(),
                date: day_in_month(month0, rng.gen_range(1..29)),
                month: MONTH_NAMES[month0].to_string(),
                year: SEED_YEAR,
                reason: ABSENCE_REASONS[rng.gen_range(0..ABSENCE_REASONS.len())],
            });
        }
    }
    rows
}

fn transactions<R: Rng>(rng: &mut R) -> Vec<Transaction> {
    (0..TRANSACTION_COUNT)
        .map(|i| Transaction {
            id: format!("txn-{}", i + 1),
            account_id: format!("client-{}", i % CLIENT_COUNT + 1),
            date: day_in_month(i / 17, (i % 28) as u32 + 1),
            description: TRANSACTION_DESCRIPTIONS[rng.gen_range(0..TRANSACTION_DESCRIPTIONS.len())]
                .to_string(),
            amount: rng.gen_range(500..30_500) as f64,
            kind: if rng.gen_bool(0.7) {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            },
        })
        .collect()
}
