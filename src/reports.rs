//! Derived figures the dashboards render. Everything here is computed from
//! full collection reads; nothing is persisted.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::StoreError;
use crate::model::{Employee, InvoiceStatus, Transaction, TransactionKind};
use crate::seed::MONTH_NAMES;
use crate::store::Store;

static MONTH_ORDER: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(idx, name)| (*name, idx))
        .collect()
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyAbsences {
    pub month: String,
    pub count: usize,
}

/// Headline figures for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminDashboard {
    pub active_employees: usize,
    pub total_employees: usize,
    pub total_absences: usize,
    pub avg_performance: u32,
    pub avg_ranking: u32,
    /// Months with at least one absence, in calendar order.
    pub absences_by_month: Vec<MonthlyAbsences>,
}

/// Per-client figures for the client dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientSummary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    pub pending_invoices: usize,
    pub invoice_count: usize,
    /// Newest first, capped at five rows.
    pub recent_transactions: Vec<Transaction>,
}

pub fn admin_dashboard(store: &Store) -> Result<AdminDashboard, StoreError> {
    let staff = store.list_employees()?;
    let absences = store.list_absences()?;

    let mut by_month: HashMap<String, usize> = HashMap::new();
    for absence in &absences {
        *by_month.entry(absence.month.clone()).or_default() += 1;
    }
    let mut absences_by_month: Vec<MonthlyAbsences> = by_month
        .into_iter()
        .map(|(month, count)| MonthlyAbsences { month, count })
        .collect();
    absences_by_month.sort_by_key(|row| {
        MONTH_ORDER
            .get(row.month.as_str())
            .copied()
            .unwrap_or(MONTH_NAMES.len())
    });

    Ok(AdminDashboard {
        active_employees: staff.iter().filter(|e| e.active).count(),
        total_employees: staff.len(),
        total_absences: absences.len(),
        avg_performance: rounded_mean(staff.iter().map(|e| e.performance)),
        avg_ranking: rounded_mean(staff.iter().map(|e| e.ranking)),
        absences_by_month,
    })
}

pub fn client_summary(store: &Store, account_id: &str) -> Result<ClientSummary, StoreError> {
    let transactions = store.transactions_by_account(account_id)?;
    let invoices = store.invoices_by_account(account_id)?;

    let income = sum_of(&transactions, TransactionKind::Income);
    let expenses = sum_of(&transactions, TransactionKind::Expense);

    let mut recent_transactions = transactions;
    recent_transactions.sort_by(|a, b| b.date.cmp(&a.date));
    recent_transactions.truncate(5);

    Ok(ClientSummary {
        income,
        expenses,
        balance: income - expenses,
        pending_invoices: invoices
            .iter()
            .filter(|i| i.status == InvoiceStatus::Pending)
            .count(),
        invoice_count: invoices.len(),
        recent_transactions,
    })
}

/// Best-ranked employees, highest first. The dashboards ask for ten.
pub fn top_by_ranking(staff: &[Employee], n: usize) -> Vec<Employee> {
    sorted_desc(staff, n, |e| e.ranking)
}

pub fn top_by_absences(staff: &[Employee], n: usize) -> Vec<Employee> {
    sorted_desc(staff, n, |e| e.absence_count)
}

pub fn top_by_performance(staff: &[Employee], n: usize) -> Vec<Employee> {
    sorted_desc(staff, n, |e| e.performance)
}

pub fn bottom_by_performance(staff: &[Employee], n: usize) -> Vec<Employee> {
    let mut rows = staff.to_vec();
    rows.sort_by_key(|e| e.performance);
    rows.truncate(n);
    rows
}

fn sorted_desc(staff: &[Employee], n: usize, key: impl Fn(&Employee) -> u32) -> Vec<Employee> {
    let mut rows = staff.to_vec();
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
    rows.truncate(n);
    rows
}

fn sum_of(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

fn rounded_mean(values: impl ExactSizeIterator<Item = u32>) -> u32 {
    let len = values.len();
    if len == 0 {
        return 0;
    }
    let sum: u64 = values.map(u64::from).sum();
    ((sum as f64) / (len as f64)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;
    use crate::storage::MemoryStorage;
    use crate::store::{NewInvoice, NewTransaction};
    use chrono::{Datelike, NaiveDate};
    use std::sync::Arc;

    fn store() -> Store {
        Store::new(Arc::new(MemoryStorage::new()))
    }

    fn employee(id: &str, ranking: u32, performance: u32, active: bool) -> Employee {
        Employee {
            id: id.to_string(),
            name: id.to_string(),
            position: Position::Operator,
            ranking,
            absence_count: 0,
            performance,
            active,
        }
    }

    fn txn(store: &Store, account: &str, day: u32, amount: f64, kind: TransactionKind) {
        store
            .create_transaction(NewTransaction {
                account_id: account.to_string(),
                date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
                description: "Invoice payment".to_string(),
                amount,
                kind,
            })
            .unwrap();
    }

    #[test]
    fn client_summary_balances_income_against_expenses() {
        let store = store();
        txn(&store, "client-1", 3, 1_000.0, TransactionKind::Income);
        txn(&store, "client-1", 9, 400.0, TransactionKind::Expense);
        txn(&store, "client-2", 4, 9_999.0, TransactionKind::Income);
        store
            .create_invoice(NewInvoice {
                account_id: "client-1".to_string(),
                number: "F-000001".to_string(),
                issue_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                amount: 700.0,
                status: InvoiceStatus::Pending,
                description: "Professional services".to_string(),
            })
            .unwrap();

        let summary = client_summary(&store, "client-1").unwrap();
        assert_eq!(summary.income, 1_000.0);
        assert_eq!(summary.expenses, 400.0);
        assert_eq!(summary.balance, 600.0);
        assert_eq!(summary.pending_invoices, 1);
        assert_eq!(summary.invoice_count, 1);
    }

    #[test]
    fn recent_transactions_are_newest_first_and_capped() {
        let store = store();
        for day in 1..=8 {
            txn(&store, "client-1", day, 10.0, TransactionKind::Income);
        }

        let summary = client_summary(&store, "client-1").unwrap();
        assert_eq!(summary.recent_transactions.len(), 5);
        assert_eq!(summary.recent_transactions[0].date.day(), 8);
        assert!(
            summary
                .recent_transactions
                .windows(2)
                .all(|w| w[0].date >= w[1].date)
        );
    }

    #[test]
    fn dashboard_averages_round_to_nearest() {
        let store = store();
        let staff = vec![
            employee("emp-1", 10, 50, true),
            employee("emp-2", 11, 51, false),
        ];
        for e in &staff {
            store.insert(e.clone()).unwrap();
        }

        let dashboard = admin_dashboard(&store).unwrap();
        assert_eq!(dashboard.total_employees, 2);
        assert_eq!(dashboard.active_employees, 1);
        assert_eq!(dashboard.avg_ranking, 11); // 10.5 rounds up
        assert_eq!(dashboard.avg_performance, 51); // 50.5 rounds up
    }

    #[test]
    fn dashboard_on_empty_store_is_all_zeroes() {
        let dashboard = admin_dashboard(&store()).unwrap();
        assert_eq!(dashboard.total_employees, 0);
        assert_eq!(dashboard.avg_performance, 0);
        assert!(dashboard.absences_by_month.is_empty());
    }

    #[test]
    fn top_slices_sort_descending_and_cap_at_n() {
        let staff = vec![
            employee("emp-1", 5, 90, true),
            employee("emp-2", 80, 60, true),
            employee("emp-3", 40, 75, true),
        ];

        let top = top_by_ranking(&staff, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, "emp-2");
        assert_eq!(top[1].id, "emp-3");

        let worst = bottom_by_performance(&staff, 1);
        assert_eq!(worst[0].id, "emp-2");
    }
}
