use serde::Deserialize;
use tracing::info;

use crate::error::{StoreError, WriteOutcome};
use crate::model::PayrollEntry;
use crate::storage::keys;
use crate::store::{Record, Store};

impl Record for PayrollEntry {
    const KEY: &'static str = keys::PAYROLL_ENTRIES;
    const ID_PREFIX: &'static str = "pay";

    fn id(&self) -> &str {
        &self.id
    }
}

/// `total` is not accepted from callers; it is always computed here.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPayrollEntry {
    pub employee_id: String,
    pub month: String,
    pub year: i32,
    pub base_salary: f64,
    pub bonuses: f64,
    pub deductions: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayrollPatch {
    pub employee_id: Option<String>,
    pub month: Option<String>,
    pub year: Option<i32>,
    pub base_salary: Option<f64>,
    pub bonuses: Option<f64>,
    pub deductions: Option<f64>,
}

impl Store {
    pub fn list_payroll_entries(&self) -> Result<Vec<PayrollEntry>, StoreError> {
        self.load()
    }

    pub fn payroll_by_employee(&self, employee_id: &str) -> Result<Vec<PayrollEntry>, StoreError> {
        Ok(self
            .list_payroll_entries()?
            .into_iter()
            .filter(|entry| entry.employee_id == employee_id)
            .collect())
    }

    pub fn create_payroll_entry(&self, new: NewPayrollEntry) -> Result<PayrollEntry, StoreError> {
        let total = new.base_salary + new.bonuses - new.deductions;
        let entry = PayrollEntry {
            id: self.fresh_id(PayrollEntry::ID_PREFIX),
            employee_id: new.employee_id,
            month: new.month,
            year: new.year,
            base_salary: new.base_salary,
            bonuses: new.bonuses,
            deductions: new.deductions,
            total,
        };
        let entry = self.insert(entry)?;
        info!(id = %entry.id, employee_id = %entry.employee_id, total = entry.total, "payroll entry created");
        Ok(entry)
    }

    /// Merges the given fields, then recomputes `total` from the resulting
    /// money fields so the stored value can never go stale.
    pub fn update_payroll_entry(
        &self,
        id: &str,
        patch: PayrollPatch,
    ) -> Result<WriteOutcome, StoreError> {
        self.modify::<PayrollEntry>(id, |row| {
            if let Some(employee_id) = patch.employee_id {
                row.employee_id = employee_id;
            }
            if let Some(month) = patch.month {
                row.month = month;
            }
            if let Some(year) = patch.year {
                row.year = year;
            }
            if let Some(base_salary) = patch.base_salary {
                row.base_salary = base_salary;
            }
            if let Some(bonuses) = patch.bonuses {
                row.bonuses = bonuses;
            }
            if let Some(deductions) = patch.deductions {
                row.deductions = deductions;
            }
            row.total = row.base_salary + row.bonuses - row.deductions;
        })
    }

    pub fn delete_payroll_entry(&self, id: &str) -> Result<WriteOutcome, StoreError> {
        self.remove::<PayrollEntry>(id)
    }
}
