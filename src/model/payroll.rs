use serde::{Deserialize, Serialize};

/// One employee's pay for one calendar month.
///
/// `total` is computed as `base_salary + bonuses - deductions` at every create
/// and money-field update; it is stored, not re-derived on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollEntry {
    pub id: String,
    pub employee_id: String,
    pub month: String,
    pub year: i32,
    pub base_salary: f64,
    pub bonuses: f64,
    pub deductions: f64,
    pub total: f64,
}
