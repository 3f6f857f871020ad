//! Text exports of a payroll listing. Delivery (file download, attachment)
//! is the caller's concern; these only produce the document text.

use crate::error::StoreError;
use crate::model::PayrollEntry;

const CSV_HEADER: &str = "employee_id,month,year,base_salary,bonuses,deductions,total";

/// Comma-separated listing, one row per entry, header first.
///
/// Generated month names and ids contain no commas or quotes, so no field
/// escaping is applied.
pub fn payroll_csv(entries: &[PayrollEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for entry in entries {
        lines.push(format!(
            "{},{},{},{},{},{},{}",
            entry.employee_id,
            entry.month,
            entry.year,
            entry.base_salary,
            entry.bonuses,
            entry.deductions,
            entry.total
        ));
    }
    lines.join("\n")
}

/// Pretty-printed JSON array of the entries.
pub fn payroll_json(entries: &[PayrollEntry]) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(entries)?)
}
