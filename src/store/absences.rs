use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::error::{StoreError, WriteOutcome};
use crate::model::{Absence, AbsenceReason};
use crate::storage::keys;
use crate::store::{Record, Store};

impl Record for Absence {
    const KEY: &'static str = keys::ABSENCES;
    const ID_PREFIX: &'static str = "abs";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAbsence {
    pub employee_id: String,
    pub date: NaiveDate,
    pub month: String,
    pub year: i32,
    pub reason: AbsenceReason,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbsencePatch {
    pub employee_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub month: Option<String>,
    pub year: Option<i32>,
    pub reason: Option<AbsenceReason>,
}

impl Store {
    pub fn list_absences(&self) -> Result<Vec<Absence>, StoreError> {
        self.load()
    }

    pub fn absences_by_employee(&self, employee_id: &str) -> Result<Vec<Absence>, StoreError> {
        Ok(self
            .list_absences()?
            .into_iter()
            .filter(|absence| absence.employee_id == employee_id)
            .collect())
    }

    /// Creating an absence row does not bump the employee's `absence_count`;
    /// that cache is only ever written at seed time or by an explicit
    /// employee patch.
    pub fn create_absence(&self, new: NewAbsence) -> Result<Absence, StoreError> {
        let absence = Absence {
            id: self.fresh_id(Absence::ID_PREFIX),
            employee_id: new.employee_id,
            date: new.date,
            month: new.month,
            year: new.year,
            reason: new.reason,
        };
        let absence = self.insert(absence)?;
        info!(id = %absence.id, employee_id = %absence.employee_id, "absence recorded");
        Ok(absence)
    }

    pub fn update_absence(
        &self,
        id: &str,
        patch: AbsencePatch,
    ) -> Result<WriteOutcome, StoreError> {
        self.modify::<Absence>(id, |row| {
            if let Some(employee_id) = patch.employee_id {
                row.employee_id = employee_id;
            }
            if let Some(date) = patch.date {
                row.date = date;
            }
            if let Some(month) = patch.month {
                row.month = month;
            }
            if let Some(year) = patch.year {
                row.year = year;
            }
            if let Some(reason) = patch.reason {
                row.reason = reason;
            }
        })
    }

    pub fn delete_absence(&self, id: &str) -> Result<WriteOutcome, StoreError> {
        self.remove::<Absence>(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    fn store() -> Store {
        Store::new(Arc::new(MemoryStorage::new()))
    }

    fn new_absence(employee: &str) -> NewAbsence {
        NewAbsence {
            employee_id: employee.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
            month: "June".to_string(),
            year: 2024,
            reason: AbsenceReason::Sickness,
        }
    }

    #[test]
    fn create_then_filter_by_employee() {
        let store = store();
        let a = store.create_absence(new_absence("emp-1")).unwrap();
        store.create_absence(new_absence("emp-2")).unwrap();

        assert_eq!(store.absences_by_employee("emp-1").unwrap(), vec![a]);
    }

    #[test]
    fn reason_patch_leaves_date_untouched() {
        let store = store();
        let created = store.create_absence(new_absence("emp-1")).unwrap();

        let outcome = store
            .update_absence(
                &created.id,
                AbsencePatch {
                    reason: Some(AbsenceReason::Excused),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(outcome.is_applied());

        let updated = &store.list_absences().unwrap()[0];
        assert_eq!(updated.reason, AbsenceReason::Excused);
        assert_eq!(updated.date, created.date);
    }

    #[test]
    fn delete_of_absent_id_is_not_found() {
        let store = store();
        assert_eq!(
            store.delete_absence("abs-nope").unwrap(),
            WriteOutcome::NotFound
        );
    }
}
