use serde::Deserialize;
use tracing::info;

use crate::error::{StoreError, WriteOutcome};
use crate::model::{Employee, Position};
use crate::storage::keys;
use crate::store::{Record, Store};

impl Record for Employee {
    const KEY: &'static str = keys::EMPLOYEES;
    const ID_PREFIX: &'static str = "emp";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub position: Position,
    pub ranking: u32,
    pub absence_count: u32,
    pub performance: u32,
    pub active: bool,
}

/// Patching `absence_count` does NOT touch the absence rows; the two sides
/// are free to drift, same as editing an absence row leaves this count alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub position: Option<Position>,
    pub ranking: Option<u32>,
    pub absence_count: Option<u32>,
    pub performance: Option<u32>,
    pub active: Option<bool>,
}

impl Store {
    pub fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        self.load()
    }

    pub fn create_employee(&self, new: NewEmployee) -> Result<Employee, StoreError> {
        let employee = Employee {
            id: self.fresh_id(Employee::ID_PREFIX),
            name: new.name,
            position: new.position,
            ranking: new.ranking,
            absence_count: new.absence_count,
            performance: new.performance,
            active: new.active,
        };
        let employee = self.insert(employee)?;
        info!(id = %employee.id, position = %employee.position, "employee created");
        Ok(employee)
    }

    pub fn update_employee(
        &self,
        id: &str,
        patch: EmployeePatch,
    ) -> Result<WriteOutcome, StoreError> {
        self.modify::<Employee>(id, |row| {
            if let Some(name) = patch.name {
                row.name = name;
            }
            if let Some(position) = patch.position {
                row.position = position;
            }
            if let Some(ranking) = patch.ranking {
                row.ranking = ranking;
            }
            if let Some(absence_count) = patch.absence_count {
                row.absence_count = absence_count;
            }
            if let Some(performance) = patch.performance {
                row.performance = performance;
            }
            if let Some(active) = patch.active {
                row.active = active;
            }
        })
    }

    pub fn delete_employee(&self, id: &str) -> Result<WriteOutcome, StoreError> {
        self.remove::<Employee>(id)
    }
}
