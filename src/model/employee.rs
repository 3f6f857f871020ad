use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Position {
    Operator,
    Supervisor,
    Technician,
    Manager,
}

/// `absence_count` is a denormalized cache fixed when the collection is
/// seeded; it is NOT reconciled against the absence rows afterwards, so the
/// two can drift once either side is edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub ranking: u32,
    pub absence_count: u32,
    pub performance: u32,
    pub active: bool,
}
