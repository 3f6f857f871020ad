use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Authorization tag controlling which views an account may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Client,
    Admin,
}

/// Password is stored and compared in plaintext: this is demo data living in
/// a local store, not a credential system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub email: String,
    pub name: String,
}
