use serde::Deserialize;
use tracing::info;

use crate::error::{StoreError, WriteOutcome};
use crate::model::{Account, Role};
use crate::storage::keys;
use crate::store::{Record, Store};

impl Record for Account {
    const KEY: &'static str = keys::ACCOUNTS;
    const ID_PREFIX: &'static str = "acct";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountPatch {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl Store {
    pub fn list_accounts(&self) -> Result<Vec<Account>, StoreError> {
        self.load()
    }

    /// Username uniqueness is not enforced; the login scan simply takes the
    /// first match, same as the data it models.
    pub fn create_account(&self, new: NewAccount) -> Result<Account, StoreError> {
        let account = Account {
            id: self.fresh_id(Account::ID_PREFIX),
            username: new.username,
            password: new.password,
            role: new.role,
            email: new.email,
            name: new.name,
        };
        let account = self.insert(account)?;
        info!(id = %account.id, username = %account.username, role = %account.role, "account created");
        Ok(account)
    }

    pub fn update_account(
        &self,
        id: &str,
        patch: AccountPatch,
    ) -> Result<WriteOutcome, StoreError> {
        self.modify::<Account>(id, |row| {
            if let Some(username) = patch.username {
                row.username = username;
            }
            if let Some(password) = patch.password {
                row.password = password;
            }
            if let Some(role) = patch.role {
                row.role = role;
            }
            if let Some(email) = patch.email {
                row.email = email;
            }
            if let Some(name) = patch.name {
                row.name = name;
            }
        })
    }

    pub fn delete_account(&self, id: &str) -> Result<WriteOutcome, StoreError> {
        self.remove::<Account>(id)
    }
}
