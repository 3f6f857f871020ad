//! Session tracking: at most one authenticated account, persisted under its
//! own slot so it survives restarts, independent of the six collections.

use tracing::{info, warn};

use crate::error::StoreError;
use crate::model::Account;
use crate::storage::keys;
use crate::store::Store;

impl Store {
    /// Linear scan for an exact username and plaintext password match.
    ///
    /// A match becomes the current account and is returned; no match returns
    /// `Ok(None)` and leaves any previously stored session untouched. A wrong
    /// password is a normal negative result here, not an error.
    pub fn login(&self, username: &str, password: &str) -> Result<Option<Account>, StoreError> {
        let accounts = self.list_accounts()?;
        match accounts
            .into_iter()
            .find(|account| account.username == username && account.password == password)
        {
            Some(account) => {
                let json = serde_json::to_string(&account)?;
                self.storage.set(keys::CURRENT_ACCOUNT, &json)?;
                info!(username = %account.username, role = %account.role, "login succeeded");
                Ok(Some(account))
            }
            None => {
                warn!(username, "login rejected");
                Ok(None)
            }
        }
    }

    /// Clears the session marker unconditionally, logged in or not.
    pub fn logout(&self) -> Result<(), StoreError> {
        self.storage.remove(keys::CURRENT_ACCOUNT)?;
        info!("session cleared");
        Ok(())
    }

    pub fn current_account(&self) -> Result<Option<Account>, StoreError> {
        match self.storage.get(keys::CURRENT_ACCOUNT)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}
