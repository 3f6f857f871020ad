use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::error::{StoreError, WriteOutcome};
use crate::model::{Transaction, TransactionKind};
use crate::storage::keys;
use crate::store::{Record, Store};

impl Record for Transaction {
    const KEY: &'static str = keys::TRANSACTIONS;
    const ID_PREFIX: &'static str = "txn";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTransaction {
    pub account_id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionPatch {
    pub account_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub kind: Option<TransactionKind>,
}

impl Store {
    pub fn list_transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        self.load()
    }

    pub fn transactions_by_account(
        &self,
        account_id: &str,
    ) -> Result<Vec<Transaction>, StoreError> {
        Ok(self
            .list_transactions()?
            .into_iter()
            .filter(|txn| txn.account_id == account_id)
            .collect())
    }

    pub fn create_transaction(&self, new: NewTransaction) -> Result<Transaction, StoreError> {
        let txn = Transaction {
            id: self.fresh_id(Transaction::ID_PREFIX),
            account_id: new.account_id,
            date: new.date,
            description: new.description,
            amount: new.amount,
            kind: new.kind,
        };
        let txn = self.insert(txn)?;
        info!(id = %txn.id, kind = %txn.kind, amount = txn.amount, "transaction recorded");
        Ok(txn)
    }

    pub fn update_transaction(
        &self,
        id: &str,
        patch: TransactionPatch,
    ) -> Result<WriteOutcome, StoreError> {
        self.modify::<Transaction>(id, |row| {
            if let Some(account_id) = patch.account_id {
                row.account_id = account_id;
            }
            if let Some(date) = patch.date {
                row.date = date;
            }
            if let Some(description) = patch.description {
                row.description = description;
            }
            if let Some(amount) = patch.amount {
                row.amount = amount;
            }
            if let Some(kind) = patch.kind {
                row.kind = kind;
            }
        })
    }

    pub fn delete_transaction(&self, id: &str) -> Result<WriteOutcome, StoreError> {
        self.remove::<Transaction>(id)
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

    fn income(account: &str, amount: f64) -> NewTransaction {
        NewTransaction {
            account_id: account.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
            description: "Invoice payment".to_string(),
            amount,
            kind: TransactionKind::Income,
        }
    }

    #[test]
    fn by_account_filter_matches_list_subset_in_order() {
        let store = store();
        let a = store.create_transaction(income("client-1", 100.0)).unwrap();
        store.create_transaction(income("client-2", 200.0)).unwrap();
        let c = store.create_transaction(income("client-1", 300.0)).unwrap();

        let all = store.list_transactions().unwrap();
        let filtered = store.transactions_by_account("client-1").unwrap();

        assert_eq!(filtered, vec![a, c]);
        let expected: Vec<_> = all
            .into_iter()
            .filter(|t| t.account_id == "client-1")
            .collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn kind_patch_round_trips() {
        let store = store();
        let created = store.create_transaction(income("client-1", 100.0)).unwrap();

        let outcome = store
            .update_transaction(
                &created.id,
                TransactionPatch {
                    kind: Some(TransactionKind::Expense),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(outcome.is_applied());
        assert_eq!(
            store.list_transactions().unwrap()[0].kind,
            TransactionKind::Expense
        );
    }
}
