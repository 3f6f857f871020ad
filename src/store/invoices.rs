use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::error::{StoreError, WriteOutcome};
use crate::model::{Invoice, InvoiceStatus};
use crate::storage::keys;
use crate::store::{Record, Store};

impl Record for Invoice {
    const KEY: &'static str = keys::INVOICES;
    const ID_PREFIX: &'static str = "inv";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewInvoice {
    pub account_id: String,
    pub number: String,
    pub issue_date: NaiveDate,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoicePatch {
    pub account_id: Option<String>,
    pub number: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub amount: Option<f64>,
    pub status: Option<InvoiceStatus>,
    pub description: Option<String>,
}

impl Store {
    pub fn list_invoices(&self) -> Result<Vec<Invoice>, StoreError> {
        self.load()
    }

    /// Invoices whose `account_id` matches, in the same relative order as
    /// `list_invoices`. Plain O(n) scan; the collections carry no indexes.
    pub fn invoices_by_account(&self, account_id: &str) -> Result<Vec<Invoice>, StoreError> {
        Ok(self
            .list_invoices()?
            .into_iter()
            .filter(|invoice| invoice.account_id == account_id)
            .collect())
    }

    pub fn create_invoice(&self, new: NewInvoice) -> Result<Invoice, StoreError> {
        let invoice = Invoice {
            id: self.fresh_id(Invoice::ID_PREFIX),
            account_id: new.account_id,
            number: new.number,
            issue_date: new.issue_date,
            amount: new.amount,
            status: new.status,
            description: new.description,
        };
        let invoice = self.insert(invoice)?;
        info!(id = %invoice.id, number = %invoice.number, "invoice created");
        Ok(invoice)
    }

    pub fn update_invoice(
        &self,
        id: &str,
        patch: InvoicePatch,
    ) -> Result<WriteOutcome, StoreError> {
        self.modify::<Invoice>(id, |row| {
            if let Some(account_id) = patch.account_id {
                row.account_id = account_id;
            }
            if let Some(number) = patch.number {
                row.number = number;
            }
            if let Some(issue_date) = patch.issue_date {
                row.issue_date = issue_date;
            }
            if let Some(amount) = patch.amount {
                row.amount = amount;
            }
            if let Some(status) = patch.status {
                row.status = status;
            }
            if let Some(description) = patch.description {
                row.description = description;
            }
        })
    }

    pub fn delete_invoice(&self, id: &str) -> Result<WriteOutcome, StoreError> {
        self.remove::<Invoice>(id)
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

    fn new_invoice(account: &str, number: &str) -> NewInvoice {
        NewInvoice {
            account_id: account.to_string(),
            number: number.to_string(),
            issue_date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
            amount: 4_500.0,
            status: InvoiceStatus::Pending,
            description: "Professional services".to_string(),
        }
    }

    #[test]
    fn create_then_list_round_trips_all_fields() {
        let store = store();
        let created = store.create_invoice(new_invoice("client-3", "F-000042")).unwrap();

        let listed = store.list_invoices().unwrap();
        assert_eq!(listed, vec![created.clone()]);
        assert_eq!(created.account_id, "client-3");
        assert_eq!(created.number, "F-000042");
        assert!(created.id.starts_with("inv-"));
    }

    #[test]
    fn update_changes_only_the_given_field() {
        let store = store();
        let a = store.create_invoice(new_invoice("client-1", "F-000001")).unwrap();
        let b = store.create_invoice(new_invoice("client-2", "F-000002")).unwrap();

        let outcome = store
            .update_invoice(
                &a.id,
                InvoicePatch {
                    status: Some(InvoiceStatus::Paid),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(outcome.is_applied());

        let listed = store.list_invoices().unwrap();
        assert_eq!(listed[0].status, InvoiceStatus::Paid);
        // everything else untouched
        assert_eq!(listed[0].amount, a.amount);
        assert_eq!(listed[0].number, a.number);
        assert_eq!(listed[1], b);
    }

    #[test]
    fn update_of_missing_id_reports_not_found() {
        let store = store();
        store.create_invoice(new_invoice("client-1", "F-000001")).unwrap();

        let outcome = store
            .update_invoice("inv-nope", InvoicePatch::default())
            .unwrap();
        assert_eq!(outcome, WriteOutcome::NotFound);
    }

    #[test]
    fn second_delete_reports_not_found_and_leaves_collection_unchanged() {
        let store = store();
        let a = store.create_invoice(new_invoice("client-1", "F-000001")).unwrap();
        let b = store.create_invoice(new_invoice("client-2", "F-000002")).unwrap();

        assert!(store.delete_invoice(&a.id).unwrap().is_applied());
        let after_first = store.list_invoices().unwrap();

        assert_eq!(store.delete_invoice(&a.id).unwrap(), WriteOutcome::NotFound);
        assert_eq!(store.list_invoices().unwrap(), after_first);
        assert_eq!(after_first, vec![b]);
    }

    #[test]
    fn by_account_filter_preserves_relative_order() {
        let store = store();
        let a = store.create_invoice(new_invoice("client-1", "F-000001")).unwrap();
        store.create_invoice(new_invoice("client-2", "F-000002")).unwrap();
        let c = store.create_invoice(new_invoice("client-1", "F-000003")).unwrap();

        let filtered = store.invoices_by_account("client-1").unwrap();
        assert_eq!(filtered, vec![a, c]);
    }
}
