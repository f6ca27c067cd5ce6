//! Transaction service
//!
//! Add, edit, delete and list transactions on top of the preference store.
//! Every change rewrites the full canonical list through the store.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::{PocketError, PocketResult};
use crate::models::{Money, Transaction, TransactionEdit, TransactionType};
use crate::reports::PeriodScope;
use crate::storage::PreferenceStore;

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a dyn PreferenceStore,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionType,
    pub amount: Money,
    pub category: String,
    pub date: DateTime<Utc>,
    pub note: Option<String>,
}

impl<'a> TransactionService<'a> {
    pub fn new(store: &'a dyn PreferenceStore) -> Self {
        Self { store }
    }

    /// Create and store a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> PocketResult<Transaction> {
        let mut txn = Transaction::new(input.kind, input.amount, input.category.trim(), input.date);
        if let Some(note) = input.note {
            txn = txn.with_note(note);
        }
        txn.validate()
            .map_err(|e| PocketError::Validation(e.to_string()))?;

        let mut transactions = self.store.transactions()?;
        transactions.push(txn.clone());
        self.store.save_transactions(transactions)?;

        info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "transaction created");
        Ok(txn)
    }

    /// All transactions, newest first
    pub fn list(&self) -> PocketResult<Vec<Transaction>> {
        let mut transactions = self.store.transactions()?;
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Transactions within a period, newest first
    pub fn list_in(&self, scope: &PeriodScope) -> PocketResult<Vec<Transaction>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|t| scope.contains(t))
            .collect())
    }

    /// Find a transaction by full id, short id (`txn-xxxxxxxx`) or id prefix
    pub fn find(&self, reference: &str) -> PocketResult<Transaction> {
        let transactions = self.store.transactions()?;
        let index = find_index(&transactions, reference)?;
        Ok(transactions[index].clone())
    }

    /// Replace a transaction with an edited copy
    pub fn update(&self, reference: &str, edit: &TransactionEdit) -> PocketResult<Transaction> {
        let mut transactions = self.store.transactions()?;
        let index = find_index(&transactions, reference)?;

        let mut edit = edit.clone();
        if let Some(category) = edit.category.take() {
            edit.category = Some(category.trim().to_string());
        }
        let updated = transactions[index].edited(&edit);
        updated
            .validate()
            .map_err(|e| PocketError::Validation(e.to_string()))?;

        transactions[index] = updated.clone();
        self.store.save_transactions(transactions)?;

        info!(id = %updated.id, "transaction updated");
        Ok(updated)
    }

    /// Remove a transaction, returning it
    pub fn delete(&self, reference: &str) -> PocketResult<Transaction> {
        let mut transactions = self.store.transactions()?;
        let index = find_index(&transactions, reference)?;
        let removed = transactions.remove(index);
        self.store.save_transactions(transactions)?;

        info!(id = %removed.id, "transaction deleted");
        Ok(removed)
    }
}

fn find_index(transactions: &[Transaction], reference: &str) -> PocketResult<usize> {
    let matches: Vec<usize> = transactions
        .iter()
        .enumerate()
        .filter(|(_, t)| t.id.matches(reference))
        .map(|(i, _)| i)
        .collect();

    match matches.as_slice() {
        [index] => Ok(*index),
        [] => Err(PocketError::transaction_not_found(reference)),
        many => {
            debug!(reference, candidates = many.len(), "ambiguous transaction reference");
            Err(PocketError::Validation(format!(
                "'{}' matches {} transactions, use more of the id",
                reference,
                many.len()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryPreferenceStore;
    use chrono::TimeZone;

    fn input(kind: TransactionType, cents: i64, category: &str, day: u32) -> CreateTransactionInput {
        CreateTransactionInput {
            kind,
            amount: Money::from_cents(cents),
            category: category.into(),
            date: Utc.with_ymd_and_hms(2025, 7, day, 10, 0, 0).unwrap(),
            note: None,
        }
    }

    #[test]
    fn test_create_and_list_newest_first() {
        let store = MemoryPreferenceStore::new();
        let service = TransactionService::new(&store);

        service.create(input(TransactionType::Expense, 500, "Food", 1)).unwrap();
        service.create(input(TransactionType::Income, 90_000, "Salary", 3)).unwrap();
        service.create(input(TransactionType::Expense, 1200, " Bills ", 2)).unwrap();

        let list = service.list().unwrap();
        let categories: Vec<&str> = list.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(categories, vec!["Salary", "Bills", "Food"]);
    }

    #[test]
    fn test_create_rejects_invalid() {
        let store = MemoryPreferenceStore::new();
        let service = TransactionService::new(&store);

        let err = service
            .create(input(TransactionType::Expense, -1, "Food", 1))
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .create(input(TransactionType::Expense, 1, "   ", 1))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.transactions().unwrap().is_empty());
    }

    #[test]
    fn test_update_by_short_id() {
        let store = MemoryPreferenceStore::new();
        let service = TransactionService::new(&store);
        let txn = service.create(input(TransactionType::Expense, 500, "Food", 1)).unwrap();

        let edit = TransactionEdit {
            amount: Some(Money::from_cents(750)),
            category: Some("Transport".into()),
            ..Default::default()
        };
        let updated = service.update(&txn.id.short(), &edit).unwrap();

        assert_eq!(updated.id, txn.id);
        assert_eq!(service.find(&txn.id.to_string()).unwrap(), updated);
        assert_eq!(store.transactions().unwrap().len(), 1);
    }

    #[test]
    fn test_update_rejects_negative_amount() {
        let store = MemoryPreferenceStore::new();
        let service = TransactionService::new(&store);
        let txn = service.create(input(TransactionType::Expense, 500, "Food", 1)).unwrap();

        let edit = TransactionEdit {
            amount: Some(Money::from_cents(-5)),
            ..Default::default()
        };
        assert!(service.update(&txn.id.short(), &edit).unwrap_err().is_validation());
        assert_eq!(service.find(&txn.id.short()).unwrap(), txn);
    }

    #[test]
    fn test_delete() {
        let store = MemoryPreferenceStore::new();
        let service = TransactionService::new(&store);
        let keep = service.create(input(TransactionType::Expense, 500, "Food", 1)).unwrap();
        let gone = service.create(input(TransactionType::Expense, 300, "Food", 2)).unwrap();

        let removed = service.delete(&gone.id.as_uuid().to_string()).unwrap();
        assert_eq!(removed, gone);
        assert_eq!(service.list().unwrap(), vec![keep]);
        assert!(service.delete(&gone.id.short()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_in_scope() {
        let store = MemoryPreferenceStore::new();
        let service = TransactionService::new(&store);
        service.create(input(TransactionType::Expense, 500, "Food", 1)).unwrap();

        let july = service
            .list_in(&PeriodScope::Month { year: 2025, month: 7 })
            .unwrap();
        assert_eq!(july.len(), 1);
        let august = service
            .list_in(&PeriodScope::Month { year: 2025, month: 8 })
            .unwrap();
        assert!(august.is_empty());
    }
}
