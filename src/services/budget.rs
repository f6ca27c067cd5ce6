//! Budget service
//!
//! Reads and updates the monthly budget and computes its status for a month
//! from the stored transactions.

use tracing::{info, warn};

use crate::error::{PocketError, PocketResult};
use crate::models::Money;
use crate::reports::{analyze, monthly_expenses, BudgetStatus};
use crate::storage::PreferenceStore;

/// Service for budget management
pub struct BudgetService<'a> {
    store: &'a dyn PreferenceStore,
}

impl<'a> BudgetService<'a> {
    pub fn new(store: &'a dyn PreferenceStore) -> Self {
        Self { store }
    }

    /// Current monthly budget, zero if never set
    pub fn budget(&self) -> PocketResult<Money> {
        self.store.budget()
    }

    /// Overwrite the monthly budget
    ///
    /// Negative amounts are refused here, before they reach the store.
    pub fn set_budget(&self, amount: Money) -> PocketResult<Money> {
        if amount.is_negative() {
            warn!(amount = %amount, "refusing negative budget");
            return Err(PocketError::Validation("Budget cannot be negative".into()));
        }
        if !amount.in_range() {
            warn!(amount = %amount, "refusing oversized budget");
            return Err(PocketError::Validation(format!("Budget is too large: {}", amount)));
        }
        self.store.set_budget(amount)?;
        info!(amount = %amount, "budget set");
        Ok(amount)
    }

    /// Budget status for a calendar month
    pub fn status_for(&self, year: i32, month: u32) -> PocketResult<BudgetStatus> {
        let budget = self.store.budget()?;
        let transactions = self.store.transactions()?;
        let spent = monthly_expenses(&transactions, year, month);
        Ok(analyze(budget, spent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionType};
    use crate::reports::BudgetTier;
    use crate::storage::MemoryPreferenceStore;
    use chrono::{TimeZone, Utc};

    fn expense(units: i64, month: u32) -> Transaction {
        Transaction::new(
            TransactionType::Expense,
            Money::from_cents(units * 100),
            "Food",
            Utc.with_ymd_and_hms(2025, month, 10, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_defaults_to_no_budget() {
        let store = MemoryPreferenceStore::new();
        let service = BudgetService::new(&store);

        let status = service.status_for(2025, 1).unwrap();
        assert_eq!(status.tier, BudgetTier::NoBudget);
        assert_eq!(service.budget().unwrap(), Money::zero());
    }

    #[test]
    fn test_set_budget_rejects_negative() {
        let store = MemoryPreferenceStore::new();
        let service = BudgetService::new(&store);

        service.set_budget(Money::from_cents(20_000)).unwrap();
        assert!(service.set_budget(Money::from_cents(-1)).unwrap_err().is_validation());
        assert!(service
            .set_budget(Money::from_cents(Money::MAX_CENTS + 1))
            .unwrap_err()
            .is_validation());
        assert_eq!(service.budget().unwrap(), Money::from_cents(20_000));
    }

    #[test]
    fn test_status_counts_only_that_month() {
        let store = MemoryPreferenceStore::new();
        store
            .save_transactions(vec![expense(80, 3), expense(500, 2)])
            .unwrap();
        let service = BudgetService::new(&store);
        service.set_budget(Money::from_cents(10_000)).unwrap();

        let march = service.status_for(2025, 3).unwrap();
        assert_eq!(march.percent_used, 80);
        assert_eq!(march.tier, BudgetTier::Warning);
        assert_eq!(march.remaining, Money::from_cents(2_000));

        let feb = service.status_for(2025, 2).unwrap();
        assert_eq!(feb.tier, BudgetTier::Critical);
        assert_eq!(feb.remaining, Money::zero());
    }
}
