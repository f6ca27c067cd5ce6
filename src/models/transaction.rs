//! Transaction model
//!
//! A transaction is an immutable income or expense record. Editing produces
//! a replacement record with the same id rather than mutating in place.

use chrono::{DateTime, Datelike, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction brings money in or takes it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown transaction type '{}', expected 'income' or 'expense'",
                other
            )),
        }
    }
}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount, never negative for records created through this crate
    pub amount: Money,

    /// Free-form category label used as a grouping key
    pub category: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// When the transaction happened, millisecond precision
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,

    /// Optional free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Replacement values for an edit; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct TransactionEdit {
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub kind: Option<TransactionType>,
    pub date: Option<DateTime<Utc>>,
    /// `Some(None)` clears the note
    pub note: Option<Option<String>>,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    pub fn new(
        kind: TransactionType,
        amount: Money,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            category: category.into(),
            kind,
            date: date.trunc_subsecs(3),
            note: None,
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.trim().is_empty() { None } else { Some(note) };
        self
    }

    /// Build the record that replaces this one after an edit
    pub fn edited(&self, edit: &TransactionEdit) -> Self {
        Self {
            id: self.id,
            amount: edit.amount.unwrap_or(self.amount),
            category: edit
                .category
                .clone()
                .unwrap_or_else(|| self.category.clone()),
            kind: edit.kind.unwrap_or(self.kind),
            date: edit.date.map(|d| d.trunc_subsecs(3)).unwrap_or(self.date),
            note: edit.note.clone().unwrap_or_else(|| self.note.clone()),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// The date as epoch milliseconds, the x value of chart series
    pub fn epoch_millis(&self) -> i64 {
        self.date.timestamp_millis()
    }

    /// Calendar date (UTC) used for month bucketing
    pub fn calendar_date(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Check whether the transaction falls in the given calendar month
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        let date = self.calendar_date();
        date.year() == year && date.month() == month
    }

    /// Validate a transaction before it is stored
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        if !self.amount.in_range() {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::BlankCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
    BlankCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative ({})", amount)
            }
            Self::AmountTooLarge(amount) => write!(f, "Amount is too large ({})", amount),
            Self::BlankCategory => write!(f, "Category cannot be blank"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn jan_15() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            TransactionType::Expense,
            Money::from_cents(5000),
            "Food",
            jan_15(),
        );
        assert!(txn.is_expense());
        assert!(!txn.is_income());
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.note, None);
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_date_truncated_to_millis() {
        let precise = jan_15() + chrono::Duration::nanoseconds(1_234_567);
        let txn = Transaction::new(TransactionType::Income, Money::zero(), "Salary", precise);
        assert_eq!(txn.epoch_millis(), jan_15().timestamp_millis() + 1);
        assert_eq!(txn.date.timestamp_subsec_nanos(), 1_000_000);
    }

    #[test]
    fn test_in_month() {
        let txn = Transaction::new(TransactionType::Expense, Money::zero(), "Bills", jan_15());
        assert!(txn.in_month(2025, 1));
        assert!(!txn.in_month(2025, 2));
        assert!(!txn.in_month(2024, 1));
    }

    #[test]
    fn test_edit_keeps_id() {
        let txn = Transaction::new(
            TransactionType::Expense,
            Money::from_cents(1000),
            "Food",
            jan_15(),
        )
        .with_note("lunch");

        let edit = TransactionEdit {
            amount: Some(Money::from_cents(1200)),
            note: Some(None),
            ..Default::default()
        };
        let edited = txn.edited(&edit);

        assert_eq!(edited.id, txn.id);
        assert_eq!(edited.amount, Money::from_cents(1200));
        assert_eq!(edited.category, "Food");
        assert_eq!(edited.note, None);
    }

    #[test]
    fn test_validation() {
        let mut txn = Transaction::new(
            TransactionType::Expense,
            Money::from_cents(-1),
            "Food",
            jan_15(),
        );
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NegativeAmount(Money::from_cents(-1)))
        );

        txn.amount = Money::from_cents(Money::MAX_CENTS + 1);
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::AmountTooLarge(txn.amount))
        );

        txn.amount = Money::from_cents(Money::MAX_CENTS);
        assert!(txn.validate().is_ok());

        txn.amount = Money::from_cents(1);
        txn.category = "  ".into();
        assert_eq!(txn.validate(), Err(TransactionValidationError::BlankCategory));
    }

    #[test]
    fn test_wire_shape() {
        let txn = Transaction::new(
            TransactionType::Income,
            Money::from_cents(250_000),
            "Salary",
            jan_15(),
        );
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["type"], "INCOME");
        assert_eq!(value["amount"], 2500.0);
        assert_eq!(value["date"], jan_15().timestamp_millis());
        assert!(value.get("note").is_none());
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!("EXPENSE".parse::<TransactionType>(), Ok(TransactionType::Expense));
        assert!("transfer".parse::<TransactionType>().is_err());
    }
}
