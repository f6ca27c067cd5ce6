//! Chart aggregation
//!
//! Groups transactions by category for the breakdown chart and by date for
//! the income and expense series. Both are pure: the same input always gives
//! the same output, and empty input gives empty output.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::{category_color, Money, Transaction, TransactionType};

/// Which transactions a category breakdown covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodScope {
    /// Everything the caller passes in
    #[default]
    AllTime,
    /// One calendar month (UTC)
    Month { year: i32, month: u32 },
    /// Inclusive calendar date range (UTC)
    Range { start: NaiveDate, end: NaiveDate },
}

impl PeriodScope {
    pub fn contains(&self, txn: &Transaction) -> bool {
        match *self {
            Self::AllTime => true,
            Self::Month { year, month } => txn.in_month(year, month),
            Self::Range { start, end } => {
                let date = txn.calendar_date();
                date >= start && date <= end
            }
        }
    }
}

/// Total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    /// Percentage of the grand total across all categories
    pub share: f64,
    /// Hex color for the category, grey for unknown labels
    pub color: &'static str,
}

/// One point of a date series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesPoint {
    /// Epoch milliseconds
    pub date: i64,
    pub total: Money,
}

/// Group transactions in scope by category, in first-seen order
///
/// Income and expense are grouped together.
pub fn by_category(transactions: &[Transaction], scope: &PeriodScope) -> Vec<CategoryTotal> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, Money> = HashMap::new();

    for txn in transactions.iter().filter(|t| scope.contains(t)) {
        let category = txn.category.as_str();
        let entry = totals.entry(category).or_insert_with(|| {
            order.push(category);
            Money::zero()
        });
        *entry += txn.amount;
    }

    let grand_total: Money = totals.values().sum();

    order
        .into_iter()
        .map(|category| {
            let total = totals.get(category).copied().unwrap_or_default();
            let share = if grand_total.is_zero() {
                0.0
            } else {
                total.cents() as f64 / grand_total.cents() as f64 * 100.0
            };
            CategoryTotal {
                category: category.to_string(),
                total,
                share,
                color: category_color(category),
            }
        })
        .collect()
}

/// Per-date totals for one transaction type, ascending by date
///
/// Only transactions with the identical date value are merged.
pub fn by_series(transactions: &[Transaction], kind: TransactionType) -> Vec<SeriesPoint> {
    let mut totals: BTreeMap<i64, Money> = BTreeMap::new();

    for txn in transactions.iter().filter(|t| t.kind == kind) {
        *totals.entry(txn.epoch_millis()).or_default() += txn.amount;
    }

    totals
        .into_iter()
        .map(|(date, total)| SeriesPoint { date, total })
        .collect()
}

/// Headline figures of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardSummary {
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expense, may be negative
    pub balance: Money,
    pub transaction_count: usize,
}

impl DashboardSummary {
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut summary = Self::default();
        for txn in transactions {
            match txn.kind {
                TransactionType::Income => summary.total_income += txn.amount,
                TransactionType::Expense => summary.total_expense += txn.amount,
            }
            summary.transaction_count += 1;
        }
        summary.balance = summary.total_income - summary.total_expense;
        summary
    }
}
