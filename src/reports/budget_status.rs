//! Budget usage status
//!
//! Turns a monthly budget and the amount spent against it into a percentage,
//! a remaining figure and an alert tier. Never fails: negative inputs are
//! read as zero so a bad value can't blank the budget screen.

use std::fmt;

use crate::models::{Money, Transaction};

/// Percentage at or above which spending is critical
pub const CRITICAL_PERCENT: u8 = 90;

/// Percentage at or above which spending is a warning
pub const WARNING_PERCENT: u8 = 75;

/// Budget health classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetTier {
    /// No budget has been set (budget is zero)
    NoBudget,
    Healthy,
    Warning,
    Critical,
}

impl BudgetTier {
    /// The alert shown for this tier
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoBudget => "No budget set. Please set a monthly budget.",
            Self::Critical => "Warning: You've used over 90% of your budget!",
            Self::Warning => "You're nearing your budget limit. Be cautious!",
            Self::Healthy => "Great job! You're spending wisely.",
        }
    }

    /// Whether the alert should be drawn as a warning rather than a check mark
    pub fn is_alert(&self) -> bool {
        !matches!(self, Self::Healthy)
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBudget => write!(f, "No budget"),
            Self::Healthy => write!(f, "Healthy"),
            Self::Warning => write!(f, "Warning"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// Derived view of a budget against spending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    /// Budget ceiling after clamping
    pub budget: Money,
    /// Spending after clamping
    pub spent: Money,
    /// Share of the budget used, 0..=100
    pub percent_used: u8,
    /// `max(budget - spent, 0)`
    pub remaining: Money,
    pub tier: BudgetTier,
}

impl BudgetStatus {
    pub fn message(&self) -> &'static str {
        self.tier.message()
    }

    /// Status line under the progress indicator
    pub fn usage_line(&self) -> String {
        format!("You've used {}% of your budget", self.percent_used)
    }

    /// Amount spent beyond the budget, zero when within it
    pub fn overspent(&self) -> Money {
        if self.budget.is_zero() {
            return Money::zero();
        }
        self.spent.saturating_remaining(self.budget)
    }
}

/// Analyze a budget against what has been spent
pub fn analyze(budget: Money, spent: Money) -> BudgetStatus {
    let budget = budget.non_negative();
    let spent = spent.non_negative();

    let percent_used = if budget.is_zero() {
        0
    } else {
        // round-half-up of spent * 100 / budget, in integers
        let spent = i128::from(spent.cents());
        let budget = i128::from(budget.cents());
        let percent = (200 * spent + budget) / (2 * budget);
        percent.clamp(0, 100) as u8
    };

    let tier = if budget.is_zero() {
        BudgetTier::NoBudget
    } else if percent_used >= CRITICAL_PERCENT {
        BudgetTier::Critical
    } else if percent_used >= WARNING_PERCENT {
        BudgetTier::Warning
    } else {
        BudgetTier::Healthy
    };

    BudgetStatus {
        budget,
        spent,
        percent_used,
        remaining: budget.saturating_remaining(spent),
        tier,
    }
}

/// Sum of expense amounts dated in the given calendar month
///
/// This is the figure callers pass to [`analyze`] as `spent`.
pub fn monthly_expenses(transactions: &[Transaction], year: i32, month: u32) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.in_month(year, month))
        .map(|t| t.amount.non_negative())
        .sum()
}
