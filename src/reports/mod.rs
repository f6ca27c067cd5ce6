//! Reports module for pocket-tracker
//!
//! Pure computations over transactions and the budget: usage status with
//! alert tiers, category breakdowns and date series for charts.

pub mod aggregate;
pub mod budget_status;

pub use aggregate::{by_category, by_series, CategoryTotal, DashboardSummary, PeriodScope, SeriesPoint};
pub use budget_status::{analyze, monthly_expenses, BudgetStatus, BudgetTier};
