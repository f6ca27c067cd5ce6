//! Core data models for pocket-tracker
//!
//! Transactions, amounts and the small static tables (category colors,
//! display currencies) the rest of the crate works with.

pub mod category;
pub mod currency;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{category_color, KnownCategory, FALLBACK_COLOR};
pub use currency::CurrencyCode;
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionEdit, TransactionType, TransactionValidationError};
