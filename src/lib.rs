//! pocket-tracker - a personal income and expense tracker
//!
//! This library provides the core of the `pocket` command line tool: budget
//! analysis, chart aggregation of transactions, and JSON backups of the
//! transaction list.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, categories, currencies)
//! - `reports`: Budget status and chart aggregation, pure functions
//! - `storage`: Preference store (budget, currency, transactions)
//! - `backup`: Backup codec and backup targets
//! - `export`: CSV export
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use pocket::models::Money;
//! use pocket::reports::{analyze, BudgetTier};
//!
//! let status = analyze(Money::from_cents(10_000), Money::from_cents(8_000));
//! assert_eq!(status.percent_used, 80);
//! assert_eq!(status.tier, BudgetTier::Warning);
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod log;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PocketError, PocketResult};
