//! Export module for pocket-tracker
//!
//! Spreadsheet-friendly CSV export of transactions. Full-fidelity
//! backups live in [`crate::backup`].

pub mod csv;

pub use self::csv::export_transactions_csv;
