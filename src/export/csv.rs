//! CSV Export functionality
//!
//! Writes the transaction list in a spreadsheet-friendly layout. This is a
//! one-way export; restores go through the JSON backup.

use std::io::Write;

use serde::Serialize;

use crate::error::{PocketError, PocketResult};
use crate::models::Transaction;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Note")]
    note: &'a str,
}

/// Export transactions to CSV, one row per transaction in the given order
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> PocketResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for txn in transactions {
        let row = CsvRow {
            id: txn.id.as_uuid().to_string(),
            date: txn.date.format("%Y-%m-%d %H:%M:%S").to_string(),
            kind: txn.kind.to_string(),
            category: &txn.category,
            amount: txn.amount.to_string(),
            note: txn.note.as_deref().unwrap_or(""),
        };
        csv_writer
            .serialize(row)
            .map_err(|e| PocketError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PocketError::Export(e.to_string()))?;

    Ok(transactions.len())
}
