//! Backup serialization
//!
//! A backup is a JSON array of transaction objects:
//!
//! ```json
//! [
//!   {
//!     "id": "550e8400-e29b-41d4-a716-446655440000",
//!     "amount": 12.5,
//!     "category": "Food",
//!     "type": "EXPENSE",
//!     "date": 1735732800000,
//!     "note": "lunch"
//!   }
//! ]
//! ```
//!
//! `note` is optional; every other key is required.

use std::collections::HashSet;

use crate::error::{PocketError, PocketResult};
use crate::models::Transaction;

/// Serialize a transaction list to backup text
///
/// Refuses amounts beyond [`Money::MAX_CENTS`](crate::models::Money::MAX_CENTS), which a JSON number could
/// not carry back exactly.
pub fn export(transactions: &[Transaction]) -> PocketResult<String> {
    if let Some((index, txn)) = transactions
        .iter()
        .enumerate()
        .find(|(_, t)| !t.amount.in_range())
    {
        return Err(PocketError::Export(format!(
            "entry {} has an amount too large to back up ({})",
            index, txn.amount
        )));
    }

    serde_json::to_string_pretty(transactions)
        .map_err(|e| PocketError::Export(format!("Failed to serialize transactions: {}", e)))
}

/// Parse backup text back into a transaction list
///
/// Fails with [`PocketError::CorruptBackup`] if the text is not JSON, is not
/// an array, or any entry is missing a required key, has one of the wrong
/// shape, carries a negative amount, or repeats an id.
pub fn import(blob: &str) -> PocketResult<Vec<Transaction>> {
    let transactions: Vec<Transaction> =
        serde_json::from_str(blob).map_err(|e| PocketError::CorruptBackup(e.to_string()))?;

    let mut seen = HashSet::with_capacity(transactions.len());
    for (index, txn) in transactions.iter().enumerate() {
        if txn.amount.is_negative() {
            return Err(PocketError::CorruptBackup(format!(
                "entry {} has a negative amount ({})",
                index, txn.amount
            )));
        }
        if !seen.insert(txn.id) {
            return Err(PocketError::CorruptBackup(format!(
                "entry {} repeats id {}",
                index,
                txn.id.as_uuid()
            )));
        }
    }

    Ok(transactions)
}

/// Like [`import`], for raw bytes read from a backup target
pub fn import_bytes(bytes: &[u8]) -> PocketResult<Vec<Transaction>> {
    let blob = std::str::from_utf8(bytes)
        .map_err(|e| PocketError::CorruptBackup(format!("backup is not UTF-8: {}", e)))?;
    import(blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use chrono::{TimeZone, Utc};

    fn sample_list() -> Vec<Transaction> {
        let may = |day, hour| Utc.with_ymd_and_hms(2025, 5, day, hour, 15, 0).unwrap();
        vec![
            Transaction::new(TransactionType::Income, Money::from_cents(320_000), "Salary", may(1, 9)),
            Transaction::new(TransactionType::Expense, Money::from_cents(1999), "Food", may(2, 12))
                .with_note("groceries"),
            Transaction::new(TransactionType::Expense, Money::from_cents(5), "Gifts", may(2, 12)),
            Transaction::new(TransactionType::Expense, Money::zero(), "Other", may(3, 18)),
        ]
    }

    #[test]
    fn test_round_trip() {
        let original = sample_list();
        let blob = export(&original).unwrap();
        let restored = import(&blob).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_round_trip_at_amount_limit() {
        let date = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
        let amounts = [Money::MAX_CENTS, Money::MAX_CENTS - 1, 999_999_999_999_993];
        let original: Vec<Transaction> = amounts
            .into_iter()
            .map(|cents| {
                Transaction::new(TransactionType::Income, Money::from_cents(cents), "Bonus", date)
            })
            .collect();

        let restored = import(&export(&original).unwrap()).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_amount_beyond_limit() {
        let date = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
        let huge = Transaction::new(
            TransactionType::Income,
            Money::from_cents(9_007_199_254_740_993),
            "Bonus",
            date,
        );
        assert!(matches!(export(&[huge]), Err(PocketError::Export(_))));

        let blob = r#"[{"id": "550e8400-e29b-41d4-a716-446655440000",
            "amount": 90071992547409.93, "category": "Bonus", "type": "INCOME", "date": 0}]"#;
        assert!(import(blob).unwrap_err().is_corrupt_backup());
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(export(&[]).unwrap(), "[]");
        assert!(import("[]").unwrap().is_empty());
        assert!(import("  [ ]\n").unwrap().is_empty());
    }

    #[test]
    fn test_type_literals() {
        let blob = export(&sample_list()).unwrap();
        assert!(blob.contains("\"type\": \"INCOME\""));
        assert!(blob.contains("\"type\": \"EXPENSE\""));
    }

    #[test]
    fn test_accepts_hand_written_entry() {
        let blob = r#"[
            {"id": "550e8400-e29b-41d4-a716-446655440000", "amount": 42,
             "category": "Bills", "type": "EXPENSE", "date": 1735732800000, "note": null}
        ]"#;
        let list = import(blob).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].amount, Money::from_cents(4200));
        assert_eq!(list[0].epoch_millis(), 1_735_732_800_000);
        assert_eq!(list[0].note, None);
    }

    #[test]
    fn test_truncated_blob_is_corrupt() {
        let blob = export(&sample_list()).unwrap();
        let truncated = &blob[..blob.len() / 2];
        assert!(import(truncated).unwrap_err().is_corrupt_backup());
    }

    #[test]
    fn test_not_an_array_is_corrupt() {
        assert!(import("{}").unwrap_err().is_corrupt_backup());
        assert!(import("null").unwrap_err().is_corrupt_backup());
        assert!(import("").unwrap_err().is_corrupt_backup());
    }

    #[test]
    fn test_missing_or_misshapen_fields_are_corrupt() {
        let missing_type = r#"[{"id": "550e8400-e29b-41d4-a716-446655440000",
            "amount": 1, "category": "Food", "date": 0}]"#;
        assert!(import(missing_type).unwrap_err().is_corrupt_backup());

        let bad_type = r#"[{"id": "550e8400-e29b-41d4-a716-446655440000",
            "amount": 1, "category": "Food", "type": "TRANSFER", "date": 0}]"#;
        assert!(import(bad_type).unwrap_err().is_corrupt_backup());

        let string_amount = r#"[{"id": "550e8400-e29b-41d4-a716-446655440000",
            "amount": "1", "category": "Food", "type": "EXPENSE", "date": 0}]"#;
        assert!(import(string_amount).unwrap_err().is_corrupt_backup());

        let string_date = r#"[{"id": "550e8400-e29b-41d4-a716-446655440000",
            "amount": 1, "category": "Food", "type": "EXPENSE", "date": "2025-01-01"}]"#;
        assert!(import(string_date).unwrap_err().is_corrupt_backup());
    }

    #[test]
    fn test_negative_amount_is_corrupt() {
        let blob = r#"[{"id": "550e8400-e29b-41d4-a716-446655440000",
            "amount": -3.5, "category": "Food", "type": "EXPENSE", "date": 0}]"#;
        assert!(import(blob).unwrap_err().is_corrupt_backup());
    }

    #[test]
    fn test_duplicate_ids_are_corrupt() {
        let entry = r#"{"id": "550e8400-e29b-41d4-a716-446655440000",
            "amount": 1, "category": "Food", "type": "EXPENSE", "date": 0}"#;
        let blob = format!("[{},{}]", entry, entry);
        assert!(import(&blob).unwrap_err().is_corrupt_backup());
    }

    #[test]
    fn test_import_bytes_rejects_invalid_utf8() {
        assert!(import_bytes(&[0xff, 0xfe]).unwrap_err().is_corrupt_backup());
        assert!(import_bytes(b"[]").unwrap().is_empty());
    }
}
