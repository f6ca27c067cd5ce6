//! Preference store
//!
//! The key-value style store holding the monthly budget, the selected
//! currency and the canonical transaction list. The core only talks to the
//! [`PreferenceStore`] trait; two implementations are provided, a JSON file
//! and an in-memory one.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::PocketError;
use crate::models::{CurrencyCode, Money, Transaction};

use super::file_io::{read_json, write_json_atomic};

/// Persistence collaborator used by the services
pub trait PreferenceStore {
    /// Monthly budget ceiling, zero until one is set
    fn budget(&self) -> Result<Money, PocketError>;

    /// Overwrite the monthly budget
    fn set_budget(&self, amount: Money) -> Result<(), PocketError>;

    /// The canonical transaction list, in stored order
    fn transactions(&self) -> Result<Vec<Transaction>, PocketError>;

    /// Replace the canonical transaction list wholesale
    fn save_transactions(&self, transactions: Vec<Transaction>) -> Result<(), PocketError>;

    fn selected_currency(&self) -> Result<CurrencyCode, PocketError>;

    fn set_selected_currency(&self, currency: CurrencyCode) -> Result<(), PocketError>;
}

/// Everything the store keeps, as laid out on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceData {
    #[serde(default)]
    pub monthly_budget: Money,

    #[serde(default)]
    pub selected_currency: CurrencyCode,

    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

fn read_guard(
    lock: &RwLock<PreferenceData>,
) -> Result<RwLockReadGuard<'_, PreferenceData>, PocketError> {
    lock.read()
        .map_err(|e| PocketError::Storage(format!("Failed to acquire read lock: {}", e)))
}

fn write_guard(
    lock: &RwLock<PreferenceData>,
) -> Result<RwLockWriteGuard<'_, PreferenceData>, PocketError> {
    lock.write()
        .map_err(|e| PocketError::Storage(format!("Failed to acquire write lock: {}", e)))
}

/// Preference store backed by a single JSON document
///
/// Every setter persists immediately.
pub struct JsonPreferenceStore {
    path: PathBuf,
    data: RwLock<PreferenceData>,
}

impl JsonPreferenceStore {
    /// Create a store for `path`; call [`load`](Self::load) to read it
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(PreferenceData::default()),
        }
    }

    /// Create a store and load whatever is on disk
    pub fn open(path: PathBuf) -> Result<Self, PocketError> {
        let store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load from disk, replacing the in-memory copy
    pub fn load(&self) -> Result<(), PocketError> {
        let file_data: PreferenceData = read_json(&self.path)?;
        debug!(
            path = %self.path.display(),
            transactions = file_data.transactions.len(),
            "loaded preferences"
        );
        *write_guard(&self.data)? = file_data;
        Ok(())
    }

    /// Persist the in-memory copy
    pub fn save(&self) -> Result<(), PocketError> {
        let data = read_guard(&self.data)?;
        write_json_atomic(&self.path, &*data)
    }

    fn update<F>(&self, apply: F) -> Result<(), PocketError>
    where
        F: FnOnce(&mut PreferenceData),
    {
        let previous = {
            let mut data = write_guard(&self.data)?;
            let previous = data.clone();
            apply(&mut data);
            previous
        };

        if let Err(e) = self.save() {
            // Keep memory and disk in agreement when the write fails
            *write_guard(&self.data)? = previous;
            return Err(e);
        }
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn budget(&self) -> Result<Money, PocketError> {
        Ok(read_guard(&self.data)?.monthly_budget)
    }

    fn set_budget(&self, amount: Money) -> Result<(), PocketError> {
        self.update(|data| data.monthly_budget = amount)?;
        info!(budget = %amount, "monthly budget updated");
        Ok(())
    }

    fn transactions(&self) -> Result<Vec<Transaction>, PocketError> {
        Ok(read_guard(&self.data)?.transactions.clone())
    }

    fn save_transactions(&self, transactions: Vec<Transaction>) -> Result<(), PocketError> {
        let count = transactions.len();
        self.update(|data| data.transactions = transactions)?;
        debug!(count, "transactions saved");
        Ok(())
    }

    fn selected_currency(&self) -> Result<CurrencyCode, PocketError> {
        Ok(read_guard(&self.data)?.selected_currency)
    }

    fn set_selected_currency(&self, currency: CurrencyCode) -> Result<(), PocketError> {
        self.update(|data| data.selected_currency = currency)
    }
}

/// In-memory preference store
#[derive(Default)]
pub struct MemoryPreferenceStore {
    data: RwLock<PreferenceData>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: PreferenceData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn budget(&self) -> Result<Money, PocketError> {
        Ok(read_guard(&self.data)?.monthly_budget)
    }

    fn set_budget(&self, amount: Money) -> Result<(), PocketError> {
        write_guard(&self.data)?.monthly_budget = amount;
        Ok(())
    }

    fn transactions(&self) -> Result<Vec<Transaction>, PocketError> {
        Ok(read_guard(&self.data)?.transactions.clone())
    }

    fn save_transactions(&self, transactions: Vec<Transaction>) -> Result<(), PocketError> {
        write_guard(&self.data)?.transactions = transactions;
        Ok(())
    }

    fn selected_currency(&self) -> Result<CurrencyCode, PocketError> {
        Ok(read_guard(&self.data)?.selected_currency)
    }

    fn set_selected_currency(&self, currency: CurrencyCode) -> Result<(), PocketError> {
        write_guard(&self.data)?.selected_currency = currency;
        Ok(())
    }
}
