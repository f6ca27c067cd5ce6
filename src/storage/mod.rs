//! Storage layer for pocket-tracker
//!
//! JSON file storage with atomic writes behind the [`PreferenceStore`]
//! trait, which is all the services depend on.

pub mod file_io;
pub mod preferences;

pub use file_io::{read_json, write_bytes_atomic, write_json_atomic};
pub use preferences::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceData, PreferenceStore};
