//! Configuration module for pocket-tracker
//!
//! - Path resolution (env override, platform config dir)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PocketPaths;
pub use settings::Settings;
