//! Configuration module for SplitLedger
//!
//! - Path resolution (`SPLITLEDGER_DATA_DIR`, XDG config home)
//! - Persisted user settings: currency precision, rounding, tolerances

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
