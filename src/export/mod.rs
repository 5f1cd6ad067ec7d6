//! Export of settlement reports
//!
//! - CSV: flat balance and transfer rows (spreadsheet-compatible)
//! - JSON: machine-readable, with schema version
//! - YAML: human-readable, with a comment header

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_settlement_csv;
pub use json::{export_settlement_json, SettlementExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_settlement_yaml;
