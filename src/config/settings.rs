//! User settings for SplitLedger
//!
//! Currency precision, rounding, and the tolerances the ledger engine uses
//! when checking percentages and settling balances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::ledger::LedgerConfig;
use crate::models::money::MAX_DECIMAL_PLACES;
use crate::models::{Currency, Money};

/// User settings for SplitLedger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol, minor-unit precision and rounding mode
    #[serde(default)]
    pub currency: Currency,

    /// Percentage splits may miss 100 by at most this many points
    #[serde(default)]
    pub percent_epsilon: Decimal,

    /// Balances within this many minor units of zero count as settled
    #[serde(default)]
    pub settlement_tolerance: Money,

    /// Default log filter when SPLITLEDGER_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: Currency::default(),
            percent_epsilon: Decimal::ZERO,
            settlement_tolerance: Money::zero(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller asks
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Validate the settings and build the ledger engine configuration
    pub fn ledger_config(&self) -> Result<LedgerConfig, LedgerError> {
        if self.currency.decimal_places > MAX_DECIMAL_PLACES {
            return Err(LedgerError::Config(format!(
                "currency.decimal_places must be at most {}, got {}",
                MAX_DECIMAL_PLACES, self.currency.decimal_places
            )));
        }
        if self.percent_epsilon.is_sign_negative() && !self.percent_epsilon.is_zero() {
            return Err(LedgerError::Config(format!(
                "percent_epsilon cannot be negative, got {}",
                self.percent_epsilon
            )));
        }
        if self.percent_epsilon >= Decimal::ONE_HUNDRED {
            return Err(LedgerError::Config(format!(
                "percent_epsilon must be below 100, got {}",
                self.percent_epsilon
            )));
        }
        if self.settlement_tolerance.is_negative() {
            return Err(LedgerError::Config(format!(
                "settlement_tolerance cannot be negative, got {}",
                self.settlement_tolerance
            )));
        }

        Ok(LedgerConfig {
            currency: self.currency.clone(),
            percent_epsilon: self.percent_epsilon,
            settlement_tolerance: self.settlement_tolerance,
        })
    }
}
