//! User settings for SpendWise
//!
//! Display preferences, the default expense category, logging level and
//! whether mutations are audited.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::SpendPaths;
use crate::error::SpendError;
use crate::models::Category;
use crate::storage::{read_text, write_text_atomic};

/// User settings for SpendWise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Category used when `expense add` is given none
    #[serde(default)]
    pub default_category: Category,

    /// Diagnostic log filter (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether ledger mutations are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_category: Category::default(),
            log_level: default_log_level(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    ///
    /// Defaults are not saved until the caller decides to persist them.
    /// A date format chrono cannot render is replaced with the default.
    pub fn load_or_create(paths: &SpendPaths) -> Result<Self, SpendError> {
        let mut settings: Settings = match read_text(paths.settings_file()) {
            Ok(Some(raw)) => serde_json::from_str(&raw)
                .map_err(|e| SpendError::Config(format!("Failed to load settings: {}", e)))?,
            Ok(None) => Settings::default(),
            Err(e) => return Err(SpendError::Config(format!("Failed to load settings: {}", e))),
        };

        if !is_renderable_date_format(&settings.date_format) {
            tracing::warn!(
                date_format = %settings.date_format,
                "Unsupported date format in settings, using default"
            );
            settings.date_format = default_date_format();
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendPaths) -> Result<(), SpendError> {
        paths.ensure_directories()?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SpendError::Config(format!("Failed to serialize settings: {}", e)))?;
        write_text_atomic(paths.settings_file(), &json)
    }
}

fn is_renderable_date_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
