//! User settings for the finance tracker
//!
//! Manages the currency symbol, timestamp format, near-limit warning
//! threshold and notification preferences.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::alerts::AlertEngine;
use crate::error::FinanceError;

/// Alert delivery preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Whether alerts are delivered to the notification channel
    #[serde(default)]
    pub enabled: bool,

    /// Who the alerts are addressed to (e.g. an email address)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

/// User settings for the finance tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Timestamp format for transaction listings (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Warn once spending reaches this percentage of a budget (1-99)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_threshold: Option<u8>,

    #[serde(default)]
    pub notifications: NotificationSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            warning_threshold: None,
            notifications: NotificationSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FinanceError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinanceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), FinanceError> {
        if self.currency_symbol.chars().any(char::is_control) {
            return Err(FinanceError::Config(
                "Currency symbol cannot contain control characters".into(),
            ));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(FinanceError::Config(format!(
                "Invalid date format '{}'",
                self.date_format
            )));
        }
        self.alert_engine().map(|_| ())
    }

    /// Build the alert engine these settings describe
    pub fn alert_engine(&self) -> Result<AlertEngine, FinanceError> {
        match self.warning_threshold {
            Some(percent) => AlertEngine::with_warning_threshold(percent),
            None => Ok(AlertEngine::new()),
        }
    }
}
