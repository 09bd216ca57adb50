//! Append-only alert log notifier
//!
//! Each delivered alert is written as a single JSON line and flushed
//! immediately, addressed to the configured recipient.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Notifier;
use crate::error::{FinanceError, FinanceResult};

/// One line of the alert log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertLogEntry {
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    pub message: String,
}

/// Delivers alerts by appending them to a JSONL file
pub struct AlertLogNotifier {
    log_path: PathBuf,
    recipient: Option<String>,
}

impl AlertLogNotifier {
    pub fn new(log_path: PathBuf, recipient: Option<String>) -> Self {
        Self {
            log_path,
            recipient,
        }
    }
}

impl Notifier for AlertLogNotifier {
    fn name(&self) -> &str {
        "alert-log"
    }

    fn send(&self, message: &str) -> FinanceResult<()> {
        let entry = AlertLogEntry {
            timestamp: Utc::now(),
            recipient: self.recipient.clone(),
            message: message.to_string(),
        };

        let json = serde_json::to_string(&entry)
            .map_err(|e| FinanceError::Notify(format!("Failed to serialize alert: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| FinanceError::Notify(format!("Failed to open alert log: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| FinanceError::Notify(format!("Failed to write alert: {}", e)))?;

        file.flush()
            .map_err(|e| FinanceError::Notify(format!("Failed to flush alert log: {}", e)))?;

        Ok(())
    }
}
