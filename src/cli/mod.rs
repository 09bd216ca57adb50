//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the session, plus the interactive menu.

pub mod budget;
pub mod config;
pub mod menu;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use config::{handle_config_command, ConfigArgs};
pub use menu::{BudgetMenuCommand, Menu, MenuCommand};
pub use report::{handle_check_command, handle_export_command, handle_report_command};
pub use transaction::{handle_add_command, handle_clear_command, handle_list_command, AddArgs};

use crate::alerts::Alert;
use crate::config::{FinancePaths, Settings};
use crate::error::FinanceResult;
use crate::notify::{AlertLogNotifier, Notifier, NullNotifier};
use crate::services::Session;
use crate::storage::Storage;

/// Open a session over the on-disk ledger using the user's settings
pub fn open_session(paths: &FinancePaths, settings: &Settings) -> FinanceResult<Session<Storage>> {
    let storage = Storage::open(paths.clone())?;
    let engine = settings.alert_engine()?;
    Session::open(storage, engine, build_notifier(paths, settings))
}

/// The notification channel selected by the settings
pub fn build_notifier(paths: &FinancePaths, settings: &Settings) -> Box<dyn Notifier> {
    if settings.notifications.enabled {
        Box::new(AlertLogNotifier::new(
            paths.alert_log(),
            settings.notifications.recipient.clone(),
        ))
    } else {
        Box::new(NullNotifier)
    }
}

pub(crate) fn print_alerts(alerts: &[Alert]) {
    for alert in alerts {
        println!("{}", alert);
    }
}
