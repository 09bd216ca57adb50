//! Configuration command
//!
//! Shows the resolved paths and settings, and updates settings when any
//! option is given.

use clap::{Args, ValueEnum};

use crate::config::{FinancePaths, Settings};
use crate::error::FinanceResult;

/// On/off switch for notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

/// Arguments for `config`
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Currency symbol used when displaying amounts
    #[arg(long)]
    pub currency: Option<String>,

    /// Warn once a category reaches this percentage of its budget (1-99)
    #[arg(long, value_name = "PERCENT", conflicts_with = "no_warn")]
    pub warn_at: Option<u8>,

    /// Disable near-limit warnings
    #[arg(long)]
    pub no_warn: bool,

    /// Deliver alerts to the alert log
    #[arg(long, value_enum)]
    pub notify: Option<Toggle>,

    /// Recipient recorded with each delivered alert (e.g. an email address)
    #[arg(long)]
    pub recipient: Option<String>,
}

impl ConfigArgs {
    fn has_changes(&self) -> bool {
        self.currency.is_some()
            || self.warn_at.is_some()
            || self.no_warn
            || self.notify.is_some()
            || self.recipient.is_some()
    }

    /// Apply the requested changes to a copy of `settings`
    pub fn apply(&self, settings: &Settings) -> Settings {
        let mut updated = settings.clone();
        if let Some(currency) = &self.currency {
            updated.currency_symbol = currency.trim().to_string();
        }
        if let Some(percent) = self.warn_at {
            updated.warning_threshold = Some(percent);
        }
        if self.no_warn {
            updated.warning_threshold = None;
        }
        if let Some(toggle) = self.notify {
            updated.notifications.enabled = toggle == Toggle::On;
        }
        if let Some(recipient) = &self.recipient {
            let recipient = recipient.trim();
            updated.notifications.recipient = (!recipient.is_empty()).then(|| recipient.to_string());
        }
        updated
    }
}

/// Handle the config command
pub fn handle_config_command(
    paths: &FinancePaths,
    settings: &mut Settings,
    args: ConfigArgs,
) -> FinanceResult<()> {
    if args.has_changes() {
        let updated = args.apply(settings);
        updated.save(paths)?;
        *settings = updated;
        println!("Settings saved.");
        println!();
    }

    println!("Finance Tracker Configuration");
    println!("=============================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Alert log:        {}", paths.alert_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  Date format:       {}", settings.date_format);
    match settings.warning_threshold {
        Some(percent) => println!("  Warning threshold: {}%", percent),
        None => println!("  Warning threshold: off"),
    }
    println!(
        "  Notifications:     {}",
        if settings.notifications.enabled { "on" } else { "off" }
    );
    if let Some(recipient) = &settings.notifications.recipient {
        println!("  Recipient:         {}", recipient);
    }
    Ok(())
}
