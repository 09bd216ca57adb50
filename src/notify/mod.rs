//! Alert delivery channels
//!
//! The session hands every new alert to a [`Notifier`]. Delivery is best
//! effort: a failed send is logged and never changes which alerts were
//! produced.

pub mod alert_log;

pub use alert_log::AlertLogNotifier;

use tracing::{info, warn};

use crate::alerts::Alert;
use crate::error::FinanceResult;

/// Something that can deliver an alert message
pub trait Notifier {
    /// Short channel name for log messages
    fn name(&self) -> &str;

    fn send(&self, message: &str) -> FinanceResult<()>;
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn name(&self) -> &str {
        "none"
    }

    fn send(&self, _message: &str) -> FinanceResult<()> {
        Ok(())
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn send(&self, message: &str) -> FinanceResult<()> {
        (**self).send(message)
    }
}

/// Send each alert, returning how many were delivered
pub fn dispatch(notifier: &dyn Notifier, alerts: &[Alert]) -> usize {
    let mut delivered = 0;
    for alert in alerts {
        match notifier.send(&alert.to_string()) {
            Ok(()) => {
                info!(channel = notifier.name(), category = %alert.category, "alert delivered");
                delivered += 1;
            }
            Err(e) => {
                warn!(channel = notifier.name(), category = %alert.category, error = %e, "alert delivery failed");
            }
        }
    }
    delivered
}
