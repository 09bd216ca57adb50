//! Per-session alert de-duplication state

use std::collections::HashSet;

/// Which categories have already been surfaced this session
///
/// Starts empty and is never persisted. A category leaves the set when its
/// spending falls back under the relevant threshold, so a later breach fires
/// again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertState {
    exceeded: HashSet<String>,
    warned: HashSet<String>,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_exceeded(&self, category: &str) -> bool {
        self.exceeded.contains(category)
    }

    pub fn mark_exceeded(&mut self, category: &str) {
        self.exceeded.insert(category.to_string());
    }

    /// Returns true if the category was marked
    pub fn clear_exceeded(&mut self, category: &str) -> bool {
        self.exceeded.remove(category)
    }

    pub fn is_warned(&self, category: &str) -> bool {
        self.warned.contains(category)
    }

    pub fn mark_warned(&mut self, category: &str) {
        self.warned.insert(category.to_string());
    }

    pub fn clear_warned(&mut self, category: &str) -> bool {
        self.warned.remove(category)
    }

    pub fn is_empty(&self) -> bool {
        self.exceeded.is_empty() && self.warned.is_empty()
    }
}
