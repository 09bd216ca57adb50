//! Service layer for the finance tracker
//!
//! The session is the single entry point the front ends use: it validates
//! input, updates the store and runs the alert engine after every change.

pub mod session;

pub use session::Session;
