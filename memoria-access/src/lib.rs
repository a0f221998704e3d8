//! Access control for Memoria.
//!
//! This crate is the decision core between a scanned souvenir and the
//! holder's vault:
//!
//! - **Scan policy**: for a tag identifier, decide unregistered /
//!   pending activation / authenticated / administrative bypass. All
//!   reserved-identifier precedence lives in one policy function.
//! - **Activation flow**: the one-time pending-to-active transition
//!   where the holder sets a passphrase.
//! - **Authentication gate**: clear-text credential check with a
//!   reserved fallback passcode so the system stays operable when the
//!   record store is unreachable.
//! - **Session manager**: explicit create/restore/destroy lifecycle
//!   over a device-local cache.
//!
//! Passphrases are deliberately compared unhashed against the record
//! store; this mirrors the deployed system and is not an oversight to
//! "fix" here.

mod activation;
mod auth;
mod config;
mod error;
mod scan;
mod session;

pub use activation::ActivationFlow;
pub use auth::AuthGate;
pub use config::{AccessConfig, DENIAL_DISPLAY, SCAN_ERROR_GRACE};
pub use error::{AccessError, AccessResult};
pub use scan::{evaluate_scan, ScanOutcome, ScanResolver};
pub use session::SessionManager;
