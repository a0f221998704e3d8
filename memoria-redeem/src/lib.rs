//! Perk redemption for Memoria.
//!
//! When a holder claims a partner perk, the screen shows a verification
//! payload the partner can check. Two independent timers govern it:
//!
//! - a five-minute expiration window, fixed when the screen opens and
//!   never extended;
//! - a thirty-second proof rotation, so a screenshot of the payload goes
//!   stale quickly.
//!
//! Both timers belong to the [`RedemptionScreen`] and are cancelled when
//! it closes or is dropped; no callback outlives its screen. The proof
//! is casually unpredictable, not cryptographic; the partner side
//! compares it against its own rotation state out of band.

mod proof;
mod screen;
mod token;

pub use proof::{generate_proof, PROOF_LEN};
pub use screen::{RedemptionScreen, RedemptionState};
pub use token::{
    verify_url, RedemptionToken, COUNTDOWN_TICK, DEFAULT_VERIFY_HOST, PROOF_ROTATION,
    REDEMPTION_WINDOW,
};
