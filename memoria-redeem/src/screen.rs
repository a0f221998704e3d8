//! The redemption screen: scoped owner of the countdown and rotation.
//!
//! One driver task multiplexes both intervals and publishes state over a
//! watch channel. Closing or dropping the screen aborts the driver, so a
//! stale token can never tick after closure.

use crate::{RedemptionToken, COUNTDOWN_TICK, PROOF_ROTATION};
use memoria_catalog::PartnerId;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Snapshot of an open (or just-expired) redemption screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedemptionState {
    pub partner_id: PartnerId,
    pub proof: String,
    /// Whole seconds left in the window.
    pub remaining_secs: u64,
    /// Once true, the token is invalid regardless of `proof` and the
    /// screen has shut down.
    pub expired: bool,
}

impl RedemptionState {
    fn snapshot(token: &RedemptionToken) -> Self {
        Self {
            partner_id: token.partner_id,
            proof: token.proof.clone(),
            remaining_secs: token.remaining().as_secs(),
            expired: token.is_expired(),
        }
    }

    /// The verification payload for the currently displayed proof.
    #[must_use]
    pub fn verify_url(&self, host: &str) -> String {
        crate::verify_url(host, self.partner_id, &self.proof)
    }
}

/// An open redemption screen for one partner.
///
/// Reopening after expiry means calling [`RedemptionScreen::open`]
/// again: a fresh five-minute window and a fresh proof.
pub struct RedemptionScreen {
    states: watch::Receiver<RedemptionState>,
    driver: JoinHandle<()>,
}

impl RedemptionScreen {
    /// Opens the screen: issues a token and starts both timers.
    #[must_use]
    pub fn open(partner_id: PartnerId) -> Self {
        let token = RedemptionToken::issue(partner_id);
        debug!(partner = partner_id, proof = %token.proof, "redemption screen opened");
        let (tx, rx) = watch::channel(RedemptionState::snapshot(&token));
        let driver = tokio::spawn(drive(token, tx));
        Self { states: rx, driver }
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> RedemptionState {
        self.states.borrow().clone()
    }

    /// A change stream for rendering; every countdown tick and proof
    /// rotation publishes a new state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RedemptionState> {
        self.states.clone()
    }

    /// True while the window has not elapsed.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.states.borrow().expired
    }

    /// Closes the screen, cancelling both timers.
    pub fn close(&self) {
        self.driver.abort();
    }
}

impl Drop for RedemptionScreen {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

async fn drive(mut token: RedemptionToken, states: watch::Sender<RedemptionState>) {
    let mut countdown = tokio::time::interval(COUNTDOWN_TICK);
    let mut rotation = tokio::time::interval(PROOF_ROTATION);
    // Both intervals fire immediately on the first tick; consume those
    // so the schedule starts one period out.
    countdown.tick().await;
    rotation.tick().await;

    loop {
        tokio::select! {
            _ = countdown.tick() => {
                if token.is_expired() {
                    debug!(partner = token.partner_id, "redemption window elapsed, closing");
                    let mut expired = RedemptionState::snapshot(&token);
                    expired.expired = true;
                    let _ = states.send(expired);
                    break;
                }
                let _ = states.send(RedemptionState::snapshot(&token));
            }
            _ = rotation.tick() => {
                token.rotate();
                debug!(partner = token.partner_id, proof = %token.proof, "proof rotated");
                let _ = states.send(RedemptionState::snapshot(&token));
            }
        }
    }
}
