//! The redemption token and its timing rules.

use crate::generate_proof;
use memoria_catalog::PartnerId;
use std::time::Duration;
use tokio::time::Instant;

/// The expiration window, fixed at open time.
pub const REDEMPTION_WINDOW: Duration = Duration::from_secs(300);

/// How often the proof rotates while the screen is open.
pub const PROOF_ROTATION: Duration = Duration::from_secs(30);

/// Granularity of the countdown shown to the holder.
pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// Default host for the verification payload URL.
pub const DEFAULT_VERIFY_HOST: &str = "romememories.com";

/// Renders the payload handed to the partner for verification.
#[must_use]
pub fn verify_url(host: &str, partner_id: PartnerId, proof: &str) -> String {
    format!("https://{host}/verify/{partner_id}?salt={proof}")
}

/// A live redemption token for one partner perk.
///
/// `expires_at` is fixed at issue time; proof rotation never moves it.
#[derive(Debug, Clone)]
pub struct RedemptionToken {
    pub partner_id: PartnerId,
    pub proof: String,
    pub issued_at: Instant,
    pub expires_at: Instant,
}

impl RedemptionToken {
    /// Issues a fresh token: full window, fresh proof.
    #[must_use]
    pub fn issue(partner_id: PartnerId) -> Self {
        let issued_at = Instant::now();
        Self {
            partner_id,
            proof: generate_proof(),
            issued_at,
            expires_at: issued_at + REDEMPTION_WINDOW,
        }
    }

    /// Replaces the proof. The expiration window is untouched.
    pub fn rotate(&mut self) {
        self.proof = generate_proof();
    }

    /// Time left until expiry, zero once passed.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    /// True once the window has elapsed, regardless of the proof value.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining().is_zero()
    }

    /// The verification payload for this token's current proof.
    #[must_use]
    pub fn verify_url(&self, host: &str) -> String {
        verify_url(host, self.partner_id, &self.proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_url_shape() {
        let url = verify_url("romememories.com", 2, "k3x9a1f");
        assert_eq!(url, "https://romememories.com/verify/2?salt=k3x9a1f");
    }

    #[tokio::test(start_paused = true)]
    async fn rotation_keeps_the_expiry() {
        let mut token = RedemptionToken::issue(1);
        let expires_at = token.expires_at;
        let before = token.proof.clone();

        token.rotate();
        assert_eq!(token.expires_at, expires_at);
        assert_eq!(token.remaining(), REDEMPTION_WINDOW);
        // A 7-char base36 collision is effectively impossible.
        assert_ne!(token.proof, before);
    }

    #[tokio::test(start_paused = true)]
    async fn token_expires_after_the_window() {
        let token = RedemptionToken::issue(1);
        assert!(!token.is_expired());

        tokio::time::advance(REDEMPTION_WINDOW).await;
        assert!(token.is_expired());
        assert_eq!(token.remaining(), Duration::ZERO);
    }
}
