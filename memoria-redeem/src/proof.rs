//! Rotating proof generation.

use rand::Rng;

/// Length of a proof string.
pub const PROOF_LEN: usize = 7;

const PROOF_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a short opaque proof: base36 characters, uniformly sampled.
///
/// Low collision probability and unpredictable to a casual observer is
/// the whole requirement; this is not a cryptographic token.
#[must_use]
pub fn generate_proof() -> String {
    let mut rng = rand::thread_rng();
    (0..PROOF_LEN)
        .map(|_| PROOF_CHARSET[rng.gen_range(0..PROOF_CHARSET.len())] as char)
        .collect()
}
