//! Tier-based checkout pricing.

use crate::Product;
use memoria_types::Tier;

/// Fallback list price when a product row carries no price.
const DEFAULT_PRICE_CENTS: u32 = 4900;

/// Returns the checkout price in cents for a product given the holder's
/// tier. Gold and premium holders claim items for free; everyone else
/// pays the list price, falling back to the default when unset.
#[must_use]
pub fn price_for(product: &Product, tier: Tier) -> u32 {
    if tier.redeems_free() {
        return 0;
    }
    product.price_cents.unwrap_or(DEFAULT_PRICE_CENTS)
}
