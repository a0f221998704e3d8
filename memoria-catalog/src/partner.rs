//! Partner venues offering perks to token holders.

use serde::{Deserialize, Serialize};

/// Numeric partner identifier, referenced by the redemption payload.
pub type PartnerId = u32;

/// Venue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerCategory {
    Food,
    Drink,
    Culture,
}

/// A partner venue where a holder can redeem a perk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    pub location: String,
    /// Human-readable benefit, e.g. "15% OFF".
    pub discount: String,
    pub description: String,
    pub rating: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: PartnerCategory,
}

/// The seeded partner list, used when the backend returns nothing.
#[must_use]
pub fn builtin_partners() -> Vec<Partner> {
    vec![
        Partner {
            id: 1,
            name: "La Carbonara".to_string(),
            location: "Via Panisperna, 214".to_string(),
            discount: "15% OFF".to_string(),
            description: "Authentic Roman recipe in the heart of Monti. Known for the best guanciale in town.".to_string(),
            rating: 4.8,
            image: None,
            category: PartnerCategory::Food,
        },
        Partner {
            id: 2,
            name: "Jerry Thomas Speakeasy".to_string(),
            location: "Vicolo Cellini, 30".to_string(),
            discount: "Free Welcome Cocktail".to_string(),
            description: "Rome's most exclusive secret bar. Requires a secret password (available in your vault).".to_string(),
            rating: 4.9,
            image: None,
            category: PartnerCategory::Drink,
        },
        Partner {
            id: 3,
            name: "Antico Forno Roscioli".to_string(),
            location: "Via dei Chiavari, 34".to_string(),
            discount: "10% OFF".to_string(),
            description: "The most famous bakery in the city. Try the pizza bianca.".to_string(),
            rating: 4.7,
            image: None,
            category: PartnerCategory::Food,
        },
        Partner {
            id: 4,
            name: "Villa Borghese Gallery".to_string(),
            location: "Piazzale Napoleone".to_string(),
            discount: "Skip-the-Line Entry".to_string(),
            description: "A breathtaking collection of Bernini and Caravaggio.".to_string(),
            rating: 4.9,
            image: None,
            category: PartnerCategory::Culture,
        },
    ]
}
