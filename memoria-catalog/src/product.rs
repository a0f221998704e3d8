//! Souvenir products sold through the store flow.

use serde::{Deserialize, Serialize};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductCategory {
    Tag,
    Souvenir,
    Map,
}

/// A physical souvenir product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// List price in cents. `None` means the backend row carried no price.
    #[serde(default)]
    pub price_cents: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: ProductCategory,
}

/// The seeded product list, used when the backend returns nothing.
#[must_use]
pub fn builtin_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Classic Roman Tag".to_string(),
            description: "The original NFC-enabled marble chip for your eternal memories.".to_string(),
            price_cents: Some(0),
            image: None,
            category: ProductCategory::Tag,
        },
        Product {
            id: 2,
            name: "Golden Tiber Medallion".to_string(),
            description: "Brass-plated NFC souvenir featuring the river god Tiberinus.".to_string(),
            price_cents: Some(0),
            image: None,
            category: ProductCategory::Souvenir,
        },
        Product {
            id: 3,
            name: "Augmented Reality Map".to_string(),
            description: "A physical hand-drawn map that unlocks 3D Roman landmarks.".to_string(),
            price_cents: Some(0),
            image: None,
            category: ProductCategory::Map,
        },
        Product {
            id: 4,
            name: "Colosseum Echo Tag".to_string(),
            description: "Special edition tag with pre-loaded audio guides for the Forum.".to_string(),
            price_cents: Some(0),
            image: None,
            category: ProductCategory::Tag,
        },
    ]
}
