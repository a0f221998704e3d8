use memoria_catalog::{
    builtin_partners, builtin_products, Partner, PartnerCategory, ProductCategory,
};
use pretty_assertions::assert_eq;

#[test]
fn builtin_partners_are_seeded() {
    let partners = builtin_partners();
    assert_eq!(partners.len(), 4);
    assert_eq!(partners[0].name, "La Carbonara");
    assert_eq!(partners[3].category, PartnerCategory::Culture);
}

#[test]
fn partner_ids_are_unique() {
    let partners = builtin_partners();
    let mut ids: Vec<u32> = partners.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), partners.len());
}

#[test]
fn partner_json_roundtrip() {
    let partners = builtin_partners();
    let json = serde_json::to_string(&partners).unwrap();
    let back: Vec<Partner> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, partners);
}

#[test]
fn product_category_serializes_uppercase() {
    let json = serde_json::to_string(&ProductCategory::Souvenir).unwrap();
    assert_eq!(json, "\"SOUVENIR\"");
}

#[test]
fn builtin_products_cover_every_category() {
    let products = builtin_products();
    assert!(products.iter().any(|p| p.category == ProductCategory::Tag));
    assert!(products.iter().any(|p| p.category == ProductCategory::Souvenir));
    assert!(products.iter().any(|p| p.category == ProductCategory::Map));
}
