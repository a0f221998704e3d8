//! Read-only partner and product catalogs.
//!
//! The redemption and store flows consume these lists; the core never
//! mutates them (administrative CRUD happens elsewhere). Seeded defaults
//! are used whenever the backend list comes back empty.

mod partner;
mod pricing;
mod product;

pub use partner::{builtin_partners, Partner, PartnerCategory, PartnerId};
pub use pricing::price_for;
pub use product::{builtin_products, Product, ProductCategory};
