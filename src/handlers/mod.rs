//! HTTP handlers for categories, products, and variants.

pub mod category;
pub mod product;
pub mod variant;
