//! Catalog services. Each holds the store pool it was constructed with.

mod category;
mod product;
mod validation;
mod variant;

pub use category::CategoryService;
pub use product::ProductService;
pub use validation::RequestValidator;
pub use variant::VariantService;
