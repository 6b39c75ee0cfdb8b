//! Catalog API: products, variants, and categories over a SQLite store.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::{apply_schema, reset_schema};
pub use routes::{app_router, catalog_routes, common_routes};
pub use seed::{seed_catalog, SeedReport};
pub use service::{CategoryService, ProductService, RequestValidator, VariantService};
pub use state::AppState;
pub use store::Store;
