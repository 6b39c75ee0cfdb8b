//! Shared application state: the store handle and the services built on it.

use crate::service::{CategoryService, ProductService, VariantService};
use crate::store::Store;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Store,
    pub products: ProductService,
    pub variants: VariantService,
    pub categories: CategoryService,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        let pool = store.pool().clone();
        Self {
            products: ProductService::new(pool.clone()),
            variants: VariantService::new(pool.clone()),
            categories: CategoryService::new(pool),
            store,
        }
    }
}
