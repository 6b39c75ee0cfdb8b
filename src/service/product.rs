//! Product reads, transactional creation, partial update, and soft delete.

use crate::error::{is_unique_violation, AppError};
use crate::models::{CreateProduct, Product, ProductDetail, ProductFilter, ProductPatch, ProductSummary, Variant};
use crate::sql::{select_product_list, update_product, PRODUCT_COLUMNS, VARIANT_COLUMNS};
use sqlx::{Sqlite, SqlitePool};

#[derive(Clone, Debug)]
pub struct ProductService {
    pool: SqlitePool,
}

impl ProductService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Non-deleted products with variant aggregates, newest first. Empty when nothing matches.
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<ProductSummary>, AppError> {
        let mut qb = select_product_list(filter);
        tracing::debug!(sql = %qb.sql(), ?filter, "query");
        let rows = qb
            .build_query_as::<ProductSummary>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Product with its variants in creation order. Soft-deleted products are not found.
    pub async fn get(&self, id: i64) -> Result<ProductDetail, AppError> {
        let product = fetch_product(&self.pool, id).await?.ok_or_else(product_not_found)?;
        let variants = fetch_variants(&self.pool, id).await?;
        Ok(ProductDetail { product, variants })
    }

    /// Insert the product and all its variants in one transaction, then return the stored detail.
    /// A SKU already taken in the store rolls the whole insert back.
    pub async fn create(&self, cmd: CreateProduct) -> Result<ProductDetail, AppError> {
        if let Some(category_id) = cmd.category_id {
            ensure_category(&self.pool, category_id).await?;
        }

        let mut tx = self.pool.begin().await?;
        let product_id = sqlx::query(
            "INSERT INTO products (name, description, category_id, status) VALUES (?, ?, ?, ?)",
        )
        .bind(cmd.name.as_str())
        .bind(cmd.description.as_deref())
        .bind(cmd.category_id)
        .bind(cmd.status.as_str())
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        for (idx, variant) in cmd.variants.iter().enumerate() {
            let inserted = sqlx::query(
                "INSERT INTO variants (product_id, sku, name, price_cents, inventory_count) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(product_id)
            .bind(variant.sku.as_str())
            .bind(variant.name.as_str())
            .bind(variant.price_cents)
            .bind(variant.inventory_count)
            .execute(&mut *tx)
            .await;

            if let Err(e) = inserted {
                if is_unique_violation(&e, "variants", "sku") {
                    tracing::warn!(sku = %variant.sku, "sku already exists, product not created");
                    return Err(AppError::Conflict(format!(
                        "Variant #{}: SKU '{}' already exists",
                        idx + 1,
                        variant.sku
                    )));
                }
                return Err(e.into());
            }
        }

        let product = fetch_product(&mut *tx, product_id)
            .await?
            .ok_or_else(product_not_found)?;
        let variants = fetch_variants(&mut *tx, product_id).await?;
        tx.commit().await?;

        tracing::info!(product_id, variants = variants.len(), "product created");
        Ok(ProductDetail { product, variants })
    }

    /// Overwrite the fields present in `patch`; absent fields keep their stored value.
    pub async fn update(&self, id: i64, patch: ProductPatch) -> Result<Product, AppError> {
        fetch_product(&self.pool, id).await?.ok_or_else(product_not_found)?;
        if let Some(category_id) = patch.category_id.as_value() {
            ensure_category(&self.pool, *category_id).await?;
        }

        if let Some(mut qb) = update_product(id, &patch) {
            tracing::debug!(sql = %qb.sql(), "query");
            qb.build().execute(&self.pool).await?;
        }

        fetch_product(&self.pool, id).await?.ok_or_else(product_not_found)
    }

    /// Stamp `deleted_at`. Deleting an already-deleted product succeeds and re-stamps it.
    pub async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE products SET deleted_at = datetime('now'), updated_at = datetime('now') WHERE id = ?",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(product_not_found());
        }
        tracing::info!(product_id = id, "product soft-deleted");
        Ok(())
    }
}

fn product_not_found() -> AppError {
    AppError::NotFound("Product not found".into())
}

async fn fetch_product<'e, E>(executor: E, id: i64) -> Result<Option<Product>, AppError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let sql = format!(
        "SELECT {} FROM products p LEFT JOIN categories c ON p.category_id = c.id \
         WHERE p.id = ? AND p.deleted_at IS NULL",
        PRODUCT_COLUMNS
    );
    let row = sqlx::query_as::<_, Product>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row)
}

async fn fetch_variants<'e, E>(executor: E, product_id: i64) -> Result<Vec<Variant>, AppError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let sql = format!(
        "SELECT {} FROM variants WHERE product_id = ? ORDER BY created_at ASC, id ASC",
        VARIANT_COLUMNS
    );
    let rows = sqlx::query_as::<_, Variant>(&sql)
        .bind(product_id)
        .fetch_all(executor)
        .await?;
    Ok(rows)
}

async fn ensure_category(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let found: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    if found == 0 {
        return Err(AppError::Validation("category not found".into()));
    }
    Ok(())
}
