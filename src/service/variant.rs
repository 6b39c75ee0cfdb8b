//! Variant reads, price/inventory updates, and the last-variant delete guard.

use crate::error::AppError;
use crate::models::{Variant, VariantPatch};
use crate::sql::{update_variant, VARIANT_COLUMNS};
use sqlx::{Sqlite, SqlitePool};

#[derive(Clone, Debug)]
pub struct VariantService {
    pool: SqlitePool,
}

impl VariantService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i64) -> Result<Variant, AppError> {
        fetch_variant(&self.pool, id).await?.ok_or_else(variant_not_found)
    }

    /// Apply the provided price/inventory fields and return the stored row.
    pub async fn update(&self, id: i64, patch: VariantPatch) -> Result<Variant, AppError> {
        fetch_variant(&self.pool, id).await?.ok_or_else(variant_not_found)?;
        if let Some(mut qb) = update_variant(id, &patch) {
            tracing::debug!(sql = %qb.sql(), "query");
            qb.build().execute(&self.pool).await?;
        }
        fetch_variant(&self.pool, id).await?.ok_or_else(variant_not_found)
    }

    /// Delete a variant unless it is the last one of its product.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        let variant = fetch_variant(&mut *tx, id).await?.ok_or_else(variant_not_found)?;

        let siblings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM variants WHERE product_id = ?")
            .bind(variant.product_id)
            .fetch_one(&mut *tx)
            .await?;
        if siblings <= 1 {
            return Err(AppError::Conflict(
                "Cannot delete the last variant of a product".into(),
            ));
        }

        sqlx::query("DELETE FROM variants WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(variant_id = id, product_id = variant.product_id, "variant deleted");
        Ok(())
    }
}

fn variant_not_found() -> AppError {
    AppError::NotFound("Variant not found".into())
}

async fn fetch_variant<'e, E>(executor: E, id: i64) -> Result<Option<Variant>, AppError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let sql = format!("SELECT {} FROM variants WHERE id = ?", VARIANT_COLUMNS);
    let row = sqlx::query_as::<_, Variant>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row)
}
