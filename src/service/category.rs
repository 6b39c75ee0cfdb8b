//! Read-only category listing with live product counts.

use crate::error::AppError;
use crate::models::Category;
use sqlx::SqlitePool;

/// Soft-deleted products are excluded from `product_count`.
const CATEGORY_SELECT: &str = "SELECT c.id, c.name, c.description, COUNT(p.id) AS product_count, \
     c.created_at, c.updated_at \
     FROM categories c \
     LEFT JOIN products p ON p.category_id = c.id AND p.deleted_at IS NULL";

#[derive(Clone, Debug)]
pub struct CategoryService {
    pool: SqlitePool,
}

impl CategoryService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All categories ordered by name.
    pub async fn list(&self) -> Result<Vec<Category>, AppError> {
        let sql = format!("{} GROUP BY c.id ORDER BY c.name ASC", CATEGORY_SELECT);
        let rows = sqlx::query_as::<_, Category>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: i64) -> Result<Category, AppError> {
        let sql = format!("{} WHERE c.id = ? GROUP BY c.id", CATEGORY_SELECT);
        sqlx::query_as::<_, Category>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".into()))
    }
}
