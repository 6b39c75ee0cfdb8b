//! Catalog schema: categories, products, variants, and their indexes.
//! Order follows foreign-key dependencies.

use crate::error::AppError;
use sqlx::SqlitePool;

/// Tables in dependency order. `sku` uses NOCASE so the UNIQUE constraint is case-insensitive.
const TABLES: &[(&str, &str)] = &[
    (
        "categories",
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE,
            description TEXT,
            created_at  TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at  TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    ),
    (
        "products",
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            description TEXT,
            category_id INTEGER REFERENCES categories(id),
            status      TEXT NOT NULL DEFAULT 'active' CHECK (status IN ('active', 'draft', 'archived')),
            deleted_at  TEXT DEFAULT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at  TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    ),
    (
        "variants",
        r#"
        CREATE TABLE IF NOT EXISTS variants (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            product_id      INTEGER NOT NULL REFERENCES products(id),
            sku             TEXT NOT NULL COLLATE NOCASE UNIQUE,
            name            TEXT NOT NULL,
            price_cents     INTEGER NOT NULL DEFAULT 0 CHECK (price_cents >= 0),
            inventory_count INTEGER NOT NULL DEFAULT 0 CHECK (inventory_count >= 0),
            created_at      TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at      TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_products_category ON products (category_id)",
    "CREATE INDEX IF NOT EXISTS idx_variants_product ON variants (product_id)",
];

/// Create tables and indexes if missing. Idempotent.
pub async fn apply_schema(pool: &SqlitePool) -> Result<(), AppError> {
    for (name, ddl) in TABLES {
        tracing::debug!(table = %name, "ensure table");
        sqlx::query(ddl).execute(pool).await?;
    }
    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Drop all catalog tables (children first) and recreate them empty.
pub async fn reset_schema(pool: &SqlitePool) -> Result<(), AppError> {
    for (name, _) in TABLES.iter().rev() {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", name))
            .execute(pool)
            .await?;
    }
    apply_schema(pool).await
}
