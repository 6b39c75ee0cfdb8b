//! Builds the filtered product list query and the partial UPDATE statements.

use crate::models::{ProductFilter, ProductPatch, VariantPatch};
use sqlx::{QueryBuilder, Sqlite};

/// Product columns joined to the category name. `p` is products, `c` is categories.
pub const PRODUCT_COLUMNS: &str = "p.id, p.name, p.description, p.category_id, c.name AS category_name, \
     p.status, p.deleted_at, p.created_at, p.updated_at";

pub const VARIANT_COLUMNS: &str =
    "id, product_id, sku, name, price_cents, inventory_count, created_at, updated_at";

/// Escape LIKE wildcards so the search term matches as a literal substring.
fn like_pattern(term: &str) -> String {
    let mut out = String::with_capacity(term.len() + 2);
    out.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('%');
    out
}

/// SELECT of non-deleted products with variant aggregates, newest first.
/// `search` matches name or description (case-insensitive); `category_id` is exact.
pub fn select_product_list(filter: &ProductFilter) -> QueryBuilder<'static, Sqlite> {
    let mut qb = QueryBuilder::new("SELECT ");
    qb.push(PRODUCT_COLUMNS);
    qb.push(
        ", COUNT(v.id) AS variant_count, \
         MIN(v.price_cents) AS min_price_cents, \
         MAX(v.price_cents) AS max_price_cents, \
         COALESCE(SUM(v.inventory_count), 0) AS total_inventory \
         FROM products p \
         LEFT JOIN categories c ON p.category_id = c.id \
         LEFT JOIN variants v ON v.product_id = p.id \
         WHERE p.deleted_at IS NULL",
    );

    if let Some(term) = filter.search.as_deref() {
        let pattern = like_pattern(term);
        qb.push(" AND (p.name LIKE ");
        qb.push_bind(pattern.clone());
        qb.push(" ESCAPE '\\' OR p.description LIKE ");
        qb.push_bind(pattern);
        qb.push(" ESCAPE '\\')");
    }

    if let Some(category_id) = filter.category_id {
        qb.push(" AND p.category_id = ");
        qb.push_bind(category_id);
    }

    qb.push(" GROUP BY p.id ORDER BY p.created_at DESC, p.id DESC");
    qb
}

fn push_assignment(qb: &mut QueryBuilder<'static, Sqlite>, has_fields: &mut bool, column: &str) {
    if *has_fields {
        qb.push(", ");
    }
    qb.push(column);
    qb.push(" = ");
    *has_fields = true;
}

/// UPDATE of the fields present in `patch` on a live product. None when nothing would change.
pub fn update_product(id: i64, patch: &ProductPatch) -> Option<QueryBuilder<'static, Sqlite>> {
    if patch.is_empty() {
        return None;
    }
    let mut qb = QueryBuilder::new("UPDATE products SET ");
    let mut has_fields = false;

    if let Some(name) = &patch.name {
        push_assignment(&mut qb, &mut has_fields, "name");
        qb.push_bind(name.clone());
    }
    if let Some(description) = patch.description.clone().into_update() {
        push_assignment(&mut qb, &mut has_fields, "description");
        qb.push_bind(description);
    }
    if let Some(category_id) = patch.category_id.clone().into_update() {
        push_assignment(&mut qb, &mut has_fields, "category_id");
        qb.push_bind(category_id);
    }
    if let Some(status) = patch.status {
        push_assignment(&mut qb, &mut has_fields, "status");
        qb.push_bind(status.as_str());
    }

    qb.push(", updated_at = datetime('now') WHERE id = ");
    qb.push_bind(id);
    qb.push(" AND deleted_at IS NULL");
    Some(qb)
}

/// UPDATE of price and/or inventory on one variant. None when nothing would change.
pub fn update_variant(id: i64, patch: &VariantPatch) -> Option<QueryBuilder<'static, Sqlite>> {
    if patch.is_empty() {
        return None;
    }
    let mut qb = QueryBuilder::new("UPDATE variants SET ");
    let mut has_fields = false;

    if let Some(price_cents) = patch.price_cents {
        push_assignment(&mut qb, &mut has_fields, "price_cents");
        qb.push_bind(price_cents);
    }
    if let Some(inventory_count) = patch.inventory_count {
        push_assignment(&mut qb, &mut has_fields, "inventory_count");
        qb.push_bind(inventory_count);
    }

    qb.push(", updated_at = datetime('now') WHERE id = ");
    qb.push_bind(id);
    Some(qb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Patch, ProductStatus};

    #[test]
    fn list_without_filters_excludes_deleted() {
        let qb = select_product_list(&ProductFilter::default());
        let sql = qb.sql();
        assert!(sql.contains("WHERE p.deleted_at IS NULL GROUP BY p.id"));
        assert!(sql.ends_with("ORDER BY p.created_at DESC, p.id DESC"));
        assert!(!sql.contains("LIKE"));
    }

    #[test]
    fn list_with_both_filters() {
        let qb = select_product_list(&ProductFilter {
            search: Some("beef".into()),
            category_id: Some(1),
        });
        let sql = qb.sql();
        assert!(sql.contains("AND (p.name LIKE ? ESCAPE '\\' OR p.description LIKE ? ESCAPE '\\')"));
        assert!(sql.contains("AND p.category_id = ?"));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("beef"), "%beef%");
        assert_eq!(like_pattern("80%_lean"), "%80\\%\\_lean%");
    }

    #[test]
    fn product_update_sets_only_present_fields() {
        let patch = ProductPatch {
            name: Some("Renamed".into()),
            description: Patch::Null,
            category_id: Patch::Absent,
            status: Some(ProductStatus::Draft),
        };
        let qb = update_product(7, &patch).unwrap();
        assert_eq!(
            qb.sql(),
            "UPDATE products SET name = ?, description = ?, status = ?, updated_at = datetime('now') \
             WHERE id = ? AND deleted_at IS NULL"
        );
    }

    #[test]
    fn empty_patches_build_nothing() {
        assert!(update_product(1, &ProductPatch::default()).is_none());
        assert!(update_variant(1, &VariantPatch::default()).is_none());
    }

    #[test]
    fn variant_update_price_only() {
        let patch = VariantPatch {
            price_cents: Some(4242),
            inventory_count: None,
        };
        let qb = update_variant(3, &patch).unwrap();
        assert_eq!(
            qb.sql(),
            "UPDATE variants SET price_cents = ?, updated_at = datetime('now') WHERE id = ?"
        );
    }
}
