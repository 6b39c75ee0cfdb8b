use super::timestamp;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Variant {
    pub id: i64,
    pub product_id: i64,
    pub sku: String,
    pub name: String,
    pub price_cents: i64,
    pub inventory_count: i64,
    #[serde(serialize_with = "timestamp::serialize")]
    pub created_at: NaiveDateTime,
    #[serde(serialize_with = "timestamp::serialize")]
    pub updated_at: NaiveDateTime,
}

/// A validated variant inside a product creation request. SKU and name are trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewVariant {
    pub sku: String,
    pub name: String,
    pub price_cents: i64,
    pub inventory_count: i64,
}

/// Price and inventory changes for one variant. `None` leaves the column untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariantPatch {
    pub price_cents: Option<i64>,
    pub inventory_count: Option<i64>,
}

impl VariantPatch {
    pub fn is_empty(&self) -> bool {
        self.price_cents.is_none() && self.inventory_count.is_none()
    }
}
