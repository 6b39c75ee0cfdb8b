use super::{NewVariant, Patch, Variant};
use super::timestamp;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Draft,
    Archived,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Draft => "draft",
            ProductStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown product status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for ProductStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProductStatus::Active),
            "draft" => Ok(ProductStatus::Draft),
            "archived" => Ok(ProductStatus::Archived),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for ProductStatus {
    type Error = UnknownStatus;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Product row joined to its category name.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: ProductStatus,
    #[serde(serialize_with = "timestamp::serialize_opt")]
    pub deleted_at: Option<NaiveDateTime>,
    #[serde(serialize_with = "timestamp::serialize")]
    pub created_at: NaiveDateTime,
    #[serde(serialize_with = "timestamp::serialize")]
    pub updated_at: NaiveDateTime,
}

/// List read model: product with variant aggregates.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: ProductStatus,
    #[serde(serialize_with = "timestamp::serialize_opt")]
    pub deleted_at: Option<NaiveDateTime>,
    #[serde(serialize_with = "timestamp::serialize")]
    pub created_at: NaiveDateTime,
    #[serde(serialize_with = "timestamp::serialize")]
    pub updated_at: NaiveDateTime,
    pub variant_count: i64,
    pub min_price_cents: Option<i64>,
    pub max_price_cents: Option<i64>,
    pub total_inventory: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub variants: Vec<Variant>,
}

/// Optional filters for the product list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category_id: Option<i64>,
}

/// A validated product creation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub status: ProductStatus,
    pub variants: Vec<NewVariant>,
}

/// A validated partial product update. Name and status cannot be cleared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Patch<String>,
    pub category_id: Patch<i64>,
    pub status: Option<ProductStatus>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_absent()
            && self.category_id.is_absent()
            && self.status.is_none()
    }
}
