//! Request validation: narrows untyped JSON bodies into typed commands.
//! Fails fast on the first violation, in field order.

use crate::error::AppError;
use crate::models::{CreateProduct, NewVariant, Patch, ProductPatch, ProductStatus, VariantPatch};
use serde_json::{Map, Value};
use std::collections::HashSet;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a product creation body (product fields, then each variant in order).
    pub fn product_create(body: &Value) -> Result<CreateProduct, AppError> {
        let obj = as_object(body)?;

        let name = required_text(obj.get("name")).ok_or_else(|| invalid("name required"))?;
        let description = optional_text(obj.get("description"), "description")?;
        let category_id = match optional_id(obj.get("category_id"))? {
            Patch::Value(id) => Some(id),
            Patch::Absent | Patch::Null => None,
        };
        let status = match obj.get("status") {
            None | Some(Value::Null) => ProductStatus::default(),
            Some(v) => parse_status(v)?,
        };

        let raw_variants = match obj.get("variants") {
            Some(Value::Array(items)) if !items.is_empty() => items,
            _ => return Err(invalid("at least one variant required")),
        };

        let mut seen_skus = HashSet::new();
        let mut variants = Vec::with_capacity(raw_variants.len());
        for (idx, raw) in raw_variants.iter().enumerate() {
            let n = idx + 1;
            let item = raw
                .as_object()
                .ok_or_else(|| invalid(format!("Variant #{}: must be an object", n)))?;
            let sku = required_text(item.get("sku"))
                .ok_or_else(|| invalid(format!("Variant #{}: SKU is required", n)))?;
            if !seen_skus.insert(sku.to_lowercase()) {
                return Err(invalid(format!("Variant #{}: SKU must be unique", n)));
            }
            let name = required_text(item.get("name"))
                .ok_or_else(|| invalid(format!("Variant #{}: name is required", n)))?;
            let price_cents = item.get("price_cents").and_then(non_negative_whole).ok_or_else(|| {
                invalid(format!("Variant #{}: price_cents must be a non-negative number", n))
            })?;
            let inventory_count = item.get("inventory_count").and_then(non_negative_whole).ok_or_else(|| {
                invalid(format!("Variant #{}: inventory_count must be a non-negative number", n))
            })?;
            variants.push(NewVariant {
                sku,
                name,
                price_cents,
                inventory_count,
            });
        }

        Ok(CreateProduct {
            name,
            description,
            category_id,
            status,
            variants,
        })
    }

    /// Validate a partial product update. Only fields present in the body are checked.
    pub fn product_update(body: &Value) -> Result<ProductPatch, AppError> {
        let obj = as_object(body)?;
        let name = match obj.get("name") {
            None => None,
            Some(v) => Some(required_text(Some(v)).ok_or_else(|| invalid("name required"))?),
        };
        let description = match obj.get("description") {
            None => Patch::Absent,
            Some(Value::Null) => Patch::Null,
            Some(Value::String(s)) => Patch::Value(s.clone()),
            Some(_) => return Err(invalid("description must be a string")),
        };
        let category_id = optional_id(obj.get("category_id"))?;
        let status = match obj.get("status") {
            None => None,
            Some(v) => Some(parse_status(v)?),
        };
        Ok(ProductPatch {
            name,
            description,
            category_id,
            status,
        })
    }

    /// Validate a variant update. `name` and `sku` may be sent but are not editable and are ignored.
    pub fn variant_update(body: &Value) -> Result<VariantPatch, AppError> {
        let obj = as_object(body)?;
        let price_cents = match obj.get("price_cents") {
            None => None,
            Some(v) => Some(
                non_negative_whole(v)
                    .ok_or_else(|| invalid("price_cents must be a non-negative number"))?,
            ),
        };
        let inventory_count = match obj.get("inventory_count") {
            None => None,
            Some(v) => Some(
                non_negative_whole(v)
                    .ok_or_else(|| invalid("inventory_count must be a non-negative integer"))?,
            ),
        };
        Ok(VariantPatch {
            price_cents,
            inventory_count,
        })
    }
}

fn invalid(msg: impl Into<String>) -> AppError {
    AppError::Validation(msg.into())
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, AppError> {
    body.as_object()
        .ok_or_else(|| invalid("body must be a JSON object"))
}

/// Trimmed, non-empty string.
fn required_text(v: Option<&Value>) -> Option<String> {
    let s = v?.as_str()?.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn optional_text(v: Option<&Value>, field: &str) -> Result<Option<String>, AppError> {
    match v {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid(format!("{} must be a string", field))),
    }
}

fn optional_id(v: Option<&Value>) -> Result<Patch<i64>, AppError> {
    match v {
        None => Ok(Patch::Absent),
        Some(Value::Null) => Ok(Patch::Null),
        Some(Value::Number(n)) => n
            .as_i64()
            .filter(|id| *id > 0)
            .map(Patch::Value)
            .ok_or_else(|| invalid("category_id must be a positive integer")),
        Some(_) => Err(invalid("category_id must be a positive integer")),
    }
}

fn parse_status(v: &Value) -> Result<ProductStatus, AppError> {
    v.as_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| invalid("invalid status"))
}

/// A finite whole number >= 0, given as a JSON number or a numeric string.
fn non_negative_whole(v: &Value) -> Option<i64> {
    let n = match v {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return (i >= 0).then_some(i);
            }
            n.as_f64()?
        }
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !n.is_finite() || n < 0.0 || n.fract() != 0.0 || n > i64::MAX as f64 {
        return None;
    }
    Some(n as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(m) => m,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    fn variant(sku: &str) -> Value {
        json!({ "sku": sku, "name": "Default", "price_cents": 999, "inventory_count": 10 })
    }

    #[test]
    fn accepts_minimal_product() {
        let cmd = RequestValidator::product_create(&json!({
            "name": "  Test Product ",
            "variants": [variant("T-1")]
        }))
        .unwrap();
        assert_eq!(cmd.name, "Test Product");
        assert_eq!(cmd.status, ProductStatus::Active);
        assert_eq!(cmd.category_id, None);
        assert_eq!(cmd.variants.len(), 1);
        assert_eq!(cmd.variants[0].price_cents, 999);
    }

    #[test]
    fn name_is_required_and_trimmed() {
        let err = RequestValidator::product_create(&json!({ "name": "   ", "variants": [variant("A")] })).unwrap_err();
        assert_eq!(message(err), "name required");
        let err = RequestValidator::product_create(&json!({ "variants": [variant("A")] })).unwrap_err();
        assert_eq!(message(err), "name required");
    }

    #[test]
    fn rejects_unknown_status() {
        let err = RequestValidator::product_create(&json!({
            "name": "P", "status": "deleted", "variants": [variant("A")]
        }))
        .unwrap_err();
        assert_eq!(message(err), "invalid status");
    }

    #[test]
    fn requires_at_least_one_variant() {
        for body in [json!({ "name": "P", "variants": [] }), json!({ "name": "P" }), json!({ "name": "P", "variants": {} })] {
            let err = RequestValidator::product_create(&body).unwrap_err();
            assert_eq!(message(err), "at least one variant required");
        }
    }

    #[test]
    fn duplicate_sku_in_request_fails_on_later_index() {
        let err = RequestValidator::product_create(&json!({
            "name": "P",
            "variants": [variant("abc-1"), variant("X"), variant("ABC-1")]
        }))
        .unwrap_err();
        assert_eq!(message(err), "Variant #3: SKU must be unique");
    }

    #[test]
    fn first_violation_wins() {
        let err = RequestValidator::product_create(&json!({
            "name": "P",
            "variants": [
                variant("A"),
                { "name": "no sku", "price_cents": -1, "inventory_count": -1 },
                { "sku": "C", "name": "", "price_cents": 1, "inventory_count": 1 }
            ]
        }))
        .unwrap_err();
        assert_eq!(message(err), "Variant #2: SKU is required");
    }

    #[test]
    fn numeric_rules() {
        let cases = [
            (json!(-100), json!(1), "Variant #1: price_cents must be a non-negative number"),
            (json!(100), json!(-5), "Variant #1: inventory_count must be a non-negative number"),
            (json!("abc"), json!(1), "Variant #1: price_cents must be a non-negative number"),
            (json!(null), json!(1), "Variant #1: price_cents must be a non-negative number"),
            (json!(1.5), json!(1), "Variant #1: price_cents must be a non-negative number"),
        ];
        for (price, inventory, expected) in cases {
            let err = RequestValidator::product_create(&json!({
                "name": "P",
                "variants": [{ "sku": "S", "name": "N", "price_cents": price, "inventory_count": inventory }]
            }))
            .unwrap_err();
            assert_eq!(message(err), expected);
        }
    }

    #[test]
    fn numeric_strings_and_whole_floats_are_accepted() {
        let cmd = RequestValidator::product_create(&json!({
            "name": "P",
            "variants": [{ "sku": "S", "name": "N", "price_cents": "1299", "inventory_count": 4.0 }]
        }))
        .unwrap();
        assert_eq!(cmd.variants[0].price_cents, 1299);
        assert_eq!(cmd.variants[0].inventory_count, 4);
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = RequestValidator::product_create(&json!([1, 2])).unwrap_err();
        assert_eq!(message(err), "body must be a JSON object");
    }

    #[test]
    fn variant_update_only_touches_present_fields() {
        let patch = RequestValidator::variant_update(&json!({ "price_cents": 4242 })).unwrap();
        assert_eq!(patch.price_cents, Some(4242));
        assert_eq!(patch.inventory_count, None);

        let patch = RequestValidator::variant_update(&json!({ "sku": "NEW", "name": "x" })).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn variant_update_rejects_negatives() {
        let err = RequestValidator::variant_update(&json!({ "price_cents": -1 })).unwrap_err();
        assert_eq!(message(err), "price_cents must be a non-negative number");
        let err = RequestValidator::variant_update(&json!({ "inventory_count": -10 })).unwrap_err();
        assert_eq!(message(err), "inventory_count must be a non-negative integer");
        let err = RequestValidator::variant_update(&json!({ "inventory_count": null })).unwrap_err();
        assert_eq!(message(err), "inventory_count must be a non-negative integer");
    }

    #[test]
    fn product_update_distinguishes_null_from_absent() {
        let patch = RequestValidator::product_update(&json!({ "description": null })).unwrap();
        assert_eq!(patch.description, Patch::Null);
        assert!(patch.category_id.is_absent());
        assert_eq!(patch.name, None);

        let patch = RequestValidator::product_update(&json!({ "category_id": 2, "status": "archived" })).unwrap();
        assert_eq!(patch.category_id, Patch::Value(2));
        assert_eq!(patch.status, Some(ProductStatus::Archived));
    }

    #[test]
    fn product_update_rejects_bad_fields() {
        let err = RequestValidator::product_update(&json!({ "name": null })).unwrap_err();
        assert_eq!(message(err), "name required");
        let err = RequestValidator::product_update(&json!({ "status": "gone" })).unwrap_err();
        assert_eq!(message(err), "invalid status");
        let err = RequestValidator::product_update(&json!({ "category_id": "one" })).unwrap_err();
        assert_eq!(message(err), "category_id must be a positive integer");
    }
}
