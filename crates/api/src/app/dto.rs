use rust_decimal::Decimal;
use serde::Deserialize;

use storefront_core::DomainResult;
use storefront_products::{Product, ProductRecord};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /products` and `PUT /products/{id}`.
///
/// Fields are optional at the wire level so a missing field becomes a
/// validation error (400) rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ProductRecordRequest {
    pub name: Option<String>,
    pub value: Option<Decimal>,
}

impl ProductRecordRequest {
    pub fn into_record(self) -> DomainResult<ProductRecord> {
        ProductRecord::new(self.name, self.value)
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(p: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": p.id().to_string(),
        "name": p.name(),
        "value": p.value(),
    })
}
