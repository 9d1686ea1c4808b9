use rust_decimal::Decimal;

use storefront_core::{DomainError, DomainResult, ProductId};

/// Validated product input, shared by create and update.
///
/// Construct via [`ProductRecord::new`]; a record that exists is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    name: String,
    value: Decimal,
}

impl ProductRecord {
    /// Validate raw input fields.
    ///
    /// `name` must be present and not blank, `value` must be present. Every
    /// violation is reported in a single `Validation` error.
    pub fn new(name: Option<String>, value: Option<Decimal>) -> DomainResult<Self> {
        let mut problems = Vec::new();

        let name = match name {
            Some(n) if !n.trim().is_empty() => Some(n),
            Some(_) => {
                problems.push("name must not be blank");
                None
            }
            None => {
                problems.push("name is required");
                None
            }
        };

        if value.is_none() {
            problems.push("value is required");
        }

        match (name, value) {
            (Some(name), Some(value)) if problems.is_empty() => Ok(Self { name, value }),
            _ => Err(DomainError::validation(problems.join("; "))),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Decimal {
        self.value
    }
}

/// Entity: Product.
///
/// Identity is the `id`; every other field is overwritten wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    value: Decimal,
}

impl Product {
    /// Build a new product from a validated record.
    pub fn create(id: ProductId, record: ProductRecord) -> Self {
        Self {
            id,
            name: record.name,
            value: record.value,
        }
    }

    /// Rebuild a product from stored fields (storage adapters only).
    pub fn from_parts(id: ProductId, name: String, value: Decimal) -> Self {
        Self { id, name, value }
    }

    /// Replace all mutable fields; `id` is untouched.
    pub fn overwrite(&mut self, record: ProductRecord) {
        self.name = record.name;
        self.value = record.value;
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Decimal {
        self.value
    }
}
