//! Product catalog types.

use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Stock-keeping unit code.
    #[serde(default)]
    pub sku: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Selling price per unit.
    #[serde(default)]
    pub unit_price: f64,
    /// Tax rate as a percentage (e.g. 18.0).
    #[serde(default)]
    pub tax_rate: f64,
    /// Current quantity on hand.
    #[serde(default)]
    pub stock_quantity: f64,
}

impl Product {
    /// Creates a new product with a generated id.
    pub fn new(name: impl Into<String>, unit_price: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            sku: String::new(),
            description: String::new(),
            unit_price,
            tax_rate: 0.0,
            stock_quantity: 0.0,
        }
    }

    /// Sets the SKU.
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_ids_are_unique() {
        let a = Product::new("Widget", 10.0);
        let b = Product::new("Widget", 10.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_product_deserializes_with_missing_fields() {
        // Older documents may predate some fields.
        let json = r#"{"id":"p1","name":"Bolt"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "Bolt");
        assert_eq!(product.unit_price, 0.0);
        assert_eq!(product.stock_quantity, 0.0);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product::new("Widget", 25.0).with_sku("W-1");
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"unitPrice\""));
        assert!(json.contains("\"stockQuantity\""));
    }
}
