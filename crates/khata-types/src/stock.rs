//! Stock movement types.

use serde::{Deserialize, Serialize};

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Goods received into stock.
    In,
    /// Goods issued out of stock.
    Out,
}

/// A single stock movement for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    /// Unique identifier.
    pub id: String,
    /// Id of the product this movement applies to.
    pub product_id: String,
    /// Movement direction.
    pub kind: MovementKind,
    /// Quantity moved (always positive; direction comes from `kind`).
    pub quantity: f64,
    /// Movement date as an ISO 8601 string.
    #[serde(default)]
    pub date: String,
    /// Optional note (supplier, reason, ...).
    #[serde(default)]
    pub note: String,
}

impl StockMovement {
    /// Creates a new movement dated today, with a generated id.
    pub fn new(product_id: impl Into<String>, kind: MovementKind, quantity: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            product_id: product_id.into(),
            kind,
            quantity,
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            note: String::new(),
        }
    }

    /// Quantity with sign applied: positive for goods in, negative for out.
    #[must_use]
    pub fn signed_quantity(&self) -> f64 {
        match self.kind {
            MovementKind::In => self.quantity,
            MovementKind::Out => -self.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_quantity() {
        let received = StockMovement::new("p1", MovementKind::In, 5.0);
        let issued = StockMovement::new("p1", MovementKind::Out, 2.0);
        assert_eq!(received.signed_quantity(), 5.0);
        assert_eq!(issued.signed_quantity(), -2.0);
    }

    #[test]
    fn test_movement_kind_serializes_lowercase() {
        let movement = StockMovement::new("p1", MovementKind::Out, 1.0);
        let json = serde_json::to_string(&movement).unwrap();
        assert!(json.contains("\"kind\":\"out\""));
        assert!(json.contains("\"productId\""));
    }
}
