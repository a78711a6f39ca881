//! Estimate and invoice types.

use serde::{Deserialize, Serialize};

/// A customer as recorded on an estimate or invoice.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer name.
    #[serde(default)]
    pub name: String,
    /// Billing address.
    #[serde(default)]
    pub address: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: String,
}

/// One line on an estimate or invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Id of the product this line refers to. Not validated against the
    /// products collection; documents are independent of each other.
    #[serde(default)]
    pub product_id: String,
    /// Line description.
    #[serde(default)]
    pub description: String,
    /// Quantity sold.
    pub quantity: f64,
    /// Price per unit.
    pub unit_price: f64,
}

impl LineItem {
    /// Line amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Lifecycle state of an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimateStatus {
    /// Being drafted.
    #[default]
    Draft,
    /// Sent to the customer.
    Sent,
    /// Accepted by the customer.
    Accepted,
    /// Declined by the customer.
    Declined,
}

impl EstimateStatus {
    /// All states, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Draft, Self::Sent, Self::Accepted, Self::Declined];

    /// Human-facing label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Accepted => "Accepted",
            Self::Declined => "Declined",
        }
    }
}

/// An estimate (quotation) issued to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    /// Unique identifier.
    pub id: String,
    /// Human-facing document number.
    #[serde(default)]
    pub number: String,
    /// Customer details.
    #[serde(default)]
    pub customer: Customer,
    /// Issue date, ISO 8601.
    #[serde(default)]
    pub date: String,
    /// Expiry date, ISO 8601.
    #[serde(default)]
    pub valid_until: String,
    /// Line items.
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Lifecycle state.
    #[serde(default)]
    pub status: EstimateStatus,
}

impl Estimate {
    /// Creates an empty draft estimate dated today, with a generated id.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            number: number.into(),
            customer: Customer::default(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            valid_until: String::new(),
            items: Vec::new(),
            status: EstimateStatus::Draft,
        }
    }

    /// Sum of all line amounts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::amount).sum()
    }
}

/// Lifecycle state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Being drafted.
    #[default]
    Draft,
    /// Sent to the customer.
    Sent,
    /// Paid in full.
    Paid,
    /// Past its due date without payment.
    Overdue,
}

impl InvoiceStatus {
    /// All states, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Draft, Self::Sent, Self::Paid, Self::Overdue];

    /// Human-facing label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
        }
    }
}

/// An invoice issued to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Unique identifier.
    pub id: String,
    /// Human-facing document number.
    #[serde(default)]
    pub number: String,
    /// Customer details.
    #[serde(default)]
    pub customer: Customer,
    /// Issue date, ISO 8601.
    #[serde(default)]
    pub date: String,
    /// Payment due date, ISO 8601.
    #[serde(default)]
    pub due_date: String,
    /// Line items.
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Lifecycle state.
    #[serde(default)]
    pub status: InvoiceStatus,
    /// Free-form notes printed on the document.
    #[serde(default)]
    pub notes: String,
}

impl Invoice {
    /// Creates an empty draft invoice dated today, with a generated id.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            number: number.into(),
            customer: Customer::default(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            due_date: String::new(),
            items: Vec::new(),
            status: InvoiceStatus::Draft,
            notes: String::new(),
        }
    }

    /// Sum of all line amounts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, unit_price: f64) -> LineItem {
        LineItem {
            product_id: "p1".to_string(),
            description: "item".to_string(),
            quantity,
            unit_price,
        }
    }

    #[test]
    fn test_invoice_total_sums_line_amounts() {
        let mut invoice = Invoice::new("INV-001");
        invoice.items.push(item(2.0, 100.0));
        invoice.items.push(item(1.5, 40.0));
        assert_eq!(invoice.total(), 260.0);
    }

    #[test]
    fn test_empty_estimate_total_is_zero() {
        let estimate = Estimate::new("EST-001");
        assert_eq!(estimate.total(), 0.0);
        assert_eq!(estimate.status, EstimateStatus::Draft);
        assert!(!estimate.date.is_empty());
    }

    #[test]
    fn test_invoice_roundtrip_keeps_status() {
        let mut invoice = Invoice::new("INV-002");
        invoice.status = InvoiceStatus::Paid;
        invoice.items.push(item(1.0, 10.0));

        let json = serde_json::to_string(&invoice).unwrap();
        assert!(json.contains("\"status\":\"paid\""));
        assert!(json.contains("\"dueDate\""));

        let restored: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, invoice);
    }

    #[test]
    fn test_minimal_document_deserializes() {
        // The shell must load documents created by older clients.
        let json = r#"{"id":"i1","items":[{"quantity":3,"unitPrice":7.5}]}"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.total(), 22.5);
        assert_eq!(invoice.status, InvoiceStatus::Draft);
    }
}
