//! Aggregates over the record collections.
//!
//! Pure helpers used by the dashboard and report views. They never touch
//! storage; callers pass the in-memory collections.

use std::collections::HashMap;

use crate::{Invoice, InvoiceStatus, StockMovement};

/// Invoice totals grouped by lifecycle state.
#[must_use]
pub fn invoice_totals_by_status(invoices: &[Invoice]) -> HashMap<InvoiceStatus, f64> {
    let mut totals = HashMap::new();
    for invoice in invoices {
        *totals.entry(invoice.status).or_insert(0.0) += invoice.total();
    }
    totals
}

/// Total value of invoices that have not been paid.
#[must_use]
pub fn outstanding_revenue(invoices: &[Invoice]) -> f64 {
    invoices
        .iter()
        .filter(|i| i.status != InvoiceStatus::Paid)
        .map(Invoice::total)
        .sum()
}

/// Net stock change per product id across all movements.
#[must_use]
pub fn net_stock_by_product(movements: &[StockMovement]) -> HashMap<String, f64> {
    let mut net = HashMap::new();
    for movement in movements {
        *net.entry(movement.product_id.clone()).or_insert(0.0) += movement.signed_quantity();
    }
    net
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineItem, MovementKind};

    fn invoice(status: InvoiceStatus, amount: f64) -> Invoice {
        let mut invoice = Invoice::new("INV");
        invoice.status = status;
        invoice.items.push(LineItem {
            product_id: String::new(),
            description: String::new(),
            quantity: 1.0,
            unit_price: amount,
        });
        invoice
    }

    #[test]
    fn test_totals_by_status() {
        let invoices = vec![
            invoice(InvoiceStatus::Paid, 100.0),
            invoice(InvoiceStatus::Paid, 50.0),
            invoice(InvoiceStatus::Sent, 30.0),
        ];
        let totals = invoice_totals_by_status(&invoices);
        assert_eq!(totals[&InvoiceStatus::Paid], 150.0);
        assert_eq!(totals[&InvoiceStatus::Sent], 30.0);
        assert!(!totals.contains_key(&InvoiceStatus::Overdue));
    }

    #[test]
    fn test_outstanding_excludes_paid() {
        let invoices = vec![
            invoice(InvoiceStatus::Paid, 100.0),
            invoice(InvoiceStatus::Sent, 30.0),
            invoice(InvoiceStatus::Overdue, 20.0),
        ];
        assert_eq!(outstanding_revenue(&invoices), 50.0);
    }

    #[test]
    fn test_net_stock() {
        let movements = vec![
            StockMovement::new("p1", MovementKind::In, 10.0),
            StockMovement::new("p1", MovementKind::Out, 4.0),
            StockMovement::new("p2", MovementKind::In, 2.0),
        ];
        let net = net_stock_by_product(&movements);
        assert_eq!(net["p1"], 6.0);
        assert_eq!(net["p2"], 2.0);
    }
}
