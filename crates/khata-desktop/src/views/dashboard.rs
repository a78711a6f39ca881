//! # Dashboard View
//!
//! Headline figures and the most recent invoices.

use dioxus::prelude::*;

use khata_types::{outstanding_revenue, Invoice};

use super::format_amount;
use crate::state::AppState;

/// Dashboard view component.
#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let products = state.products.read();
    let stock = state.stock.read();
    let estimates = state.estimates.read();
    let invoices = state.invoices.read();

    let outstanding = outstanding_revenue(&invoices);
    let recent: Vec<Invoice> = invoices.iter().rev().take(5).cloned().collect();

    rsx! {
        div {
            class: "dashboard-view",

            h2 { class: "mb-lg", "Dashboard" }

            div {
                class: "stat-grid",

                StatCard { label: "Products", value: products.len().to_string() }
                StatCard { label: "Stock movements", value: stock.len().to_string() }
                StatCard { label: "Estimates", value: estimates.len().to_string() }
                StatCard { label: "Invoices", value: invoices.len().to_string() }
                StatCard { label: "Outstanding", value: format_amount(outstanding) }
            }

            h3 { class: "mb-md", "Recent Invoices" }

            if recent.is_empty() {
                p { class: "text-secondary", "No invoices yet." }
            } else {
                table {
                    class: "data-table",

                    thead {
                        tr {
                            th { "Number" }
                            th { "Customer" }
                            th { "Date" }
                            th { "Status" }
                            th { class: "num", "Total" }
                        }
                    }

                    tbody {
                        for invoice in recent {
                            tr {
                                td { class: "mono", "{invoice.number}" }
                                td { "{invoice.customer.name}" }
                                td { "{invoice.date}" }
                                td { "{invoice.status.label()}" }
                                td { class: "num", {format_amount(invoice.total())} }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One headline figure.
#[component]
fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "stat-card",

            div { class: "stat-value", "{value}" }
            div { class: "stat-label", "{label}" }
        }
    }
}
