//! # Reports View
//!
//! Read-only aggregates over invoices and stock.

use dioxus::prelude::*;

use khata_types::{
    invoice_totals_by_status, net_stock_by_product, outstanding_revenue, InvoiceStatus,
};

use super::format_amount;
use crate::state::AppState;

/// Reports view component.
#[component]
pub fn Reports() -> Element {
    let state = use_context::<AppState>();
    let products = state.products.read();
    let stock = state.stock.read();
    let invoices = state.invoices.read();

    let totals = invoice_totals_by_status(&invoices);
    let outstanding = outstanding_revenue(&invoices);
    let net = net_stock_by_product(&stock);

    rsx! {
        div {
            class: "reports-view",

            h2 { class: "mb-lg", "Reports" }

            div {
                class: "report-section",

                h3 { class: "mb-md", "Revenue by Invoice Status" }

                table {
                    class: "data-table",

                    thead {
                        tr {
                            th { "Status" }
                            th { class: "num", "Total" }
                        }
                    }

                    tbody {
                        for status in InvoiceStatus::ALL {
                            tr {
                                td { "{status.label()}" }
                                td {
                                    class: "num",
                                    {format_amount(totals.get(&status).copied().unwrap_or(0.0))}
                                }
                            }
                        }
                    }
                }

                p {
                    class: "report-headline",
                    strong { "Outstanding: " }
                    {format_amount(outstanding)}
                }
            }

            div {
                class: "report-section",

                h3 { class: "mb-md", "Stock Balances" }

                if products.is_empty() {
                    p { class: "text-secondary", "No products yet." }
                } else {
                    table {
                        class: "data-table",

                        thead {
                            tr {
                                th { "Product" }
                                th { class: "num", "On Hand" }
                                th { class: "num", "Net Movements" }
                            }
                        }

                        tbody {
                            for product in products.iter() {
                                tr {
                                    td { "{product.name}" }
                                    td { class: "num", "{product.stock_quantity}" }
                                    td {
                                        class: "num",
                                        {net.get(&product.id).copied().unwrap_or(0.0).to_string()}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
