//! # Stock View
//!
//! Stock movement journal. Recording a movement adjusts the quantity on
//! its product, so both documents are saved together.

use std::collections::HashMap;

use dioxus::prelude::*;

use khata_types::{MovementKind, StockMovement};

use crate::state::AppState;

/// Stock view component.
#[component]
pub fn Stock() -> Element {
    let mut state = use_context::<AppState>();

    // Form state
    let mut product_input = use_signal(String::new);
    let mut kind_input = use_signal(|| "in".to_string());
    let mut quantity_input = use_signal(String::new);
    let mut note_input = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let product_id = product_input.read().clone();
        let quantity = match quantity_input.read().trim().parse::<f64>() {
            Ok(quantity) if quantity > 0.0 => quantity,
            _ => {
                form_error.set(Some("Quantity must be a positive number".to_string()));
                return;
            }
        };
        let kind = if kind_input.read().as_str() == "out" {
            MovementKind::Out
        } else {
            MovementKind::In
        };

        let mut products = state.products.read().clone();
        let Some(product) = products.iter_mut().find(|p| p.id == product_id) else {
            form_error.set(Some("Select a product".to_string()));
            return;
        };

        let mut movement = StockMovement::new(product_id, kind, quantity);
        movement.note = note_input.read().trim().to_string();
        product.stock_quantity += movement.signed_quantity();

        let mut stock = state.stock.read().clone();
        stock.push(movement);

        state.save_stock(stock, products);
        quantity_input.set(String::new());
        note_input.set(String::new());
        form_error.set(None);
    };

    let products = state.products.read();
    let stock = state.stock.read();

    let product_names: HashMap<&str, &str> = products
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();

    rsx! {
        div {
            class: "stock-view",

            h2 { class: "mb-lg", "Stock" }

            form {
                class: "record-form",
                onsubmit: on_submit,

                h3 { class: "mb-md", "Record Movement" }

                div {
                    class: "form-row mb-md",

                    div {
                        class: "form-field",

                        label { r#for: "movement-product", "Product" }
                        select {
                            id: "movement-product",
                            value: "{product_input}",
                            onchange: move |evt| product_input.set(evt.value().clone()),

                            option { value: "", "Select product..." }
                            for product in products.iter() {
                                option { value: "{product.id}", "{product.name}" }
                            }
                        }
                    }

                    div {
                        class: "form-field",

                        label { r#for: "movement-kind", "Direction" }
                        select {
                            id: "movement-kind",
                            value: "{kind_input}",
                            onchange: move |evt| kind_input.set(evt.value().clone()),

                            option { value: "in", "Stock In" }
                            option { value: "out", "Stock Out" }
                        }
                    }

                    div {
                        class: "form-field",

                        label { r#for: "movement-quantity", "Quantity" }
                        input {
                            id: "movement-quantity",
                            r#type: "text",
                            value: "{quantity_input}",
                            placeholder: "0",
                            oninput: move |evt| quantity_input.set(evt.value().clone()),
                        }
                    }
                }

                div {
                    class: "form-field mb-md",

                    label { r#for: "movement-note", "Note (optional)" }
                    input {
                        id: "movement-note",
                        r#type: "text",
                        value: "{note_input}",
                        placeholder: "Supplier, reason, ...",
                        oninput: move |evt| note_input.set(evt.value().clone()),
                    }
                }

                if let Some(err) = form_error.read().as_ref() {
                    div {
                        class: "alert alert-error mb-md",
                        "{err}"
                    }
                }

                button {
                    class: "btn-primary",
                    r#type: "submit",
                    "Record Movement"
                }
            }

            if stock.is_empty() {
                p { class: "text-secondary", "No stock movements yet." }
            } else {
                table {
                    class: "data-table",

                    thead {
                        tr {
                            th { "Date" }
                            th { "Product" }
                            th { "Direction" }
                            th { class: "num", "Quantity" }
                            th { "Note" }
                        }
                    }

                    tbody {
                        // Newest first
                        for movement in stock.iter().rev() {
                            tr {
                                td { "{movement.date}" }
                                td {
                                    {product_names
                                        .get(movement.product_id.as_str())
                                        .copied()
                                        .unwrap_or(movement.product_id.as_str())}
                                }
                                td {
                                    if movement.kind == MovementKind::In {
                                        span { class: "badge badge-in", "In" }
                                    } else {
                                        span { class: "badge badge-out", "Out" }
                                    }
                                }
                                td { class: "num", "{movement.quantity}" }
                                td { class: "text-secondary", "{movement.note}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
