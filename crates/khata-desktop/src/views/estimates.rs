//! # Estimates View
//!
//! Estimates with line items and a status lifecycle. An accepted
//! estimate can be converted into a draft invoice.

use dioxus::prelude::*;

use khata_types::{Estimate, EstimateStatus, Invoice, LineItem};

use super::{format_amount, next_document_number};
use crate::state::AppState;

/// Estimates view component.
#[component]
pub fn Estimates() -> Element {
    let mut state = use_context::<AppState>();

    // Form state
    let mut customer_input = use_signal(String::new);
    let mut valid_until_input = use_signal(String::new);
    let mut item_product = use_signal(String::new);
    let mut item_quantity = use_signal(String::new);
    let mut draft_items = use_signal(Vec::<LineItem>::new);
    let mut form_error = use_signal(|| Option::<String>::None);

    let on_add_item = move |_| {
        let product_id = item_product.read().clone();
        let Some(product) = state
            .products
            .read()
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
        else {
            form_error.set(Some("Select a product".to_string()));
            return;
        };
        let quantity = match item_quantity.read().trim().parse::<f64>() {
            Ok(quantity) if quantity > 0.0 => quantity,
            _ => {
                form_error.set(Some("Quantity must be a positive number".to_string()));
                return;
            }
        };

        draft_items.write().push(LineItem {
            product_id,
            description: product.name,
            quantity,
            unit_price: product.unit_price,
        });
        item_quantity.set(String::new());
        form_error.set(None);
    };

    let on_create = move |evt: Event<FormData>| {
        evt.prevent_default();

        let customer = customer_input.read().trim().to_string();
        if customer.is_empty() {
            form_error.set(Some("Customer name is required".to_string()));
            return;
        }
        if draft_items.read().is_empty() {
            form_error.set(Some("Add at least one item".to_string()));
            return;
        }

        let mut estimates = state.estimates.read().clone();
        let number = next_document_number("EST", estimates.iter().map(|e| e.number.as_str()));
        let mut estimate = Estimate::new(number);
        estimate.customer.name = customer;
        estimate.valid_until = valid_until_input.read().trim().to_string();
        estimate.items = draft_items.read().clone();
        estimates.push(estimate);

        state.save_estimates(estimates);
        customer_input.set(String::new());
        valid_until_input.set(String::new());
        draft_items.set(Vec::new());
        form_error.set(None);
    };

    let on_status = move |(id, status): (String, EstimateStatus)| {
        let mut estimates = state.estimates.read().clone();
        if let Some(estimate) = estimates.iter_mut().find(|e| e.id == id) {
            estimate.status = status;
        }
        state.save_estimates(estimates);
    };

    let on_delete = move |id: String| {
        let estimates: Vec<Estimate> = state
            .estimates
            .read()
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        state.save_estimates(estimates);
    };

    // Converting copies the customer and items onto a fresh draft invoice.
    let on_convert = move |id: String| {
        let Some(estimate) = state
            .estimates
            .read()
            .iter()
            .find(|e| e.id == id)
            .cloned()
        else {
            return;
        };

        let mut invoices = state.invoices.read().clone();
        let number = next_document_number("INV", invoices.iter().map(|i| i.number.as_str()));
        let mut invoice = Invoice::new(number);
        invoice.customer = estimate.customer;
        invoice.items = estimate.items;
        invoice.notes = format!("From estimate {}", estimate.number);
        invoices.push(invoice);

        state.save_invoices(invoices);
    };

    let products = state.products.read();
    let estimates = state.estimates.read();
    let draft_total: f64 = draft_items.read().iter().map(LineItem::amount).sum();

    rsx! {
        div {
            class: "estimates-view",

            h2 { class: "mb-lg", "Estimates" }

            form {
                class: "record-form",
                onsubmit: on_create,

                h3 { class: "mb-md", "New Estimate" }

                div {
                    class: "form-row mb-md",

                    div {
                        class: "form-field",

                        label { r#for: "estimate-customer", "Customer" }
                        input {
                            id: "estimate-customer",
                            r#type: "text",
                            value: "{customer_input}",
                            oninput: move |evt| customer_input.set(evt.value().clone()),
                        }
                    }

                    div {
                        class: "form-field",

                        label { r#for: "estimate-valid-until", "Valid Until" }
                        input {
                            id: "estimate-valid-until",
                            r#type: "text",
                            value: "{valid_until_input}",
                            placeholder: "YYYY-MM-DD",
                            oninput: move |evt| valid_until_input.set(evt.value().clone()),
                        }
                    }
                }

                div {
                    class: "form-row mb-md",

                    div {
                        class: "form-field",

                        label { r#for: "estimate-item-product", "Product" }
                        select {
                            id: "estimate-item-product",
                            value: "{item_product}",
                            onchange: move |evt| item_product.set(evt.value().clone()),

                            option { value: "", "Select product..." }
                            for product in products.iter() {
                                option { value: "{product.id}", "{product.name}" }
                            }
                        }
                    }

                    div {
                        class: "form-field",

                        label { r#for: "estimate-item-quantity", "Quantity" }
                        input {
                            id: "estimate-item-quantity",
                            r#type: "text",
                            value: "{item_quantity}",
                            placeholder: "1",
                            oninput: move |evt| item_quantity.set(evt.value().clone()),
                        }
                    }

                    div {
                        class: "form-field form-field-action",

                        button {
                            class: "btn-ghost",
                            r#type: "button",
                            onclick: on_add_item,
                            "Add Item"
                        }
                    }
                }

                if !draft_items.read().is_empty() {
                    table {
                        class: "data-table mb-md",

                        thead {
                            tr {
                                th { "Item" }
                                th { class: "num", "Qty" }
                                th { class: "num", "Unit Price" }
                                th { class: "num", "Amount" }
                                th { "" }
                            }
                        }

                        tbody {
                            for (index, item) in draft_items.read().iter().enumerate() {
                                tr {
                                    td { "{item.description}" }
                                    td { class: "num", "{item.quantity}" }
                                    td { class: "num", {format_amount(item.unit_price)} }
                                    td { class: "num", {format_amount(item.amount())} }
                                    td {
                                        button {
                                            class: "btn-sm btn-danger",
                                            r#type: "button",
                                            onclick: move |_| {
                                                draft_items.write().remove(index);
                                            },
                                            "Remove"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    p {
                        class: "num mb-md",
                        strong { "Total: " }
                        {format_amount(draft_total)}
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
                    "Create Estimate"
                }
            }

            if estimates.is_empty() {
                p { class: "text-secondary", "No estimates yet." }
            } else {
                table {
                    class: "data-table",

                    thead {
                        tr {
                            th { "Number" }
                            th { "Customer" }
                            th { "Date" }
                            th { class: "num", "Total" }
                            th { "Status" }
                            th { "" }
                        }
                    }

                    tbody {
                        for estimate in estimates.iter() {
                            EstimateRow {
                                estimate: estimate.clone(),
                                on_status,
                                on_delete,
                                on_convert,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EstimateRow(
    estimate: Estimate,
    on_status: EventHandler<(String, EstimateStatus)>,
    on_delete: EventHandler<String>,
    on_convert: EventHandler<String>,
) -> Element {
    let status = estimate.status;
    let status_id = estimate.id.clone();
    let delete_id = estimate.id.clone();
    let convert_id = estimate.id.clone();

    rsx! {
        tr {
            td { class: "mono", "{estimate.number}" }
            td { "{estimate.customer.name}" }
            td { "{estimate.date}" }
            td { class: "num", {format_amount(estimate.total())} }
            td {
                select {
                    class: "status-select",
                    onchange: move |evt| {
                        if let Some(next) = EstimateStatus::ALL
                            .iter()
                            .find(|s| s.label() == evt.value())
                        {
                            on_status.call((status_id.clone(), *next));
                        }
                    },

                    for candidate in EstimateStatus::ALL {
                        option {
                            value: "{candidate.label()}",
                            selected: candidate == status,
                            "{candidate.label()}"
                        }
                    }
                }
            }
            td {
                class: "row-actions",

                if status == EstimateStatus::Accepted {
                    button {
                        class: "btn-sm btn-ghost",
                        onclick: move |_| on_convert.call(convert_id.clone()),
                        "To Invoice"
                    }
                }

                button {
                    class: "btn-sm btn-danger",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}
