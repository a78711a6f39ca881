//! # Invoices View
//!
//! Invoices with line items and a status lifecycle.

use dioxus::prelude::*;

use khata_types::{Invoice, InvoiceStatus, LineItem};

use super::{format_amount, next_document_number};
use crate::state::AppState;

/// Invoices view component.
#[component]
pub fn Invoices() -> Element {
    let mut state = use_context::<AppState>();

    // Form state
    let mut customer_input = use_signal(String::new);
    let mut due_date_input = use_signal(String::new);
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

        let mut invoices = state.invoices.read().clone();
        let number = next_document_number("INV", invoices.iter().map(|i| i.number.as_str()));
        let mut invoice = Invoice::new(number);
        invoice.customer.name = customer;
        invoice.due_date = due_date_input.read().trim().to_string();
        invoice.items = draft_items.read().clone();
        invoices.push(invoice);

        state.save_invoices(invoices);
        customer_input.set(String::new());
        due_date_input.set(String::new());
        draft_items.set(Vec::new());
        form_error.set(None);
    };

    let on_status = move |(id, status): (String, InvoiceStatus)| {
        let mut invoices = state.invoices.read().clone();
        if let Some(invoice) = invoices.iter_mut().find(|i| i.id == id) {
            invoice.status = status;
        }
        state.save_invoices(invoices);
    };

    let on_delete = move |id: String| {
        let invoices: Vec<Invoice> = state
            .invoices
            .read()
            .iter()
            .filter(|i| i.id != id)
            .cloned()
            .collect();
        state.save_invoices(invoices);
    };

    let products = state.products.read();
    let invoices = state.invoices.read();
    let draft_total: f64 = draft_items.read().iter().map(LineItem::amount).sum();

    rsx! {
        div {
            class: "invoices-view",

            h2 { class: "mb-lg", "Invoices" }

            form {
                class: "record-form",
                onsubmit: on_create,

                h3 { class: "mb-md", "New Invoice" }

                div {
                    class: "form-row mb-md",

                    div {
                        class: "form-field",

                        label { r#for: "invoice-customer", "Customer" }
                        input {
                            id: "invoice-customer",
                            r#type: "text",
                            value: "{customer_input}",
                            oninput: move |evt| customer_input.set(evt.value().clone()),
                        }
                    }

                    div {
                        class: "form-field",

                        label { r#for: "invoice-due-date", "Due Date" }
                        input {
                            id: "invoice-due-date",
                            r#type: "text",
                            value: "{due_date_input}",
                            placeholder: "YYYY-MM-DD",
                            oninput: move |evt| due_date_input.set(evt.value().clone()),
                        }
                    }
                }

                div {
                    class: "form-row mb-md",

                    div {
                        class: "form-field",

                        label { r#for: "invoice-item-product", "Product" }
                        select {
                            id: "invoice-item-product",
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

                        label { r#for: "invoice-item-quantity", "Quantity" }
                        input {
                            id: "invoice-item-quantity",
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
                    "Create Invoice"
                }
            }

            if invoices.is_empty() {
                p { class: "text-secondary", "No invoices yet." }
            } else {
                table {
                    class: "data-table",

                    thead {
                        tr {
                            th { "Number" }
                            th { "Customer" }
                            th { "Date" }
                            th { "Due" }
                            th { class: "num", "Total" }
                            th { "Status" }
                            th { "" }
                        }
                    }

                    tbody {
                        for invoice in invoices.iter() {
                            InvoiceRow {
                                invoice: invoice.clone(),
                                on_status,
                                on_delete,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InvoiceRow(
    invoice: Invoice,
    on_status: EventHandler<(String, InvoiceStatus)>,
    on_delete: EventHandler<String>,
) -> Element {
    let status = invoice.status;
    let status_id = invoice.id.clone();
    let delete_id = invoice.id.clone();

    rsx! {
        tr {
            td { class: "mono", "{invoice.number}" }
            td { "{invoice.customer.name}" }
            td { "{invoice.date}" }
            td { "{invoice.due_date}" }
            td { class: "num", {format_amount(invoice.total())} }
            td {
                select {
                    class: "status-select",
                    onchange: move |evt| {
                        if let Some(next) = InvoiceStatus::ALL
                            .iter()
                            .find(|s| s.label() == evt.value())
                        {
                            on_status.call((status_id.clone(), *next));
                        }
                    },

                    for candidate in InvoiceStatus::ALL {
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

                button {
                    class: "btn-sm btn-danger",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}
