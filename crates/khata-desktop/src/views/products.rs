//! # Products View
//!
//! Product catalog with a combined add/edit form.

use dioxus::prelude::*;

use khata_types::Product;

use super::format_amount;
use crate::state::AppState;

/// Products view component.
///
/// One form serves both creation and editing; selecting Edit on a row
/// loads it into the form.
#[component]
pub fn Products() -> Element {
    let mut state = use_context::<AppState>();

    // Form state
    let mut editing_id = use_signal(|| Option::<String>::None);
    let mut name_input = use_signal(String::new);
    let mut sku_input = use_signal(String::new);
    let mut description_input = use_signal(String::new);
    let mut price_input = use_signal(String::new);
    let mut tax_input = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);

    let mut clear_form = move || {
        editing_id.set(None);
        name_input.set(String::new());
        sku_input.set(String::new());
        description_input.set(String::new());
        price_input.set(String::new());
        tax_input.set(String::new());
        form_error.set(None);
    };

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let name = name_input.read().trim().to_string();
        if name.is_empty() {
            form_error.set(Some("Product name is required".to_string()));
            return;
        }
        let unit_price = match price_input.read().trim().parse::<f64>() {
            Ok(price) if price >= 0.0 => price,
            _ => {
                form_error.set(Some("Unit price must be a non-negative number".to_string()));
                return;
            }
        };
        let tax_text = tax_input.read().trim().to_string();
        let tax_rate = if tax_text.is_empty() {
            0.0
        } else {
            match tax_text.parse::<f64>() {
                Ok(rate) if (0.0..=100.0).contains(&rate) => rate,
                _ => {
                    form_error.set(Some("Tax rate must be between 0 and 100".to_string()));
                    return;
                }
            }
        };

        let mut products = state.products.read().clone();
        if let Some(id) = editing_id.read().clone() {
            if let Some(product) = products.iter_mut().find(|p| p.id == id) {
                product.name = name;
                product.sku = sku_input.read().trim().to_string();
                product.description = description_input.read().trim().to_string();
                product.unit_price = unit_price;
                product.tax_rate = tax_rate;
            }
        } else {
            let mut product = Product::new(name, unit_price);
            product.sku = sku_input.read().trim().to_string();
            product.description = description_input.read().trim().to_string();
            product.tax_rate = tax_rate;
            products.push(product);
        }

        state.save_products(products);
        clear_form();
    };

    let on_edit = move |product: Product| {
        editing_id.set(Some(product.id));
        name_input.set(product.name);
        sku_input.set(product.sku);
        description_input.set(product.description);
        price_input.set(product.unit_price.to_string());
        tax_input.set(product.tax_rate.to_string());
        form_error.set(None);
    };

    let on_delete = move |id: String| {
        let products: Vec<Product> = state
            .products
            .read()
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        state.save_products(products);
        if editing_id.read().as_deref() == Some(id.as_str()) {
            clear_form();
        }
    };

    let editing = editing_id.read().is_some();
    let products = state.products.read();

    rsx! {
        div {
            class: "products-view",

            h2 { class: "mb-lg", "Products" }

            form {
                class: "record-form",
                onsubmit: on_submit,

                h3 { class: "mb-md",
                    if editing { "Edit Product" } else { "Add Product" }
                }

                div {
                    class: "form-row mb-md",

                    div {
                        class: "form-field",

                        label { r#for: "product-name", "Name" }
                        input {
                            id: "product-name",
                            r#type: "text",
                            value: "{name_input}",
                            oninput: move |evt| name_input.set(evt.value().clone()),
                        }
                    }

                    div {
                        class: "form-field",

                        label { r#for: "product-sku", "SKU" }
                        input {
                            id: "product-sku",
                            r#type: "text",
                            value: "{sku_input}",
                            oninput: move |evt| sku_input.set(evt.value().clone()),
                        }
                    }
                }

                div {
                    class: "form-field mb-md",

                    label { r#for: "product-description", "Description" }
                    input {
                        id: "product-description",
                        r#type: "text",
                        value: "{description_input}",
                        oninput: move |evt| description_input.set(evt.value().clone()),
                    }
                }

                div {
                    class: "form-row mb-md",

                    div {
                        class: "form-field",

                        label { r#for: "product-price", "Unit Price" }
                        input {
                            id: "product-price",
                            r#type: "text",
                            value: "{price_input}",
                            placeholder: "0.00",
                            oninput: move |evt| price_input.set(evt.value().clone()),
                        }
                    }

                    div {
                        class: "form-field",

                        label { r#for: "product-tax", "Tax Rate (%)" }
                        input {
                            id: "product-tax",
                            r#type: "text",
                            value: "{tax_input}",
                            placeholder: "0",
                            oninput: move |evt| tax_input.set(evt.value().clone()),
                        }
                    }
                }

                if let Some(err) = form_error.read().as_ref() {
                    div {
                        class: "alert alert-error mb-md",
                        "{err}"
                    }
                }

                div {
                    class: "btn-group",

                    button {
                        class: "btn-primary",
                        r#type: "submit",
                        if editing { "Save Product" } else { "Add Product" }
                    }

                    if editing {
                        button {
                            class: "btn-ghost",
                            r#type: "button",
                            onclick: move |_| clear_form(),
                            "Cancel"
                        }
                    }
                }
            }

            if products.is_empty() {
                p { class: "text-secondary", "No products yet. Add one above." }
            } else {
                table {
                    class: "data-table",

                    thead {
                        tr {
                            th { "Name" }
                            th { "SKU" }
                            th { class: "num", "Unit Price" }
                            th { class: "num", "Tax %" }
                            th { class: "num", "In Stock" }
                            th { "" }
                        }
                    }

                    tbody {
                        for product in products.iter() {
                            ProductRow {
                                product: product.clone(),
                                on_edit,
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
fn ProductRow(
    product: Product,
    on_edit: EventHandler<Product>,
    on_delete: EventHandler<String>,
) -> Element {
    let edit_copy = product.clone();
    let delete_id = product.id.clone();

    rsx! {
        tr {
            td { "{product.name}" }
            td { class: "mono", "{product.sku}" }
            td { class: "num", {format_amount(product.unit_price)} }
            td { class: "num", "{product.tax_rate}" }
            td { class: "num", "{product.stock_quantity}" }
            td {
                class: "row-actions",

                button {
                    class: "btn-sm btn-ghost",
                    onclick: move |_| on_edit.call(edit_copy.clone()),
                    "Edit"
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
