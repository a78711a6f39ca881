//! # Sidebar Component
//!
//! Navigation sidebar with the company brand, nav links, theme toggle
//! and manual sync.

use dioxus::prelude::*;

use khata_types::Theme;

use crate::router::Route;
use crate::state::AppState;

/// Navigation sidebar component.
#[component]
pub fn Sidebar() -> Element {
    let mut state = use_context::<AppState>();
    let settings = state.settings.read();
    let busy = *state.syncing.read() || *state.loading.read();

    let theme_label = match settings.theme {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };
    let logo = settings.logo_base64.as_deref().filter(|s| !s.is_empty());

    let on_toggle_theme = move |_| {
        state.toggle_theme();
    };
    let on_sync = move |_| {
        state.fetch_all();
    };

    rsx! {
        nav {
            class: "sidebar",

            div {
                class: "sidebar-brand",

                if let Some(logo) = logo {
                    img { class: "brand-logo", src: "{logo}", alt: "Logo" }
                } else {
                    span { class: "brand-name", "{settings.company_details.name}" }
                }
            }

            div {
                class: "nav-links",

                Link { to: Route::Dashboard {}, class: "nav-link", "Dashboard" }
                Link { to: Route::Products {}, class: "nav-link", "Products" }
                Link { to: Route::Stock {}, class: "nav-link", "Stock" }
                Link { to: Route::Estimates {}, class: "nav-link", "Estimates" }
                Link { to: Route::Invoices {}, class: "nav-link", "Invoices" }
                Link { to: Route::Reports {}, class: "nav-link", "Reports" }
                Link { to: Route::Settings {}, class: "nav-link", "Settings" }
            }

            div {
                class: "sidebar-footer",

                button {
                    class: "btn-sm btn-ghost",
                    onclick: on_toggle_theme,
                    "{theme_label}"
                }

                button {
                    class: "btn-sm btn-ghost",
                    onclick: on_sync,
                    disabled: busy,
                    if busy { "Syncing..." } else { "Sync" }
                }
            }
        }
    }
}
