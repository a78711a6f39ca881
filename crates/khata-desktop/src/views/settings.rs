//! # Settings View
//!
//! Application settings: company identity and the GitHub connection.

use dioxus::prelude::*;

use crate::components::SettingsForm;
use crate::state::AppState;

/// Settings view component.
#[component]
pub fn Settings() -> Element {
    let state = use_context::<AppState>();
    let settings = state.settings.read();

    rsx! {
        div {
            class: "settings-view",

            h2 { class: "mb-lg", "Settings" }

            div {
                class: "settings-section",

                SettingsForm {}
            }

            // Current state display
            div {
                class: "current-state",

                h3 { class: "mb-md", "Current State" }

                div {
                    div {
                        strong { "Repository: " }
                        span { class: "mono", "{settings.github_repo}" }
                    }

                    div {
                        strong { "Configured: " }
                        if settings.is_configured() {
                            span { class: "text-success", "Yes" }
                        } else {
                            span { class: "text-error", "No" }
                        }
                    }

                    div {
                        strong { "Theme: " }
                        span { "{settings.theme.as_class()}" }
                    }
                }
            }
        }
    }
}
