//! # Header Component
//!
//! Application header with the configured repository and sync status.

use dioxus::prelude::*;

use crate::state::AppState;

/// Application header component.
#[component]
pub fn Header() -> Element {
    let state = use_context::<AppState>();
    let syncing = *state.syncing.read();
    let repo = state.settings.read().github_repo.clone();

    rsx! {
        header {
            class: "app-header",

            h1 { "Khata" }

            div {
                class: "header-right",

                if syncing {
                    span { class: "sync-indicator", "Syncing..." }
                }

                span { class: "repo-slug mono", "{repo}" }
            }
        }
    }
}
