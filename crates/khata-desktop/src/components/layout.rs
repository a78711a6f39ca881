//! # Layout Component
//!
//! Main application layout wrapper providing the shell structure.

use dioxus::prelude::*;

use super::{Header, SettingsForm, Sidebar};
use crate::router::Route;
use crate::state::{AppState, Phase};

/// Main layout wrapper component.
///
/// Applies the theme class, gates the shell behind the setup screen and
/// the loading splash, and triggers the initial fetch round. All routed
/// views are rendered inside the main content area via `Outlet`.
///
/// # Structure
///
/// ```text
/// +---------------------------------------------+
/// | Sidebar |         Header                    |
/// |         |-----------------------------------|
/// |  Nav    |         Error banner              |
/// |  Items  |         Main Content              |
/// |         |         (Outlet)                  |
/// +---------------------------------------------+
/// ```
#[component]
pub fn Layout() -> Element {
    let mut state = use_context::<AppState>();
    let theme_class = state.settings.read().theme.as_class();

    // Fetch on startup, and again when setup completes.
    use_effect(move || {
        if *state.setup_complete.read() {
            state.fetch_all();
        }
    });

    rsx! {
        div {
            class: "app-root {theme_class}",

            match state.phase() {
                Phase::Setup => rsx! {
                    SetupScreen {}
                },
                Phase::Loading => rsx! {
                    div {
                        class: "splash",
                        "Loading data..."
                    }
                },
                Phase::Ready => rsx! {
                    div {
                        class: "app-layout",

                        Sidebar {}

                        div {
                            class: "main-panel",

                            Header {}

                            main {
                                class: "content",

                                ErrorBanner {}

                                Outlet::<Route> {}
                            }
                        }
                    }
                },
            }
        }
    }
}

/// First-run screen shown until GitHub credentials are saved.
#[component]
fn SetupScreen() -> Element {
    rsx! {
        div {
            class: "setup-screen",

            div {
                class: "setup-card",

                h1 { class: "mb-md", "Welcome to Khata" }

                p { class: "mb-lg",
                    "Please configure your GitHub repository in the settings to get started."
                }

                ErrorBanner {}

                SettingsForm {}
            }
        }
    }
}

/// Dismissible banner for the last error, if any.
#[component]
fn ErrorBanner() -> Element {
    let mut state = use_context::<AppState>();

    let on_dismiss = move |_| {
        state.dismiss_error();
    };

    rsx! {
        if let Some(err) = state.error.read().as_ref() {
            div {
                class: "alert alert-error",
                role: "alert",

                strong { "Error: " }
                span { "{err}" }

                button {
                    class: "alert-dismiss",
                    onclick: on_dismiss,
                    "\u{00d7}"
                }
            }
        }
    }
}
