//! # Khata Desktop
//!
//! Native desktop client for Khata, a small business manager that keeps
//! all of its records as JSON documents in a GitHub repository.
//!
//! ## Architecture
//!
//! The application holds every record collection in memory, hydrates it
//! from the configured repository on startup, and writes documents back
//! through the GitHub contents API after each edit.
//!
//! ## Modules
//!
//! - [`components`] - Reusable UI components
//! - [`config`] - Local settings persistence
//! - [`router`] - Application routes
//! - [`state`] - Global application state
//! - [`views`] - Page-level view components

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod components;
mod config;
mod router;
mod state;
mod views;

use router::Route;
use state::AppState;

fn main() {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");

    tracing::info!("Starting Khata Desktop");

    // Configure desktop window
    let cfg = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Khata")
            .with_inner_size(LogicalSize::new(1200.0, 800.0))
            .with_min_inner_size(LogicalSize::new(900.0, 600.0)),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(cfg).launch(App);
}

/// Root application component.
///
/// Initializes global state, loads the stylesheet, and renders the router.
#[component]
fn App() -> Element {
    // Provide global application state
    use_context_provider(AppState::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }
        Router::<Route> {}
    }
}
