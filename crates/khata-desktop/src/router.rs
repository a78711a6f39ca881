//! # Routing
//!
//! Defines the application routes and navigation structure.

use dioxus::prelude::*;

use crate::components::Layout;
use crate::views::{Dashboard, Estimates, Invoices, Products, Reports, Settings, Stock};

/// Application routes.
///
/// All routes are wrapped in the [`Layout`] component which provides the
/// setup gate, the loading splash, and the sidebar shell.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    /// Main layout wrapper for all routes.
    #[layout(Layout)]
    /// Dashboard with headline figures.
    #[route("/")]
    Dashboard {},

    /// Product catalog.
    #[route("/products")]
    Products {},

    /// Stock movement journal.
    #[route("/stock")]
    Stock {},

    /// Estimates.
    #[route("/estimates")]
    Estimates {},

    /// Invoices.
    #[route("/invoices")]
    Invoices {},

    /// Read-only reports over invoices and stock.
    #[route("/reports")]
    Reports {},

    /// Application settings (company identity, GitHub connection).
    #[route("/settings")]
    Settings {},
}
