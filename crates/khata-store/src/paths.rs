//! Fixed document paths inside the data repository.

/// Application settings document.
pub const SETTINGS: &str = "data/settings.json";
/// Product catalog document.
pub const PRODUCTS: &str = "data/products.json";
/// Stock movements document.
pub const STOCK: &str = "data/stock.json";
/// Estimates document.
pub const ESTIMATES: &str = "data/estimates.json";
/// Invoices document.
pub const INVOICES: &str = "data/invoices.json";

/// All five documents, in fetch order.
pub const ALL: [&str; 5] = [SETTINGS, PRODUCTS, STOCK, ESTIMATES, INVOICES];
