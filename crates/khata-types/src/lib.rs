//! Common types used throughout `khata`.
//!
//! This crate provides the data model for Khata, a small business manager
//! that persists its records as JSON documents in a GitHub repository.
//! All persisted types serialize with camelCase field names so existing
//! data repositories keep loading unchanged.

mod billing;
mod product;
mod settings;
mod stock;
mod summary;

pub use billing::{Customer, Estimate, EstimateStatus, Invoice, InvoiceStatus, LineItem};
pub use product::Product;
pub use settings::{AppSettings, CompanyDetails, Theme};
pub use stock::{MovementKind, StockMovement};
pub use summary::{invoice_totals_by_status, net_stock_by_product, outstanding_revenue};
