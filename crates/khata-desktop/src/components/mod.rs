//! # UI Components
//!
//! Reusable UI components for the Khata desktop application.
//!
//! This module provides the main layout components:
//! - [`Layout`] - Main application layout wrapper with setup gate
//! - [`Sidebar`] - Navigation sidebar
//! - [`Header`] - Application header
//! - [`SettingsForm`] - Settings form shared by the setup screen and the
//!   settings view

mod header;
mod layout;
mod settings_form;
mod sidebar;

pub use header::Header;
pub use layout::Layout;
pub use settings_form::SettingsForm;
pub use sidebar::Sidebar;
