//! # Application State
//!
//! Global state shared across components via Dioxus context.

mod app_state;

pub use app_state::{phase, AppState, Phase};
