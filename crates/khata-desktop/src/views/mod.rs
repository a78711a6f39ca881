//! # Views
//!
//! Page-level view components for the Khata desktop application.
//!
//! - [`Dashboard`] - Headline figures and recent invoices
//! - [`Products`] - Product catalog
//! - [`Stock`] - Stock movement journal
//! - [`Estimates`] - Estimates with status lifecycle
//! - [`Invoices`] - Invoices with status lifecycle
//! - [`Reports`] - Read-only reports over invoices and stock
//! - [`Settings`] - Application settings

mod dashboard;
mod estimates;
mod invoices;
mod products;
mod reports;
mod settings;
mod stock;

pub use dashboard::Dashboard;
pub use estimates::Estimates;
pub use invoices::Invoices;
pub use products::Products;
pub use reports::Reports;
pub use settings::Settings;
pub use stock::Stock;

/// Next free document number for `prefix`, e.g. `EST-0007`.
///
/// Scans existing numbers instead of counting documents so deletions
/// never produce a duplicate.
pub(crate) fn next_document_number<'a>(
    prefix: &str,
    existing: impl Iterator<Item = &'a str>,
) -> String {
    let max = existing
        .filter_map(|number| number.strip_prefix(prefix))
        .filter_map(|rest| rest.strip_prefix('-'))
        .filter_map(|digits| digits.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}-{:04}", max + 1)
}

/// Formats a money amount with two decimals.
pub(crate) fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_document_number() {
        assert_eq!(next_document_number("EST", [].into_iter()), "EST-0001");
    }

    #[test]
    fn test_next_number_skips_past_the_highest() {
        let existing = ["INV-0001", "INV-0005", "INV-0003"];
        assert_eq!(
            next_document_number("INV", existing.into_iter()),
            "INV-0006"
        );
    }

    #[test]
    fn test_next_number_ignores_foreign_formats() {
        let existing = ["EST-0002", "Q-99", "EST-abc", ""];
        assert_eq!(
            next_document_number("EST", existing.into_iter()),
            "EST-0003"
        );
    }

    #[test]
    fn test_amount_formatting() {
        assert_eq!(format_amount(1234.5), "1234.50");
        assert_eq!(format_amount(0.0), "0.00");
    }
}
