//! Number and cost formatting helpers

use num_format::{Locale, ToFormattedString};

/// Format a token count with thousand separators
pub(crate) fn format_number(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Format a dollar amount at micro-dollar precision
pub(crate) fn format_cost(value: f64) -> String {
    format!("${value:.6}")
}
