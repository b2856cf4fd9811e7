//! CLI command implementations.
//!
//! Each command returns the text to print so `main` owns all stdout output.

pub mod cart;
pub mod favorites;
pub mod orders;
pub mod search;

use std::fmt::Write as _;

use lookbook_core::{CartLine, CurrencyCode};

/// Currency used for all CLI output.
pub const CURRENCY: CurrencyCode = CurrencyCode::USD;

/// Render cart lines as an aligned listing, one line per row.
pub fn format_lines(lines: &[CartLine]) -> String {
    let mut out = String::new();
    for line in lines {
        let variant: Vec<&str> = [line.size.as_deref(), line.color.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        let variant = if variant.is_empty() {
            String::new()
        } else {
            format!(" ({})", variant.join(", "))
        };
        let _ = writeln!(
            out,
            "  {:>3} x {}{variant} [{}]  {}",
            line.quantity,
            line.name,
            line.id,
            line.line_total().display(CURRENCY),
        );
    }
    out
}
