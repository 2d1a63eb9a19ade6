//! # Shared Formatting Helpers
//!
//! Display formatting used by the view model and the frontend. All money
//! formatting in the app funnels through these two functions so the tests
//! and the rendered output cannot drift apart.
//!
//! ```rust
//! use shared::utils::{format_token_amount, format_usd};
//!
//! assert_eq!(format_usd(1235.5), "$1235.50");
//! assert_eq!(format_token_amount(2.847), "2.847");
//! ```

/// Format a display-currency value as `$X.XX`.
///
/// Two decimal places, no thousands separator: the value recorded for a
/// 0.5-unit swap is `$1235.50`.
pub fn format_usd(value: f64) -> String {
    format!("${:.2}", value)
}

/// Format a token holding for the dashboard cards, three decimal places.
pub fn format_token_amount(amount: f64) -> String {
    format!("{:.3}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(1235.5), "$1235.50");
        assert_eq!(format_usd(100.0), "$100.00");
        assert_eq!(format_usd(2471.0 * 2.0), "$4942.00");
    }

    #[test]
    fn test_format_token_amount() {
        assert_eq!(format_token_amount(2.847), "2.847");
        assert_eq!(format_token_amount(1250.32), "1250.320");
        assert_eq!(format_token_amount(890.15), "890.150");
    }
}
