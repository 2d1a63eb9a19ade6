//! # Formatting Utilities for the Wallet Views
//!
//! View-side helpers only. Money formatting lives in [`shared::utils`];
//! these functions map model values onto display strings and utility
//! classes.

use shared::TxStatus;

/// Status badge classes for history rows.
pub fn status_badge_class(status: TxStatus) -> &'static str {
    match status {
        TxStatus::Completed => "bg-green-500/20 text-green-400",
        TxStatus::Pending => "bg-yellow-500/20 text-yellow-400",
        TxStatus::Failed => "bg-red-500/20 text-red-400",
    }
}

/// Destination-side preview text for the swap form.
///
/// Shows "0.0" until the amount parses to a positive number.
pub fn quote_display(quote: Option<f64>) -> String {
    match quote {
        Some(value) => format!("{:.2}", value),
        None => "0.0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge_class() {
        assert_eq!(
            status_badge_class(TxStatus::Completed),
            "bg-green-500/20 text-green-400"
        );
        assert_eq!(
            status_badge_class(TxStatus::Pending),
            "bg-yellow-500/20 text-yellow-400"
        );
        assert_eq!(
            status_badge_class(TxStatus::Failed),
            "bg-red-500/20 text-red-400"
        );
    }

    #[test]
    fn test_quote_display() {
        assert_eq!(quote_display(Some(1235.5)), "1235.50");
        assert_eq!(quote_display(None), "0.0");
    }
}
