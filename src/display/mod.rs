//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and reports for terminal
//! display: fixed-width register tables, detail views, and the text bar
//! chart used by the category breakdown.

pub mod expense;

pub use expense::{format_expense_details, format_expense_register, format_expense_row};

/// Create a simple bar chart representation
///
/// `empty_fill` is the glyph used for the unfilled remainder of the bar
/// (theme-dependent).
pub fn format_bar(value: f64, max_value: f64, width: usize, empty_fill: char) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return empty_fill.to_string().repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!(
        "{}{}",
        "█".repeat(filled),
        empty_fill.to_string().repeat(width - filled)
    )
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10, '░');
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
    }

    #[test]
    fn test_format_bar_zero_value() {
        let bar = format_bar(0.0, 100.0, 10, '░');
        assert!(bar.chars().all(|c| c == '░'));
    }

    #[test]
    fn test_format_bar_full() {
        let bar = format_bar(100.0, 100.0, 10, '░');
        assert!(bar.chars().all(|c| c == '█'));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
    }
}
