//! Shared helper functions for CLI commands

use console::Style;

use crate::core::wizard::Theme;

/// Accent style for a wizard theme
pub fn theme_style(theme: Theme) -> Style {
    match theme {
        Theme::Player => Style::new().cyan(),
        Theme::Team => Style::new().green(),
        Theme::Family => Style::new().magenta(),
    }
}

/// Truncate a string to max_len, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_theme_styles_are_distinct() {
        // Force colors so the comparison is meaningful off-terminal.
        let render = |t: Theme| theme_style(t).force_styling(true).apply_to("x").to_string();
        assert_ne!(render(Theme::Player), render(Theme::Team));
        assert_ne!(render(Theme::Team), render(Theme::Family));
    }
}
