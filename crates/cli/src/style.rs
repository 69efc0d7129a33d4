//! Shared styling utilities for the CLI.

use console::Style;

/// Create a success-styled string (green with checkmark).
pub fn success(msg: &str) -> String {
    let style = Style::new().green();
    format!("{} {}", style.apply_to("✓"), msg)
}

/// Create a header-styled string (bold).
pub fn header(msg: &str) -> String {
    let style = Style::new().bold();
    style.apply_to(msg).to_string()
}

/// Create a dim-styled string.
pub fn dim(msg: &str) -> String {
    let style = Style::new().dim();
    style.apply_to(msg).to_string()
}

/// Styled name for the left-hand user (blue).
pub fn user_one(msg: &str) -> String {
    let style = Style::new().blue().bold();
    style.apply_to(msg).to_string()
}

/// Styled name for the right-hand user (green).
pub fn user_two(msg: &str) -> String {
    let style = Style::new().green().bold();
    style.apply_to(msg).to_string()
}
