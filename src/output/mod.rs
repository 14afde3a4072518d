//! Terminal output styling for gendiff
//!
//! Diff text goes to stdout untouched so it can be piped and parsed; only
//! diagnostics are styled.

use owo_colors::OwoColorize;

/// Print text to stdout without styling
pub fn raw(text: &str) {
    println!("{}", text);
}

/// Print an error message with a red X
pub fn error(message: &str) {
    // Pastel coral/salmon: RGB(255, 160, 160)
    eprintln!(
        "{} {}",
        "✗".truecolor(255, 160, 160).bold(),
        message.bright_white()
    );
}
