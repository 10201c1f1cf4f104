//! Formatting functions for step output.
//!
//! Mirrors the log levels a CI step prints: section headers, indented
//! details, progress, success and errors.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::VersionPair;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a bold section header.
pub fn display_info(message: &str) {
    println!("\n{}", style(message).bold());
}

/// Print an indented detail line under the last header.
pub fn display_detail(message: &str) {
    println!("  {}", message);
}

/// Print a boundary warning to stderr.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Print both version fields under `title`.
pub fn display_versions(title: &str, pair: &VersionPair) {
    display_info(title);
    display_detail(&format!("versionCode: {}", pair.code));
    display_detail(&format!("versionName: {}", pair.name));
}

/// Render the `From -> To` lines for a version change.
pub fn format_version_change(previous: &VersionPair, next: &VersionPair) -> Vec<String> {
    vec![
        format!("versionCode: {} -> {}", previous.code, next.code),
        format!("versionName: {} -> {}", previous.name, next.name),
    ]
}
