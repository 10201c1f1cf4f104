//! User interface module - step output and dry-run plans.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Rendering of the planned workflow

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_detail, display_error, display_info, display_status,
    display_success, display_versions, format_version_change,
};

/// Display the steps a dry run would perform.
///
/// # Arguments
/// * `steps` - Human readable description of each step, in order
pub fn display_plan(steps: &[String]) {
    display_info("Dry run, planned steps:");
    for (i, step) in steps.iter().enumerate() {
        display_detail(&format!("{}. {}", i + 1, step));
    }
}
