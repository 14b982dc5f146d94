//! Terminal output formatting
//!
//! Display utilities for CLI results and colored game rows.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_check_report};
