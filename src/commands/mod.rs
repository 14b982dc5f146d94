//! Command implementations

pub mod analyze;
pub mod check;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_guess};
pub use check::{CheckReport, InvalidEntry, check_entries};
pub use simple::run_simple;
