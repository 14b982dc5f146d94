//! Guess analysis command
//!
//! Measures how much a guess would reveal about a target drawn from the catalog.

use crate::analysis::{GuessMetrics, calculate_metrics};
use crate::catalog::Catalog;
use crate::core::{ValidationError, validate};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: String,
    pub metrics: GuessMetrics,
    pub total_targets: usize,
    pub in_catalog: bool,
}

/// Analyze a guess against every equation in the catalog
///
/// # Errors
///
/// Returns the guess's `ValidationError` if it would be rejected in play.
pub fn analyze_guess(
    guess: &str,
    catalog: &Catalog,
    strict: bool,
) -> Result<AnalysisResult, ValidationError> {
    let equation = validate(guess, strict)?;
    let metrics = calculate_metrics(&equation, catalog.as_slice());

    Ok(AnalysisResult {
        guess: equation.text().to_string(),
        metrics,
        total_targets: catalog.len(),
        in_catalog: catalog.contains(&equation),
    })
}
