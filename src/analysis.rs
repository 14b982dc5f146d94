//! Information content of a guess against the catalog
//!
//! Partitions the catalog by the feedback a guess would receive and summarises
//! the partition: Shannon entropy, expected and worst-case remaining targets.

use crate::core::{Equation, Feedback};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Metrics for a guess over a set of possible targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining targets after this guess
    pub expected_remaining: f64,
    /// Largest partition (worst-case remaining targets)
    pub max_partition: usize,
    /// Number of distinct feedbacks the guess can receive
    pub distinct_feedbacks: usize,
}

/// Group targets by the feedback they give `guess`
///
/// Runs over the targets in parallel and merges per-thread counts.
#[must_use]
pub fn group_by_feedback(guess: &Equation, targets: &[Equation]) -> FxHashMap<Feedback, usize> {
    targets
        .par_iter()
        .fold(FxHashMap::default, |mut counts, target| {
            *counts.entry(Feedback::calculate(guess, target)).or_insert(0) += 1;
            counts
        })
        .reduce(FxHashMap::default, |mut merged, counts| {
            for (feedback, count) in counts {
                *merged.entry(feedback).or_insert(0) += count;
            }
            merged
        })
}

/// Calculate Shannon entropy from a feedback distribution
///
/// H = -Σ p * log₂(p)
///
/// # Examples
/// ```
/// use numberle::analysis::shannon_entropy;
/// use numberle::core::{Feedback, Mark};
/// use rustc_hash::FxHashMap;
///
/// let mut even = FxHashMap::default();
/// even.insert(Feedback::PERFECT, 50);
/// even.insert(Feedback::from_marks([Mark::Absent; 7]), 50);
///
/// let entropy = shannon_entropy(&even);
/// assert!((entropy - 1.0).abs() < 0.001); // log2(2) = 1 bit
/// ```
#[must_use]
pub fn shannon_entropy<S>(counts: &std::collections::HashMap<Feedback, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining and worst case for a guess
#[must_use]
pub fn calculate_metrics(guess: &Equation, targets: &[Equation]) -> GuessMetrics {
    if targets.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            distinct_feedbacks: 0,
        };
    }

    let counts = group_by_feedback(guess, targets);
    let total = targets.len() as f64;

    let expected_remaining = counts
        .values()
        .map(|&count| count as f64 * count as f64 / total)
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition: counts.values().copied().max().unwrap_or(0),
        distinct_feedbacks: counts.len(),
    }
}
