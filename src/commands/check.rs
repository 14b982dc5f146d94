//! Catalog check command
//!
//! Validates every catalog entry as a target equation and reports duplicates.

use crate::core::{ValidationError, validate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};
use tracing::info;

/// A catalog line that is not a valid target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEntry {
    /// 1-based line number in the catalog file
    pub line: usize,
    pub entry: String,
    pub error: ValidationError,
}

/// Result of checking a catalog
#[derive(Debug)]
pub struct CheckReport {
    pub total: usize,
    pub invalid: Vec<InvalidEntry>,
    /// Repeated entries as (1-based line, entry), first occurrence excluded
    pub duplicates: Vec<(usize, String)>,
    pub duration: Duration,
}

impl CheckReport {
    /// No entries at all; a session could not start from this catalog
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// At least one entry, every entry valid and none repeated
    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.is_empty() && self.invalid.is_empty() && self.duplicates.is_empty()
    }
}

/// Check numbered catalog entries in parallel
///
/// Entries are `(line, text)` pairs as produced by `catalog::loader::read_lines`
/// or `catalog::loader::numbered`. Every entry is validated strictly, since a
/// target must be balanced.
///
/// # Panics
///
/// Panics if the progress bar template is malformed (it is a constant).
pub fn check_entries<S: AsRef<str> + Sync>(
    entries: &[(usize, S)],
    show_progress: bool,
) -> CheckReport {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(entries.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut invalid: Vec<InvalidEntry> = entries
        .par_iter()
        .filter_map(|(line, entry)| {
            let entry = entry.as_ref();
            let result = validate(entry, true);
            pb.inc(1);
            result.err().map(|error| InvalidEntry {
                line: *line,
                entry: entry.to_string(),
                error,
            })
        })
        .collect();
    invalid.sort_by_key(|entry| entry.line);
    pb.finish_and_clear();

    let mut seen = FxHashSet::default();
    let mut duplicates = Vec::new();
    for (line, entry) in entries {
        let entry = entry.as_ref();
        if !seen.insert(entry) {
            duplicates.push((*line, entry.to_string()));
        }
    }

    let report = CheckReport {
        total: entries.len(),
        invalid,
        duplicates,
        duration: start.elapsed(),
    };
    info!(
        total = report.total,
        invalid = report.invalid.len(),
        duplicates = report.duplicates.len(),
        "catalog checked"
    );
    report
}
