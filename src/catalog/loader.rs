//! Equation catalog loading utilities
//!
//! Provides functions to load equation lists from files or use embedded constants.

use super::Catalog;
use crate::core::Equation;
use crate::error::FatalError;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Read the non-empty lines of a catalog file with their 1-based line numbers
///
/// Blank lines are skipped but still counted, so numbers match the file.
///
/// # Errors
///
/// Returns `FatalError::CatalogUnreadable` if the file cannot be read.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<(usize, String)>, FatalError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| FatalError::CatalogUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| (number, line.to_string()))
        .collect())
}

/// Number embedded entries from 1, as if each were a line of a file
#[must_use]
pub fn numbered<'a>(entries: &[&'a str]) -> Vec<(usize, &'a str)> {
    entries
        .iter()
        .enumerate()
        .map(|(index, &entry)| (index + 1, entry))
        .collect()
}

/// Load a catalog from a file
///
/// Returns the valid equations in file order, skipping (and logging) invalid entries.
/// An empty result is not an error here; starting a session with it is.
///
/// # Errors
///
/// Returns `FatalError::CatalogUnreadable` if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use numberle::catalog::loader::load_from_file;
///
/// let catalog = load_from_file("data/equations.txt").unwrap();
/// println!("Loaded {} equations", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, FatalError> {
    let path = path.as_ref();
    let lines = read_lines(path)?;
    let catalog = equations_from_iter(lines.iter().map(|(number, line)| (*number, line.as_str())));
    debug!(path = %path.display(), count = catalog.len(), "loaded equation catalog");
    Ok(catalog)
}

/// Convert embedded string slice to a catalog
///
/// # Examples
/// ```
/// use numberle::catalog::loader::equations_from_slice;
/// use numberle::catalog::EQUATIONS;
///
/// let catalog = equations_from_slice(EQUATIONS);
/// assert_eq!(catalog.len(), EQUATIONS.len());
/// ```
#[must_use]
pub fn equations_from_slice(slice: &[&str]) -> Catalog {
    equations_from_iter(numbered(slice).into_iter())
}

fn equations_from_iter<'a>(entries: impl Iterator<Item = (usize, &'a str)>) -> Catalog {
    let equations = entries
        .filter_map(|(line, entry)| match Equation::new(entry) {
            Ok(equation) => Some(equation),
            Err(error) => {
                warn!(line, entry, %error, "skipping invalid catalog entry");
                None
            }
        })
        .collect();

    Catalog::new(equations)
}
