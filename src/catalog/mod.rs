//! Equation catalogs for Numberle
//!
//! Provides the embedded equation list compiled into the binary and the
//! `Catalog` type a game session draws its target from.

mod embedded;
pub mod loader;

pub use embedded::{EQUATIONS, EQUATIONS_COUNT};

use crate::core::Equation;

/// Ordered, immutable list of candidate target equations
///
/// Index 0 is the fixed target; any index may be drawn as the random target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    equations: Vec<Equation>,
}

impl Catalog {
    #[must_use]
    pub const fn new(equations: Vec<Equation>) -> Self {
        Self { equations }
    }

    /// The catalog compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        loader::equations_from_slice(EQUATIONS)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Equation> {
        self.equations.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Equation] {
        &self.equations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Equation> {
        self.equations.iter()
    }

    #[must_use]
    pub fn contains(&self, equation: &Equation) -> bool {
        self.equations.contains(equation)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Equation;
    type IntoIter = std::slice::Iter<'a, Equation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equations_count_matches_const() {
        assert_eq!(EQUATIONS.len(), EQUATIONS_COUNT);
    }

    #[test]
    fn fixed_target_is_first() {
        assert_eq!(EQUATIONS[0], "2+3*2=8");
        let catalog = Catalog::embedded();
        assert_eq!(catalog.get(0).map(Equation::text), Some("2+3*2=8"));
    }

    #[test]
    fn embedded_equations_are_valid() {
        for &text in EQUATIONS {
            assert!(
                Equation::new(text).is_ok(),
                "Equation '{text}' is not a valid target"
            );
        }
        assert_eq!(Catalog::embedded().len(), EQUATIONS_COUNT);
    }

    #[test]
    fn embedded_equations_are_unique() {
        let unique: std::collections::HashSet<_> = EQUATIONS.iter().collect();
        assert_eq!(unique.len(), EQUATIONS_COUNT);
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.get(0), None);
    }
}
