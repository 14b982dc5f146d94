//! What the player has learned about each symbol
//!
//! Four sets partition the alphabet: `exact`, `misplaced`, `absent` and `unused`.
//! A symbol only ever moves towards more certain knowledge:
//! `unused` → `absent` / `misplaced` → `exact`, never back.

use super::equation::{ALPHABET, Equation};
use super::feedback::{Feedback, Mark};
use rustc_hash::FxHashSet;

/// Keyboard classification of one symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyState {
    Exact,
    Misplaced,
    Absent,
    Unused,
}

/// Running knowledge sets for a single game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterKnowledge {
    exact: FxHashSet<char>,
    misplaced: FxHashSet<char>,
    absent: FxHashSet<char>,
    unused: FxHashSet<char>,
}

impl Default for CharacterKnowledge {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterKnowledge {
    /// Fresh knowledge: every symbol unused
    #[must_use]
    pub fn new() -> Self {
        Self {
            exact: FxHashSet::default(),
            misplaced: FxHashSet::default(),
            absent: FxHashSet::default(),
            unused: ALPHABET.iter().copied().collect(),
        }
    }

    /// Forget everything learned so far
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Fold the feedback of one accepted guess into the sets
    ///
    /// Marks are applied by priority over the whole guess (Exact, then Present,
    /// then Absent) so a later Absent for a repeated symbol can never downgrade
    /// an Exact or Present from the same guess.
    ///
    /// # Examples
    /// ```
    /// use numberle::core::{CharacterKnowledge, Equation, Feedback, KeyState};
    ///
    /// let guess = Equation::new("1+5=2+4").unwrap();
    /// let target = Equation::new("2+3*2=8").unwrap();
    ///
    /// let mut knowledge = CharacterKnowledge::new();
    /// knowledge.record(&guess, Feedback::calculate(&guess, &target));
    ///
    /// assert_eq!(knowledge.state_of('+'), KeyState::Exact);
    /// assert_eq!(knowledge.state_of('='), KeyState::Misplaced);
    /// assert_eq!(knowledge.state_of('5'), KeyState::Absent);
    /// assert_eq!(knowledge.state_of('9'), KeyState::Unused);
    /// ```
    pub fn record(&mut self, guess: &Equation, feedback: Feedback) {
        let marks = feedback.marks();

        for wanted in [Mark::Exact, Mark::Present, Mark::Absent] {
            for (symbol, &mark) in guess.chars().zip(marks.iter()) {
                if mark == wanted {
                    self.apply(symbol, mark);
                }
            }
        }
    }

    fn apply(&mut self, symbol: char, mark: Mark) {
        self.unused.remove(&symbol);

        match mark {
            Mark::Exact => {
                self.misplaced.remove(&symbol);
                self.absent.remove(&symbol);
                self.exact.insert(symbol);
            }
            Mark::Present => {
                if !self.exact.contains(&symbol) {
                    self.absent.remove(&symbol);
                    self.misplaced.insert(symbol);
                }
            }
            Mark::Absent => {
                if !self.exact.contains(&symbol) && !self.misplaced.contains(&symbol) {
                    self.absent.insert(symbol);
                }
            }
        }
    }

    /// Symbols seen in their correct position
    #[must_use]
    pub const fn exact(&self) -> &FxHashSet<char> {
        &self.exact
    }

    /// Symbols in the target but not yet placed
    #[must_use]
    pub const fn misplaced(&self) -> &FxHashSet<char> {
        &self.misplaced
    }

    /// Symbols known not to be in the target
    #[must_use]
    pub const fn absent(&self) -> &FxHashSet<char> {
        &self.absent
    }

    /// Symbols not yet guessed
    #[must_use]
    pub const fn unused(&self) -> &FxHashSet<char> {
        &self.unused
    }

    /// Classify a single symbol for keyboard display
    #[must_use]
    pub fn state_of(&self, symbol: char) -> KeyState {
        if self.exact.contains(&symbol) {
            KeyState::Exact
        } else if self.misplaced.contains(&symbol) {
            KeyState::Misplaced
        } else if self.absent.contains(&symbol) {
            KeyState::Absent
        } else {
            KeyState::Unused
        }
    }

    /// True until the first guess is recorded
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.unused.len() == ALPHABET.len()
    }
}
