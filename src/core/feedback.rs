//! Numberle feedback calculation and representation
//!
//! Feedback encodes the mark for each of the 7 positions using base-3 encoding:
//! - 0 = Absent (no unconsumed occurrence in the target)
//! - 1 = Present (symbol occurs elsewhere in the target)
//! - 2 = Exact (symbol in correct position)
//!
//! The feedback is stored as a single u16 value (0-2186), where each position
//! contributes digit × 3^position to the total.

use super::equation::{EQUATION_LEN, Equation};

/// Mark for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Exact,
}

impl Mark {
    const fn digit(self) -> u16 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    const fn from_digit(digit: u16) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Feedback for a Numberle guess
///
/// Represents the per-position marks as a single base-3 value.
/// Value range: 0-2186 (3^7 - 1 = 2187 possible feedbacks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(u16);

impl Feedback {
    /// All exact (the guess is the target)
    pub const PERFECT: Self = Self(2186); // 2 × (1 + 3 + 9 + 27 + 81 + 243 + 729)

    /// Check if every position is exact
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Build feedback from one mark per position
    #[must_use]
    pub fn from_marks(marks: [Mark; EQUATION_LEN]) -> Self {
        let mut value = 0u16;
        let mut multiplier = 1u16;
        for mark in marks {
            value += mark.digit() * multiplier;
            multiplier *= 3;
        }
        Self(value)
    }

    /// Get the mark at a specific position (0-6)
    ///
    /// # Panics
    /// Panics if position >= 7
    #[must_use]
    pub fn mark(self, position: usize) -> Mark {
        self.marks()[position]
    }

    /// Decode into one mark per position
    #[must_use]
    pub fn marks(self) -> [Mark; EQUATION_LEN] {
        let mut marks = [Mark::Absent; EQUATION_LEN];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Repeated symbols are handled by consuming target positions: each target
    /// position can justify at most one Exact or Present mark.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those target positions
    /// 2. Second pass: for every other position, consume the leftmost unconsumed
    ///    matching target position and mark Present, otherwise Absent
    ///
    /// # Examples
    /// ```
    /// use numberle::core::{Equation, Feedback, Mark};
    ///
    /// let guess = Equation::new("1+5=2+4").unwrap();
    /// let target = Equation::new("2+3*2=8").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.mark(1), Mark::Exact); // '+'
    /// assert_eq!(feedback.mark(3), Mark::Present); // '='
    /// assert_eq!(feedback.mark(4), Mark::Exact); // '2'
    /// assert_eq!(feedback.count_exact(), 2);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Equation, target: &Equation) -> Self {
        let guess = guess.symbols();
        let target = target.symbols();
        let mut marks = [Mark::Absent; EQUATION_LEN];
        let mut consumed = [false; EQUATION_LEN];

        // First pass: exact matches
        // Allow: Index needed to access guess[i], target[i], and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..EQUATION_LEN {
            if guess[i] == target[i] {
                marks[i] = Mark::Exact;
                consumed[i] = true;
            }
        }

        // Second pass: present somewhere still unconsumed
        #[allow(clippy::needless_range_loop)]
        for i in 0..EQUATION_LEN {
            if marks[i] == Mark::Exact {
                continue;
            }
            if let Some(slot) = (0..EQUATION_LEN).find(|&j| !consumed[j] && target[j] == guess[i]) {
                marks[i] = Mark::Present;
                consumed[slot] = true;
            }
        }

        Self::from_marks(marks)
    }

    /// Count the number of exact marks
    #[must_use]
    pub fn count_exact(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Exact).count()
    }

    /// Count the number of present marks
    #[must_use]
    pub fn count_present(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩⬜⬜🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .iter()
            .map(|mark| match mark {
                Mark::Exact => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validate;

    fn eq(text: &str) -> Equation {
        Equation::new(text).unwrap()
    }

    // Lenient guess: well-formed but not necessarily balanced
    fn guess(text: &str) -> Equation {
        validate(text, false).unwrap()
    }

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count_exact(), 7);
        assert_eq!(Feedback::PERFECT.count_present(), 0);
        assert_eq!(Feedback::from_marks([Mark::Exact; 7]), Feedback::PERFECT);
    }

    #[test]
    fn feedback_only_equals_in_common() {
        // Every equation has an '=', so nothing is ever entirely absent
        let feedback = Feedback::calculate(&guess("1-4/5=7"), &guess("8=2+3*9"));
        assert_eq!(feedback.mark(5), Mark::Present);
        assert_eq!(feedback.count_exact(), 0);
        assert_eq!(feedback.count_present(), 1);
    }

    #[test]
    fn feedback_identical_is_perfect() {
        for text in ["2+3*2=8", "43+3=46", "0/314=0"] {
            let e = eq(text);
            assert_eq!(Feedback::calculate(&e, &e), Feedback::PERFECT);
        }
    }

    #[test]
    fn feedback_reference_guess() {
        // 1+5=2+4 vs 2+3*2=8
        let feedback = Feedback::calculate(&eq("1+5=2+4"), &eq("2+3*2=8"));
        assert_eq!(
            feedback.marks(),
            [
                Mark::Absent,  // 1
                Mark::Exact,   // +
                Mark::Absent,  // 5
                Mark::Present, // =
                Mark::Exact,   // 2
                Mark::Absent,  // + (only '+' already consumed)
                Mark::Absent,  // 4
            ]
        );
    }

    #[test]
    fn feedback_repeated_symbols_are_consumed() {
        // Target has two '2's, both matched exactly; the third '2' has nothing left
        let feedback = Feedback::calculate(&guess("2+2+2=8"), &eq("2+3*2=8"));
        assert_eq!(
            feedback.marks(),
            [
                Mark::Exact,  // 2
                Mark::Exact,  // +
                Mark::Absent, // 2: both target '2's used by exact matches
                Mark::Absent, // +: the only '+' is consumed
                Mark::Exact,  // 2
                Mark::Exact,  // =
                Mark::Exact,  // 8
            ]
        );
    }

    #[test]
    fn feedback_exact_takes_priority_over_earlier_present() {
        // '3' at position 0 would be present, but the only '3' is an exact match at 2
        let feedback = Feedback::calculate(&guess("3+3=6+0"), &eq("2+3*2=8"));
        assert_eq!(feedback.mark(0), Mark::Absent);
        assert_eq!(feedback.mark(2), Mark::Exact);
    }

    #[test]
    fn feedback_present_consumes_leftmost_first() {
        // Two '4's guessed, target has one '4' elsewhere
        let feedback = Feedback::calculate(&guess("4*4=1+6"), &eq("61+3=64"));
        assert_eq!(feedback.mark(0), Mark::Present);
        assert_eq!(feedback.mark(2), Mark::Absent);
    }

    #[test]
    fn feedback_mark_matches_marks() {
        let feedback = Feedback::calculate(&guess("4*4=1+6"), &eq("61+3=64"));
        for (position, &mark) in feedback.marks().iter().enumerate() {
            assert_eq!(feedback.mark(position), mark);
        }
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn feedback_mark_out_of_range_panics() {
        let _ = Feedback::PERFECT.mark(11);
    }

    #[test]
    fn feedback_emoji() {
        let feedback = Feedback::calculate(&eq("1+5=2+4"), &eq("2+3*2=8"));
        assert_eq!(feedback.to_emoji(), "⬜🟩⬜🟨🟩⬜⬜");
        assert_eq!(Feedback::PERFECT.to_emoji(), "🟩".repeat(7));
    }
}
