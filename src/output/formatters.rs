//! Formatting utilities for terminal output

use crate::core::{ALPHABET, CharacterKnowledge, Equation, Feedback, KeyState, Mark};
use colored::{ColoredString, Colorize};

/// Color one symbol by its feedback mark
#[must_use]
pub fn colorize_mark(symbol: char, mark: Mark) -> ColoredString {
    let cell = format!(" {symbol} ");
    match mark {
        Mark::Exact => cell.black().on_green().bold(),
        Mark::Present => cell.black().on_yellow().bold(),
        Mark::Absent => cell.white().on_bright_black(),
    }
}

/// Render a guess as a row of colored cells
#[must_use]
pub fn colorize_guess(guess: &Equation, feedback: Feedback) -> String {
    guess
        .chars()
        .zip(feedback.marks())
        .map(|(symbol, mark)| colorize_mark(symbol, mark).to_string())
        .collect()
}

/// Render the alphabet colored by what the player knows
#[must_use]
pub fn keyboard_line(knowledge: &CharacterKnowledge) -> String {
    ALPHABET
        .iter()
        .map(|&symbol| {
            let key = symbol.to_string();
            let styled = match knowledge.state_of(symbol) {
                KeyState::Exact => key.green().bold(),
                KeyState::Misplaced => key.yellow().bold(),
                KeyState::Absent => key.bright_black().strikethrough(),
                KeyState::Unused => key.white(),
            };
            styled.to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sorted symbols of a knowledge set, e.g. "+ 2"
#[must_use]
pub fn symbol_list<'a>(symbols: impl IntoIterator<Item = &'a char>) -> String {
    let mut sorted: Vec<char> = symbols.into_iter().copied().collect();
    sorted.sort_by_key(|c| ALPHABET.iter().position(|a| a == c));
    sorted
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
