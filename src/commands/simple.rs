//! Simple interactive CLI mode
//!
//! Text-based Numberle game without TUI

use crate::core::CharacterKnowledge;
use crate::error::GuessError;
use crate::game::{GameSession, GameState, MAX_ATTEMPTS};
use crate::output::formatters::{colorize_guess, keyboard_line, symbol_list};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<R: Rng>(session: &mut GameSession<R>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play(session, &mut stdin.lock(), &mut stdout)
}

/// Play games until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play<R: Rng, I: BufRead, W: Write>(
    session: &mut GameSession<R>,
    input: &mut I,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                   Numberle - Console Mode                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the hidden equation in {MAX_ATTEMPTS} tries. Every guess is 7 symbols"
    )?;
    writeln!(out, "from 0-9 + - * / = with exactly one '=' (e.g. 2+3*2=8).\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game\n")?;

    loop {
        print_status(session, out)?;

        let Some(line) = get_user_input(input, out, "Your guess")? else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                session.restart()?;
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            _ => {}
        }

        match session.process_guess(&line) {
            Ok(outcome) => {
                writeln!(out, "\n  {}\n", colorize_guess(&outcome.guess, outcome.feedback))?;
                print_knowledge(out, &outcome.knowledge)?;

                if outcome.state.is_over() {
                    print_game_over(session, out)?;

                    let again = get_user_input(input, out, "Play again? (yes/no)")?;
                    if matches!(again.as_deref(), Some("yes" | "y")) {
                        session.restart()?;
                        writeln!(out, "\n🔄 New game started!\n")?;
                    } else {
                        writeln!(out, "\n👋 Thanks for playing!\n")?;
                        return Ok(());
                    }
                }
            }
            Err(GuessError::Invalid(error)) => {
                let message = if session.config().report_errors {
                    format!("❌ Invalid equation: {error}")
                } else {
                    "❌ Invalid equation, try again".to_string()
                };
                writeln!(out, "{}\n", message.red())?;
            }
            Err(error @ GuessError::GameOver(_)) => {
                writeln!(out, "{}\n", error.to_string().red())?;
            }
        }
    }
}

fn print_status<R: Rng, W: Write>(session: &GameSession<R>, out: &mut W) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    write!(out, "Attempts remaining: {}", session.attempts_remaining())?;
    if let Some(target) = session.target() {
        write!(out, "   (target: {})", target.text().bright_black())?;
    }
    writeln!(out)?;
    writeln!(out, "────────────────────────────────────────────────────────────")
}

fn print_knowledge<W: Write>(out: &mut W, knowledge: &CharacterKnowledge) -> io::Result<()> {
    writeln!(out, "  Keyboard:   {}", keyboard_line(knowledge))?;
    writeln!(out, "  Exact:      {}", symbol_list(knowledge.exact()).green())?;
    writeln!(out, "  Misplaced:  {}", symbol_list(knowledge.misplaced()).yellow())?;
    writeln!(out, "  Absent:     {}", symbol_list(knowledge.absent()).bright_black())?;
    writeln!(out, "  Unused:     {}\n", symbol_list(knowledge.unused()))
}

fn print_game_over<R: Rng, W: Write>(session: &GameSession<R>, out: &mut W) -> io::Result<()> {
    let solution = session.solution().map_or("?", |s| s.text());

    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
    match session.state() {
        GameState::Won => {
            let used = session.attempts_used();
            writeln!(
                out,
                "{}",
                "    🎉 🎊 ✨  N U M B E R L E   S O L V E D !  ✨ 🎊 🎉    "
                    .bright_green()
                    .bold()
            )?;
            writeln!(
                out,
                "\n  Solved {} in {} {}",
                solution.bright_white().bold(),
                used.to_string().bright_cyan().bold(),
                if used == 1 { "guess" } else { "guesses" }
            )?;
        }
        GameState::Lost => {
            writeln!(out, "{}", "    💥  Out of attempts!  💥    ".red().bold())?;
            writeln!(out, "\n  The equation was {}", solution.bright_white().bold())?;
        }
        GameState::InProgress => {}
    }
    writeln!(out, "{}\n", "═".repeat(70).bright_cyan())
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::loader::equations_from_slice;
    use crate::config::GameConfig;
    use std::io::Cursor;

    fn fixed_session(config: GameConfig) -> GameSession {
        let catalog = equations_from_slice(&["2+3*2=8", "43+3=46"]);
        GameSession::start(catalog, config.with_random_target(false)).unwrap()
    }

    fn run(session: &mut GameSession, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        play(session, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn winning_game_then_quit() {
        let mut session = fixed_session(GameConfig::new());
        let output = run(&mut session, "1+5=2+4\n2+3*2=8\nno\n");

        assert!(output.contains("S O L V E D"));
        assert!(output.contains("guesses"));
        assert!(output.contains("Thanks for playing"));
        assert!(session.is_won());
        assert_eq!(session.attempts_remaining(), 4);
    }

    #[test]
    fn invalid_guess_is_explained() {
        let mut session = fixed_session(GameConfig::new());
        let output = run(&mut session, "1+2=3\nquit\n");

        assert!(output.contains("too short"));
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
    }

    #[test]
    fn explanation_can_be_hidden() {
        let mut session = fixed_session(GameConfig::new().with_report_errors(false));
        let output = run(&mut session, "1+2=3\n");

        assert!(output.contains("Invalid equation, try again"));
        assert!(!output.contains("too short"));
    }

    #[test]
    fn losing_game_reveals_solution_and_restarts() {
        let mut session = fixed_session(GameConfig::new());
        let script = "4+3=5+2\n".repeat(6) + "yes\n";
        let output = run(&mut session, &script);

        assert!(output.contains("Out of attempts"));
        assert!(output.contains("The equation was"));
        assert!(output.contains("New game started"));
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
    }

    #[test]
    fn new_command_restarts() {
        let mut session = fixed_session(GameConfig::new());
        run(&mut session, "1+5=2+4\nnew\n");
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        assert!(session.knowledge().is_fresh());
    }

    #[test]
    fn shows_target_when_configured() {
        let mut session = fixed_session(GameConfig::new().with_show_target(true));
        let output = run(&mut session, "quit\n");
        assert!(output.contains("2+3*2=8"));
    }
}
