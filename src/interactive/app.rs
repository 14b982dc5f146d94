//! TUI application state and logic

use crate::core::{EQUATION_LEN, Feedback, is_symbol};
use crate::error::GuessError;
use crate::game::{GameSession, GameState, MAX_ATTEMPTS};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: GameSession,
    pub board: Vec<BoardRow>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver,
}

/// An accepted guess and how it scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub guess: String,
    pub feedback: Feedback,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by guesses used
    pub guess_distribution: [usize; MAX_ATTEMPTS as usize + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            board: Vec::with_capacity(MAX_ATTEMPTS as usize),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Playing,
        };
        app.add_message(
            "Welcome! Find the hidden equation in six guesses.",
            MessageStyle::Info,
        );
        app.add_message(
            "Type 7 symbols from 0-9 + - * / = and press Enter",
            MessageStyle::Info,
        );
        app
    }

    /// Submit the input buffer as a guess
    pub fn handle_submit(&mut self) {
        let input = self.input_buffer.clone();

        match self.session.process_guess(&input) {
            Ok(outcome) => {
                self.board.push(BoardRow {
                    guess: outcome.guess.text().to_string(),
                    feedback: outcome.feedback,
                });
                self.input_buffer.clear();

                match outcome.state {
                    GameState::Won => {
                        let used = self.session.attempts_used() as usize;
                        self.stats.total_games += 1;
                        self.stats.games_won += 1;
                        self.stats.guess_distribution[used] += 1;
                        self.input_mode = InputMode::GameOver;

                        let celebration = match used {
                            1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    GameState::Lost => {
                        self.stats.total_games += 1;
                        self.input_mode = InputMode::GameOver;

                        let solution = self.session.solution().map_or("?", |s| s.text()).to_string();
                        self.add_message(
                            &format!("💥 Out of attempts! The equation was {solution}"),
                            MessageStyle::Error,
                        );
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    GameState::InProgress => {
                        self.add_message(
                            &format!("{} attempts remaining", outcome.attempts_remaining),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(GuessError::Invalid(error)) => {
                if self.session.config().report_errors {
                    self.add_message(&format!("Invalid equation: {error}"), MessageStyle::Error);
                } else {
                    self.add_message("Invalid equation, try again", MessageStyle::Error);
                }
            }
            Err(GuessError::GameOver(_)) => {
                self.input_mode = InputMode::GameOver;
            }
        }
    }

    pub fn new_game(&mut self) {
        if let Err(error) = self.session.restart() {
            self.add_message(&error.to_string(), MessageStyle::Error);
            return;
        }

        self.board.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Playing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char(c) => {
                    if is_symbol(c) && self.input_buffer.len() < EQUATION_LEN {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.handle_submit(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::loader::equations_from_slice;
    use crate::config::GameConfig;

    fn fixed_app(config: GameConfig) -> App {
        let catalog = equations_from_slice(&["2+3*2=8", "43+3=46"]);
        let session = GameSession::start(catalog, config.with_random_target(false)).unwrap();
        App::new(session)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_guess(app: &mut App, guess: &str) {
        for c in guess.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn last_message(app: &App) -> &str {
        &app.messages.last().unwrap().text
    }

    #[test]
    fn input_accepts_only_symbols_up_to_length() {
        let mut app = fixed_app(GameConfig::new());
        for c in "1a+ 5=2+4x9".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "1+5=2+4");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "1+5=2+");
    }

    #[test]
    fn accepted_guess_fills_board() {
        let mut app = fixed_app(GameConfig::new());
        type_guess(&mut app, "1+5=2+4");

        assert_eq!(app.board.len(), 1);
        assert_eq!(app.board[0].feedback.to_emoji(), "⬜🟩⬜🟨🟩⬜⬜");
        assert!(app.input_buffer.is_empty());
        assert_eq!(last_message(&app), "5 attempts remaining");
    }

    #[test]
    fn rejected_guess_keeps_buffer() {
        let mut app = fixed_app(GameConfig::new());
        type_guess(&mut app, "1+2=3+4");

        assert!(app.board.is_empty());
        assert_eq!(app.input_buffer, "1+2=3+4");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert!(last_message(&app).starts_with("Invalid equation: "));
    }

    #[test]
    fn rejected_guess_without_explanation() {
        let mut app = fixed_app(GameConfig::new().with_report_errors(false));
        type_guess(&mut app, "1+2=3+4");
        assert_eq!(last_message(&app), "Invalid equation, try again");
    }

    #[test]
    fn win_records_statistics_and_waits_for_new_game() {
        let mut app = fixed_app(GameConfig::new());
        type_guess(&mut app, "1+5=2+4");
        type_guess(&mut app, "2+3*2=8");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);

        // Symbols are ignored until a new game starts
        press(&mut app, KeyCode::Char('1'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Playing);
        assert!(app.board.is_empty());
        assert_eq!(app.session.attempts_remaining(), MAX_ATTEMPTS);
    }

    #[test]
    fn loss_reveals_solution() {
        let mut app = fixed_app(GameConfig::new());
        for _ in 0..MAX_ATTEMPTS {
            type_guess(&mut app, "4+3=5+2");
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("The equation was 2+3*2=8"))
        );
    }

    #[test]
    fn quit_keys() {
        let mut app = fixed_app(GameConfig::new());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = fixed_app(GameConfig::new());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_n_restarts_mid_game() {
        let mut app = fixed_app(GameConfig::new());
        type_guess(&mut app, "1+5=2+4");
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert!(app.board.is_empty());
        assert_eq!(app.session.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(app.stats.total_games, 0);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = fixed_app(GameConfig::new());
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(last_message(&app), "9");
    }
}
