//! Numberle game session
//!
//! Owns the target, the attempt counter and the character knowledge, and
//! drives validation and scoring for each guess.

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::core::{CharacterKnowledge, Equation, Feedback, validate};
use crate::error::{FatalError, GuessError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Guesses allowed per game
pub const MAX_ATTEMPTS: u8 = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Everything a front end needs after an accepted guess
#[derive(Debug, Clone)]
pub struct GuessOutcome {
    pub guess: Equation,
    pub feedback: Feedback,
    pub attempts_remaining: u8,
    pub state: GameState,
    pub knowledge: CharacterKnowledge,
}

impl GuessOutcome {
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.state, GameState::Won)
    }
}

/// A single game of Numberle
///
/// Generic over the random source so target selection can be pinned in tests.
pub struct GameSession<R: Rng = StdRng> {
    catalog: Catalog,
    config: GameConfig,
    rng: R,
    target: Equation,
    attempts_remaining: u8,
    state: GameState,
    knowledge: CharacterKnowledge,
    last_feedback: Option<Feedback>,
}

impl GameSession<StdRng> {
    /// Start a game, seeding the random source from `config.seed` or the OS
    ///
    /// # Errors
    ///
    /// Returns `FatalError::EmptyCatalog` if there is no equation to choose from.
    ///
    /// # Examples
    /// ```
    /// use numberle::catalog::Catalog;
    /// use numberle::config::GameConfig;
    /// use numberle::game::GameSession;
    ///
    /// let config = GameConfig::new().with_random_target(false).with_show_target(true);
    /// let session = GameSession::start(Catalog::embedded(), config).unwrap();
    ///
    /// assert_eq!(session.target().map(|t| t.text()), Some("2+3*2=8"));
    /// assert_eq!(session.attempts_remaining(), 6);
    /// ```
    pub fn start(catalog: Catalog, config: GameConfig) -> Result<Self, FatalError> {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::with_rng(catalog, config, rng)
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a game drawing random targets from `rng`
    ///
    /// # Errors
    ///
    /// Returns `FatalError::EmptyCatalog` if there is no equation to choose from.
    pub fn with_rng(catalog: Catalog, config: GameConfig, mut rng: R) -> Result<Self, FatalError> {
        let target = select_target(&catalog, config.random_target, &mut rng)?;

        let session = Self {
            catalog,
            config,
            rng,
            target,
            attempts_remaining: MAX_ATTEMPTS,
            state: GameState::InProgress,
            knowledge: CharacterKnowledge::new(),
            last_feedback: None,
        };
        session.log_start();
        Ok(session)
    }

    /// Submit a guess
    ///
    /// Rejected guesses leave the session untouched. An accepted guess uses one
    /// attempt, updates the knowledge sets and may end the game.
    ///
    /// # Errors
    ///
    /// - `GuessError::GameOver` once the game is won or lost
    /// - `GuessError::Invalid` if the guess fails validation
    pub fn process_guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        if self.state.is_over() {
            return Err(GuessError::GameOver(self.state));
        }

        let guess = validate(input, self.config.strict_validation).inspect_err(|error| {
            debug!(input, %error, "guess rejected");
        })?;

        self.attempts_remaining -= 1;
        let feedback = Feedback::calculate(&guess, &self.target);
        self.knowledge.record(&guess, feedback);
        self.last_feedback = Some(feedback);

        if guess == self.target {
            self.state = GameState::Won;
        } else if self.attempts_remaining == 0 {
            self.state = GameState::Lost;
        }

        debug!(
            guess = guess.text(),
            feedback = %feedback.to_emoji(),
            attempts_remaining = self.attempts_remaining,
            "guess accepted"
        );
        if self.state.is_over() {
            info!(
                state = ?self.state,
                attempts_used = self.attempts_used(),
                solution = self.target.text(),
                "game finished"
            );
        }

        Ok(GuessOutcome {
            guess,
            feedback,
            attempts_remaining: self.attempts_remaining,
            state: self.state,
            knowledge: self.knowledge.clone(),
        })
    }

    /// Start over with a new target, keeping the configuration
    ///
    /// # Errors
    ///
    /// Returns `FatalError::EmptyCatalog` if there is no equation to choose from.
    pub fn restart(&mut self) -> Result<(), FatalError> {
        self.target = select_target(&self.catalog, self.config.random_target, &mut self.rng)?;
        self.attempts_remaining = MAX_ATTEMPTS;
        self.state = GameState::InProgress;
        self.knowledge.reset();
        self.last_feedback = None;
        self.log_start();
        Ok(())
    }

    /// The target, only when the configuration reveals it
    #[must_use]
    pub fn target(&self) -> Option<&Equation> {
        self.config.show_target.then_some(&self.target)
    }

    /// The target, once the game is over
    #[must_use]
    pub fn solution(&self) -> Option<&Equation> {
        self.state.is_over().then_some(&self.target)
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    #[must_use]
    pub const fn attempts_used(&self) -> u8 {
        MAX_ATTEMPTS - self.attempts_remaining
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub const fn knowledge(&self) -> &CharacterKnowledge {
        &self.knowledge
    }

    /// Feedback for the most recent accepted guess
    #[must_use]
    pub const fn last_feedback(&self) -> Option<Feedback> {
        self.last_feedback
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn log_start(&self) {
        if self.config.show_target {
            info!(equation = self.target.text(), "new game");
        } else {
            info!(catalog_size = self.catalog.len(), "new game");
        }
    }
}

fn select_target<R: Rng>(catalog: &Catalog, random: bool, rng: &mut R) -> Result<Equation, FatalError> {
    if catalog.is_empty() {
        return Err(FatalError::EmptyCatalog);
    }

    let index = if random {
        rng.random_range(0..catalog.len())
    } else {
        0
    };
    debug!(index, random, "selected target");

    catalog.get(index).cloned().ok_or(FatalError::EmptyCatalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::loader::equations_from_slice;
    use crate::core::ValidationError;

    fn fixed_config() -> GameConfig {
        GameConfig::new()
            .with_show_target(true)
            .with_random_target(false)
    }

    fn fixed_session() -> GameSession {
        let catalog = equations_from_slice(&["2+3*2=8", "43+3=46", "61+3=64"]);
        GameSession::start(catalog, fixed_config()).unwrap()
    }

    #[test]
    fn start_selects_first_equation_when_fixed() {
        let session = fixed_session();
        assert_eq!(session.target().unwrap().text(), "2+3*2=8");
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(session.state(), GameState::InProgress);
        assert!(session.knowledge().is_fresh());
        assert_eq!(session.last_feedback(), None);
    }

    #[test]
    fn start_refuses_empty_catalog() {
        let result = GameSession::start(Catalog::default(), fixed_config());
        assert!(matches!(result, Err(FatalError::EmptyCatalog)));
    }

    #[test]
    fn target_hidden_unless_configured() {
        let catalog = equations_from_slice(&["2+3*2=8"]);
        let config = GameConfig::new().with_random_target(false);
        let session = GameSession::start(catalog, config).unwrap();

        assert_eq!(session.target(), None);
        assert_eq!(session.solution(), None);
    }

    #[test]
    fn invalid_guess_changes_nothing() {
        let mut session = fixed_session();
        let result = session.process_guess("1+2=3");

        assert_eq!(
            result.unwrap_err(),
            GuessError::Invalid(ValidationError::TooShort { len: 5 })
        );
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        assert!(session.knowledge().is_fresh());
        assert_eq!(session.last_feedback(), None);
    }

    #[test]
    fn valid_guess_uses_an_attempt() {
        let mut session = fixed_session();
        let outcome = session.process_guess("1+5=2+4").unwrap();

        assert_eq!(outcome.attempts_remaining, 5);
        assert_eq!(outcome.state, GameState::InProgress);
        assert!(!outcome.is_won());
        assert_eq!(session.last_feedback(), Some(outcome.feedback));
        assert_eq!(outcome.knowledge, *session.knowledge());
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut session = fixed_session();
        let outcome = session.process_guess("2+3*2=8").unwrap();

        assert!(outcome.is_won());
        assert!(outcome.feedback.is_perfect());
        assert!(session.is_won());
        assert_eq!(session.solution().unwrap().text(), "2+3*2=8");
        assert_eq!(
            session.process_guess("43+3=46").unwrap_err(),
            GuessError::GameOver(GameState::Won)
        );
        assert_eq!(session.attempts_remaining(), 5);
    }

    #[test]
    fn lenient_session_accepts_false_equations() {
        let catalog = equations_from_slice(&["2+3*2=8"]);
        let config = fixed_config().with_strict_validation(false);
        let mut session = GameSession::start(catalog, config).unwrap();

        let outcome = session.process_guess("1+2=3+4").unwrap();
        assert_eq!(outcome.attempts_remaining, 5);

        // Structural checks still apply
        assert!(session.process_guess("1+-3=+4").is_err());
        assert_eq!(session.attempts_remaining(), 5);
    }

    #[test]
    fn seeded_sessions_agree() {
        let config = GameConfig::new().with_show_target(true).with_seed(1234);
        let first = GameSession::start(Catalog::embedded(), config.clone()).unwrap();
        let second = GameSession::start(Catalog::embedded(), config).unwrap();

        assert_eq!(first.target(), second.target());
        assert!(Catalog::embedded().contains(first.target().unwrap()));
    }

    #[test]
    fn restart_keeps_configuration() {
        let mut session = fixed_session();
        session.process_guess("1+5=2+4").unwrap();
        session.restart().unwrap();

        assert_eq!(session.config(), &fixed_config());
        assert_eq!(session.target().unwrap().text(), "2+3*2=8");
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        assert!(session.knowledge().is_fresh());
    }
}
