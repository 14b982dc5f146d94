//! Numberle
//!
//! Wordle for arithmetic: guess a hidden 7-symbol equation such as `2+3*2=8` in six
//! tries, with per-symbol feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use numberle::catalog::Catalog;
//! use numberle::config::GameConfig;
//! use numberle::game::{GameSession, GameState};
//!
//! let config = GameConfig::new().with_random_target(false);
//! let mut session = GameSession::start(Catalog::embedded(), config).unwrap();
//!
//! // Rejected guesses do not cost an attempt
//! assert!(session.process_guess("1+2=3+4").is_err());
//! assert_eq!(session.attempts_remaining(), 6);
//!
//! let outcome = session.process_guess("1+5=2+4").unwrap();
//! println!("{}", outcome.feedback.to_emoji());
//! assert_eq!(outcome.state, GameState::InProgress);
//! ```

// Core domain types: equations, evaluation, validation, feedback
pub mod core;

// Equation catalogs
pub mod catalog;

// Session configuration
pub mod config;

// Error types
pub mod error;

// Game sessions
pub mod game;

// Guess analysis over the catalog
pub mod analysis;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
