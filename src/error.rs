//! Error types for game sessions

use crate::core::ValidationError;
use crate::game::GameState;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A session cannot be started
#[derive(Debug, Error)]
pub enum FatalError {
    /// No target equation to choose from
    #[error("equation catalog is empty; cannot start a game")]
    EmptyCatalog,

    /// Catalog file could not be read
    #[error("failed to read equation catalog {}: {source}", path.display())]
    CatalogUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A guess was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The guess failed validation; no attempt was used
    #[error("invalid guess: {0}")]
    Invalid(#[from] ValidationError),

    /// The game already ended; restart to keep playing
    #[error("the game is over ({0:?}); start a new game")]
    GameOver(GameState),
}

impl GuessError {
    /// The validation failure, if that is why the guess was rejected
    #[must_use]
    pub const fn validation(self) -> Option<ValidationError> {
        match self {
            Self::Invalid(error) => Some(error),
            Self::GameOver(_) => None,
        }
    }
}
