//! Game session state machine
//!
//! `InProgress → Won | Lost`, with `restart` returning to `InProgress`.

mod session;

pub use session::{GameSession, GameState, GuessOutcome, MAX_ATTEMPTS};
