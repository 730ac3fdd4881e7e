//! Core engine types: seats, state, action log, errors, RNG, configuration.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod seat;
pub mod state;

pub use action::{ActionKind, ActionRecord};
pub use config::TableConfig;
pub use error::{ErrorKind, GameError};
pub use rng::GameRng;
pub use seat::{Seat, SeatMap, SEAT_COUNT};
pub use state::{
    GameState, LastDiscard, MatchPhase, Player, RoundOutcome, TurnPhase, ACTIVE_HAND_SIZE,
    RESTING_HAND_SIZE,
};
