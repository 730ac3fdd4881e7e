//! Engine error taxonomy.
//!
//! Every rule violation is reported as a `GameError` at the point the
//! precondition fails, before any state is touched. `GameError::kind`
//! groups variants so a host can route them (e.g. protocol errors usually
//! mean a stale client).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::seat::Seat;
use super::state::TurnPhase;
use crate::calls::CallType;
use crate::tiles::TileId;

/// Broad category of a `GameError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Action arrived at the wrong point of the match.
    Sequencing,
    /// Action was well-timed but its content breaks a rule.
    Validation,
    /// Call-window protocol was not followed.
    Protocol,
    /// Seats, players, rulesets or tiles are missing or taken.
    Resource,
    /// Internal consistency check failed.
    Invariant,
}

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    // === Sequencing ===
    #[error("game not in progress")]
    GameNotInProgress,

    #[error("game already started")]
    GameAlreadyStarted,

    #[error("game not finished")]
    GameNotFinished,

    #[error("not your turn: {seat} tried to act")]
    NotYourTurn { seat: Seat },

    #[error("cannot {action} during {phase:?}")]
    WrongPhase { action: &'static str, phase: TurnPhase },

    #[error("no tile drawn this turn")]
    NoDrawnTile,

    // === Validation ===
    #[error("tile {tile} not in hand")]
    TileNotInHand { tile: TileId },

    #[error("not enough matching tiles for {call}")]
    NotEnoughMatchingTiles { call: CallType },

    #[error("tiles do not form a {call} with the discard")]
    InvalidCallTiles { call: CallType },

    #[error("{call} is not available to {seat}")]
    CallNotAvailable { seat: Seat, call: CallType },

    #[error("not a winning hand")]
    NotWinningHand,

    #[error("no discard to win on")]
    NoDiscardToWinOn,

    #[error("hand scores {fan} fan, minimum is {minimum}")]
    BelowMinimumFan { fan: u32, minimum: u32 },

    #[error("invalid seat index {index}")]
    InvalidSeat { index: u8 },

    // === Protocol ===
    #[error("call window not active")]
    CallWindowNotActive,

    #[error("not expecting a call from {seat}")]
    NotAwaitingCall { seat: Seat },

    #[error("call tile {tile} not in {seat}'s hand")]
    CallTilesNotInHand { seat: Seat, tile: TileId },

    // === Resource ===
    #[error("{seat} already taken")]
    SeatTaken { seat: Seat },

    #[error("player {id} already joined")]
    AlreadyJoined { id: String },

    #[error("player not found")]
    PlayerNotFound,

    #[error("need exactly 4 players, have {count}")]
    WrongPlayerCount { count: usize },

    #[error("unknown ruleset: {id}")]
    UnknownRuleset { id: String },

    #[error("tile set too small to deal: need {needed} regular tiles, have {available}")]
    InsufficientTiles { needed: usize, available: usize },

    // === Invariant ===
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl GameError {
    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::GameNotInProgress
            | GameError::GameAlreadyStarted
            | GameError::GameNotFinished
            | GameError::NotYourTurn { .. }
            | GameError::WrongPhase { .. }
            | GameError::NoDrawnTile => ErrorKind::Sequencing,

            GameError::TileNotInHand { .. }
            | GameError::NotEnoughMatchingTiles { .. }
            | GameError::InvalidCallTiles { .. }
            | GameError::CallNotAvailable { .. }
            | GameError::NotWinningHand
            | GameError::NoDiscardToWinOn
            | GameError::BelowMinimumFan { .. }
            | GameError::InvalidSeat { .. } => ErrorKind::Validation,

            GameError::CallWindowNotActive
            | GameError::NotAwaitingCall { .. }
            | GameError::CallTilesNotInHand { .. } => ErrorKind::Protocol,

            GameError::SeatTaken { .. }
            | GameError::AlreadyJoined { .. }
            | GameError::PlayerNotFound
            | GameError::WrongPlayerCount { .. }
            | GameError::UnknownRuleset { .. }
            | GameError::InsufficientTiles { .. } => ErrorKind::Resource,

            GameError::Invariant(_) => ErrorKind::Invariant,
        }
    }
}
