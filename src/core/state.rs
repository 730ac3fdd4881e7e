//! Match state: the aggregate every engine operation maps to a new value.
//!
//! ## Snapshots
//!
//! Collections use `im` persistent structures, so cloning a `GameState` is
//! O(1) and a clone shares structure with its source. Engine operations clone
//! the input, edit the clone, and hand it back only on success; the caller's
//! snapshot is never touched.
//!
//! ## Tile custody
//!
//! Once dealt, every tile identity sits in exactly one place: the live wall,
//! the dead wall, a concealed hand, a meld, a bonus collection, or a discard
//! pile. `GameState::check_invariants` verifies this.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::TableConfig;
use super::error::GameError;
use super::rng::GameRng;
use super::seat::{Seat, SeatMap};
use crate::calls::PendingCall;
use crate::tiles::{sort_tiles, Meld, TileId, TileInstance, Wind};

/// Tiles a seat holds between turns (concealed plus three per meld).
pub const RESTING_HAND_SIZE: usize = 13;

/// Tiles a seat holds while it must discard.
pub const ACTIVE_HAND_SIZE: usize = 14;

/// Match lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Seats are being filled.
    Waiting,
    Playing,
    /// A win or an exhausted wall ended the hand.
    Finished,
}

/// Sub-phase of the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Current seat must draw from the live wall.
    Drawing,
    /// Current seat holds an extra tile and must discard (or declare a win).
    Discarding,
    /// A discard is open to claims.
    WaitingForCalls,
    /// Current seat must draw from the dead wall.
    Replacing,
    GameOver,
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Host-assigned identity handle.
    pub id: String,
    pub name: String,
    pub seat: Seat,
    pub hand: Vector<TileInstance>,
    pub melds: Vector<Meld>,
    pub bonus_tiles: Vector<TileInstance>,
    pub is_dealer: bool,
}

impl Player {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, seat: Seat) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            seat,
            hand: Vector::new(),
            melds: Vector::new(),
            bonus_tiles: Vector::new(),
            is_dealer: false,
        }
    }

    /// Concealed tiles plus three per meld (a gang counts as three).
    #[must_use]
    pub fn effective_hand_size(&self) -> usize {
        self.hand.len() + 3 * self.melds.len()
    }

    /// Position of a tile in the concealed hand.
    #[must_use]
    pub fn hand_position(&self, id: &TileId) -> Option<usize> {
        self.hand.iter().position(|t| &t.id == id)
    }

    /// Concealed hand as a plain vector.
    #[must_use]
    pub fn hand_tiles(&self) -> Vec<TileInstance> {
        self.hand.iter().cloned().collect()
    }

    #[must_use]
    pub fn meld_list(&self) -> Vec<Meld> {
        self.melds.iter().cloned().collect()
    }

    /// Put the concealed hand in display order.
    pub fn sort_hand(&mut self) {
        let mut tiles = self.hand_tiles();
        sort_tiles(&mut tiles);
        self.hand = Vector::from(tiles);
    }
}

/// The most recent discard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastDiscard {
    pub tile: TileInstance,
    pub from: Seat,
}

/// How a finished hand ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win {
        winner: Seat,
        self_drawn: bool,
        fan: u32,
        transfer: SeatMap<i64>,
    },
    /// The wall ran out with no winner.
    ExhaustiveDraw,
}

impl RoundOutcome {
    /// Winning seat, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self {
            RoundOutcome::Win { winner, .. } => Some(*winner),
            RoundOutcome::ExhaustiveDraw => None,
        }
    }
}

/// Complete authoritative state of one match.
#[derive(Clone, Debug)]
pub struct GameState {
    // === Match ===
    pub phase: MatchPhase,
    pub room_code: String,
    pub ruleset_id: String,
    pub config: TableConfig,

    /// Seated players, ordered by seat.
    pub players: Vector<Player>,

    // === Tiles ===
    /// Live wall; the front is the next draw.
    pub wall: Vector<TileInstance>,

    /// Replacement tiles for gangs and bonus draws.
    pub dead_wall: Vector<TileInstance>,

    pub discards: SeatMap<Vector<TileInstance>>,

    /// Tile instances dealt this hand.
    pub tile_total: usize,

    // === Turn ===
    pub current_turn: Seat,
    pub turn_phase: TurnPhase,
    pub round_wind: Wind,
    pub dealer: Seat,

    /// Identity of the tile the current seat drew this turn.
    pub last_draw: Option<TileId>,

    /// The current seat's draw came from the dead wall after a gang claim.
    pub kong_replacement: bool,

    // === Call window ===
    pub last_discard: Option<LastDiscard>,
    pub pending_calls: Vector<PendingCall>,

    /// Seats that still owe a response, in turn order from the discarder.
    pub awaiting_calls: Vector<Seat>,

    // === Scoring and progression ===
    pub scores: SeatMap<i64>,
    pub round_number: u32,

    /// Hands played under the current dealer.
    pub hand_number: u32,

    pub action_log: Vector<ActionRecord>,
    pub outcome: Option<RoundOutcome>,

    pub rng: GameRng,
}

impl GameState {
    /// A fresh room in the waiting phase.
    #[must_use]
    pub fn new(room_code: impl Into<String>, ruleset_id: impl Into<String>, config: TableConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            phase: MatchPhase::Waiting,
            room_code: room_code.into(),
            ruleset_id: ruleset_id.into(),
            config,
            players: Vector::new(),
            wall: Vector::new(),
            dead_wall: Vector::new(),
            discards: SeatMap::new(|_| Vector::new()),
            tile_total: 0,
            current_turn: Seat::EAST,
            turn_phase: TurnPhase::Drawing,
            round_wind: Wind::East,
            dealer: Seat::EAST,
            last_draw: None,
            kong_replacement: false,
            last_discard: None,
            pending_calls: Vector::new(),
            awaiting_calls: Vector::new(),
            scores: SeatMap::with_value(0),
            round_number: 1,
            hand_number: 1,
            action_log: Vector::new(),
            outcome: None,
            rng,
        }
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.iter().find(|p| p.seat == seat)
    }

    pub fn player_mut(&mut self, seat: Seat) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.seat == seat)
    }

    #[must_use]
    pub fn player_by_id(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Player at `seat`, or `PlayerNotFound`.
    pub fn seated(&self, seat: Seat) -> Result<&Player, GameError> {
        self.player(seat).ok_or(GameError::PlayerNotFound)
    }

    pub fn seated_mut(&mut self, seat: Seat) -> Result<&mut Player, GameError> {
        self.player_mut(seat).ok_or(GameError::PlayerNotFound)
    }

    // === Queries ===

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == MatchPhase::Playing
    }

    #[must_use]
    pub fn is_awaiting(&self, seat: Seat) -> bool {
        self.awaiting_calls.contains(&seat)
    }

    /// Append to the action log.
    pub fn record(&mut self, record: ActionRecord) {
        self.action_log.push_back(record);
    }

    // === Invariants ===

    /// Verify tile custody and hand sizes.
    ///
    /// Custody: every dealt identity is held exactly once and none are lost.
    /// Hand sizes: while a hand is live, the seat that must discard holds 14
    /// and every other seat 13.
    pub fn check_invariants(&self) -> Result<(), GameError> {
        if self.phase == MatchPhase::Waiting {
            return Ok(());
        }

        let containers = self
            .wall
            .iter()
            .chain(self.dead_wall.iter())
            .chain(self.discards.values().flat_map(|pile| pile.iter()))
            .chain(self.players.iter().flat_map(|p| {
                p.hand
                    .iter()
                    .chain(p.bonus_tiles.iter())
                    .chain(p.melds.iter().flat_map(|m| m.tiles.iter()))
            }));

        let mut count = 0;
        let mut seen: FxHashSet<&TileId> = FxHashSet::default();
        for tile in containers {
            if !seen.insert(&tile.id) {
                return Err(GameError::Invariant(format!("tile {} held twice", tile.id)));
            }
            count += 1;
        }
        if count != self.tile_total {
            return Err(GameError::Invariant(format!(
                "{count} tiles in play, {} dealt",
                self.tile_total
            )));
        }

        if self.phase == MatchPhase::Playing && self.turn_phase != TurnPhase::GameOver {
            for player in &self.players {
                let expected = if player.seat == self.current_turn && self.turn_phase == TurnPhase::Discarding {
                    ACTIVE_HAND_SIZE
                } else {
                    RESTING_HAND_SIZE
                };
                let size = player.effective_hand_size();
                if size != expected {
                    return Err(GameError::Invariant(format!(
                        "{} holds {size} tiles, expected {expected}",
                        player.seat
                    )));
                }
            }
        }

        Ok(())
    }
}
