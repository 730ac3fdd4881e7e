//! Read-only projections of a `GameState`.
//!
//! A `PlayerView` is what one seat may see: its own concealed hand, every
//! seat's melds, bonus tiles and discards, and only a tile count for the
//! other hands. A `TableView` shows every hand as a count. Wall contents are
//! never exposed.

use serde::{Deserialize, Serialize};

use super::win::can_declare_win;
use crate::calls::{calls_on_discard, AvailableCall};
use crate::core::{
    GameError, GameState, LastDiscard, MatchPhase, Player, RoundOutcome, Seat, SeatMap, TurnPhase,
};
use crate::rules::Ruleset;
use crate::tiles::{Meld, TileInstance, Wind};

/// Another seat's public information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactedPlayer {
    pub id: String,
    pub name: String,
    pub seat: Seat,
    pub hand_count: usize,
    pub melds: Vec<Meld>,
    pub bonus_tiles: Vec<TileInstance>,
    pub is_dealer: bool,
}

impl From<&Player> for RedactedPlayer {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            seat: player.seat,
            hand_count: player.hand.len(),
            melds: player.meld_list(),
            bonus_tiles: player.bonus_tiles.iter().cloned().collect(),
            is_dealer: player.is_dealer,
        }
    }
}

/// The state as seen from one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub phase: MatchPhase,
    pub room_code: String,
    pub ruleset_id: String,

    pub seat: Seat,
    pub hand: Vec<TileInstance>,
    pub melds: Vec<Meld>,
    pub bonus_tiles: Vec<TileInstance>,
    pub others: Vec<RedactedPlayer>,

    pub discards: SeatMap<Vec<TileInstance>>,
    pub current_turn: Seat,
    pub turn_phase: TurnPhase,
    pub round_wind: Wind,
    pub dealer: Seat,
    pub last_discard: Option<LastDiscard>,

    /// Claims open to this seat; empty outside its call window.
    pub available_calls: Vec<AvailableCall>,
    /// This seat may declare a self-drawn win now.
    pub can_win: bool,

    pub wall_count: usize,
    pub dead_wall_count: usize,
    pub scores: SeatMap<i64>,
    pub round_number: u32,
    pub hand_number: u32,
    pub outcome: Option<RoundOutcome>,
}

/// The state with every hand hidden.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub phase: MatchPhase,
    pub room_code: String,
    pub ruleset_id: String,
    pub players: Vec<RedactedPlayer>,
    pub discards: SeatMap<Vec<TileInstance>>,
    pub current_turn: Seat,
    pub turn_phase: TurnPhase,
    pub round_wind: Wind,
    pub dealer: Seat,
    pub last_discard: Option<LastDiscard>,
    pub wall_count: usize,
    pub dead_wall_count: usize,
    pub scores: SeatMap<i64>,
    pub round_number: u32,
    pub hand_number: u32,
    pub outcome: Option<RoundOutcome>,
}

fn discard_piles(state: &GameState) -> SeatMap<Vec<TileInstance>> {
    state.discards.map(|_, pile| pile.iter().cloned().collect())
}

/// View of `state` for the player with `player_id`.
pub fn player_view(state: &GameState, player_id: &str, ruleset: &dyn Ruleset) -> Result<PlayerView, GameError> {
    let player = state.player_by_id(player_id).ok_or(GameError::PlayerNotFound)?;
    let seat = player.seat;
    let hand = player.hand_tiles();
    let melds = player.meld_list();

    let available_calls = match &state.last_discard {
        Some(discard) if state.turn_phase == TurnPhase::WaitingForCalls && state.is_awaiting(seat) => {
            calls_on_discard(state, seat, discard, ruleset)
        }
        _ => Vec::new(),
    };
    let can_win = seat == state.current_turn && can_declare_win(state, ruleset);

    Ok(PlayerView {
        phase: state.phase,
        room_code: state.room_code.clone(),
        ruleset_id: state.ruleset_id.clone(),
        seat,
        hand,
        melds,
        bonus_tiles: player.bonus_tiles.iter().cloned().collect(),
        others: state
            .players
            .iter()
            .filter(|p| p.seat != seat)
            .map(RedactedPlayer::from)
            .collect(),
        discards: discard_piles(state),
        current_turn: state.current_turn,
        turn_phase: state.turn_phase,
        round_wind: state.round_wind,
        dealer: state.dealer,
        last_discard: state.last_discard.clone(),
        available_calls,
        can_win,
        wall_count: state.wall.len(),
        dead_wall_count: state.dead_wall.len(),
        scores: state.scores.clone(),
        round_number: state.round_number,
        hand_number: state.hand_number,
        outcome: state.outcome.clone(),
    })
}

/// View of `state` for spectators.
#[must_use]
pub fn table_view(state: &GameState) -> TableView {
    TableView {
        phase: state.phase,
        room_code: state.room_code.clone(),
        ruleset_id: state.ruleset_id.clone(),
        players: state.players.iter().map(RedactedPlayer::from).collect(),
        discards: discard_piles(state),
        current_turn: state.current_turn,
        turn_phase: state.turn_phase,
        round_wind: state.round_wind,
        dealer: state.dealer,
        last_discard: state.last_discard.clone(),
        wall_count: state.wall.len(),
        dead_wall_count: state.dead_wall.len(),
        scores: state.scores.clone(),
        round_number: state.round_number,
        hand_number: state.hand_number,
        outcome: state.outcome.clone(),
    }
}
