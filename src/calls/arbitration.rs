//! Call window: collecting and resolving claims on a discard.
//!
//! ## Protocol
//!
//! 1. `discard_tile` opens the window and lists the seats that have at least
//!    one claim (`GameState::awaiting_calls`).
//! 2. Each awaited seat answers once with `register_call` (a claim with the
//!    hand tiles it uses, or a pass).
//! 3. `resolve_call_window` picks the winning declaration once every awaited
//!    seat has answered: win > gang > peng > chi, ties to the seat closest
//!    after the discarder. If everyone passed, play moves to the seat after
//!    the discarder.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::available::{calls_on_discard, forms_call, CallTiles, CallType};
use crate::core::{ActionKind, ActionRecord, GameError, GameState, MatchPhase, Seat, TurnPhase};
use crate::engine::{declare_discard_win, WinResult};
use crate::rules::Ruleset;
use crate::tiles::{sort_tiles, Meld, TileId, TileInstance};

/// An accepted declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCall {
    pub seat: Seat,
    pub call: CallType,
    /// Hand tiles the claim uses; empty for win and pass.
    pub tiles: CallTiles,
}

/// What `resolve_call_window` did.
#[derive(Clone, Debug)]
pub enum CallResolution {
    /// Some seats have not answered; the state is unchanged.
    Pending(GameState),
    /// Everyone passed; the seat after the discarder draws.
    Passed(GameState),
    /// A chi, peng or gang was executed.
    Claimed {
        state: GameState,
        seat: Seat,
        call: CallType,
    },
    /// A seat won on the discard.
    Win(Box<WinResult>),
}

impl CallResolution {
    /// The resulting state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        match self {
            CallResolution::Pending(state) | CallResolution::Passed(state) => state,
            CallResolution::Claimed { state, .. } => state,
            CallResolution::Win(result) => &result.state,
        }
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        match self {
            CallResolution::Pending(state) | CallResolution::Passed(state) => state,
            CallResolution::Claimed { state, .. } => state,
            CallResolution::Win(result) => result.state,
        }
    }
}

fn open_window(state: &GameState) -> Result<&crate::core::LastDiscard, GameError> {
    if state.phase != MatchPhase::Playing {
        return Err(GameError::GameNotInProgress);
    }
    if state.turn_phase != TurnPhase::WaitingForCalls {
        return Err(GameError::CallWindowNotActive);
    }
    state.last_discard.as_ref().ok_or(GameError::CallWindowNotActive)
}

/// Record `seat`'s answer to the open discard.
///
/// `tile_ids` names the hand tiles a chi, peng or gang uses and must be
/// empty for a win or a pass. The declaration is checked against the seat's
/// hand and its available calls before it is accepted; the seat then leaves
/// the awaiting set.
pub fn register_call(
    state: &GameState,
    seat: Seat,
    call: CallType,
    tile_ids: &[TileId],
    ruleset: &dyn Ruleset,
) -> Result<GameState, GameError> {
    let discard = open_window(state)?;
    if !state.is_awaiting(seat) {
        return Err(GameError::NotAwaitingCall { seat });
    }
    let player = state.seated(seat)?;

    let mut tiles: Vec<TileInstance> = Vec::with_capacity(tile_ids.len());
    for id in tile_ids {
        let tile = player
            .hand
            .iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| GameError::CallTilesNotInHand {
                seat,
                tile: id.clone(),
            })?;
        tiles.push(tile.clone());
    }

    if call != CallType::Pass {
        if tiles.len() < call.tiles_required() {
            return Err(GameError::NotEnoughMatchingTiles { call });
        }
        if !forms_call(call, &tiles, &discard.tile) {
            return Err(GameError::InvalidCallTiles { call });
        }

        let available = calls_on_discard(state, seat, discard, ruleset);
        if !available.iter().any(|a| a.call == call) {
            return Err(GameError::CallNotAvailable { seat, call });
        }
    } else if !tiles.is_empty() {
        return Err(GameError::InvalidCallTiles { call });
    }

    let mut next = state.clone();
    next.pending_calls.push_back(PendingCall {
        seat,
        call,
        tiles: tile_ids.iter().cloned().collect(),
    });
    next.awaiting_calls.retain(|s| *s != seat);

    debug!(room = %next.room_code, seat = seat.index(), %call, "call registered");
    Ok(next)
}

/// Resolve the window once every awaited seat has answered.
///
/// A winning claim is handed to `declare_discard_win`. An empty set of
/// declarations counts as everyone passing.
pub fn resolve_call_window(state: &GameState, ruleset: &dyn Ruleset) -> Result<CallResolution, GameError> {
    let discard = open_window(state)?;
    if !state.awaiting_calls.is_empty() {
        return Ok(CallResolution::Pending(state.clone()));
    }

    let discarder = discard.from;
    let best = state
        .pending_calls
        .iter()
        .filter(|c| c.call != CallType::Pass)
        .min_by_key(|c| (Reverse(c.call.priority()), c.seat.distance_from(discarder)));

    let Some(best) = best else {
        let mut next = state.clone();
        next.current_turn = discarder.next();
        next.turn_phase = TurnPhase::Drawing;
        next.pending_calls.clear();
        next.last_draw = None;
        next.kong_replacement = false;
        debug!(room = %next.room_code, next = next.current_turn.index(), "all seats passed");
        return Ok(CallResolution::Passed(next));
    };

    match best.call {
        CallType::Win => {
            let result = declare_discard_win(state, best.seat, ruleset)?;
            Ok(CallResolution::Win(Box::new(result)))
        }
        call => {
            let next = execute_claim(state, best)?;
            Ok(CallResolution::Claimed {
                state: next,
                seat: best.seat,
                call,
            })
        }
    }
}

/// Move the claimed discard and the named hand tiles into a new meld.
fn execute_claim(state: &GameState, claim: &PendingCall) -> Result<GameState, GameError> {
    let kind = claim
        .call
        .meld_kind()
        .ok_or_else(|| GameError::Invariant(format!("{} does not form a meld", claim.call)))?;

    let mut next = state.clone();
    let discard = next.last_discard.take().ok_or(GameError::CallWindowNotActive)?;
    let from = discard.from;

    let pile = &mut next.discards[from];
    let position = pile
        .iter()
        .position(|t| t.id == discard.tile.id)
        .ok_or_else(|| GameError::Invariant(format!("discard {} missing from pile", discard.tile.id)))?;
    pile.remove(position);

    let player = next.seated_mut(claim.seat)?;
    let mut meld_tiles = Vec::with_capacity(kind.tile_count());
    for id in &claim.tiles {
        let position = player.hand_position(id).ok_or_else(|| GameError::CallTilesNotInHand {
            seat: claim.seat,
            tile: id.clone(),
        })?;
        meld_tiles.push(player.hand.remove(position));
    }
    meld_tiles.push(discard.tile.clone());
    sort_tiles(&mut meld_tiles);
    player.melds.push_back(Meld::new(kind, meld_tiles, Some(from)));

    let is_gang = claim.call == CallType::Gang;
    next.current_turn = claim.seat;
    next.turn_phase = if is_gang { TurnPhase::Replacing } else { TurnPhase::Discarding };
    next.kong_replacement = is_gang;
    next.last_draw = None;
    next.pending_calls.clear();
    next.awaiting_calls.clear();

    let log_kind = match claim.call {
        CallType::Chi => ActionKind::Chi,
        CallType::Peng => ActionKind::Peng,
        _ => ActionKind::Gang,
    };
    next.record(
        ActionRecord::new(log_kind, claim.seat)
            .with_tile(discard.tile.id.clone())
            .with_from(from),
    );
    next.check_invariants()?;

    debug!(
        room = %next.room_code,
        seat = claim.seat.index(),
        call = %claim.call,
        tile = %discard.tile.id,
        "claim executed"
    );
    Ok(next)
}
