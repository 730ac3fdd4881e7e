//! Drawing and discarding.

use im::Vector;
use tracing::{debug, info};

use crate::calls::calls_on_discard;
use crate::core::{
    ActionKind, ActionRecord, GameError, GameState, LastDiscard, MatchPhase, RoundOutcome, Seat, TurnPhase,
};
use crate::rules::Ruleset;
use crate::tiles::TileId;

/// Draw for the current seat.
///
/// In `Drawing` the tile comes from the live wall, in `Replacing` from the
/// dead wall. A bonus tile is set aside and replaced from the dead wall
/// until a regular tile arrives. If the source wall is empty the hand ends
/// as an exhaustive draw. Otherwise the seat moves to `Discarding`.
pub fn draw_tile(state: &GameState, _ruleset: &dyn Ruleset) -> Result<GameState, GameError> {
    if state.phase != MatchPhase::Playing {
        return Err(GameError::GameNotInProgress);
    }
    if !matches!(state.turn_phase, TurnPhase::Drawing | TurnPhase::Replacing) {
        return Err(GameError::WrongPhase {
            action: "draw",
            phase: state.turn_phase,
        });
    }

    let mut next = state.clone();
    let seat = next.current_turn;

    loop {
        let replacing = next.turn_phase == TurnPhase::Replacing;
        let source = if replacing { &mut next.dead_wall } else { &mut next.wall };

        let Some(tile) = source.pop_front() else {
            next.phase = MatchPhase::Finished;
            next.turn_phase = TurnPhase::GameOver;
            next.outcome = Some(RoundOutcome::ExhaustiveDraw);
            next.last_draw = None;
            info!(room = %next.room_code, replacing, "wall exhausted, hand drawn");
            return Ok(next);
        };

        if tile.tile.is_bonus() {
            let id = tile.id.clone();
            next.seated_mut(seat)?.bonus_tiles.push_back(tile);
            next.record(ActionRecord::new(ActionKind::Bonus, seat).with_tile(id));
            next.turn_phase = TurnPhase::Replacing;
            continue;
        }

        let id = tile.id.clone();
        let player = next.seated_mut(seat)?;
        player.hand.push_back(tile);
        player.sort_hand();

        let kind = if replacing {
            ActionKind::ReplacementDraw
        } else {
            ActionKind::Draw
        };
        next.record(ActionRecord::new(kind, seat).with_tile(id.clone()));
        next.last_draw = Some(id);
        next.turn_phase = TurnPhase::Discarding;
        next.check_invariants()?;

        debug!(room = %next.room_code, seat = seat.index(), replacing, wall = next.wall.len(), "tile drawn");
        return Ok(next);
    }
}

/// Discard `tile_id` from `seat`'s hand.
///
/// If any other seat can claim the tile, a call window opens and those
/// seats are awaited. Otherwise the turn passes to the next seat.
pub fn discard_tile(
    state: &GameState,
    seat: Seat,
    tile_id: &TileId,
    ruleset: &dyn Ruleset,
) -> Result<GameState, GameError> {
    if state.phase != MatchPhase::Playing {
        return Err(GameError::GameNotInProgress);
    }
    if state.current_turn != seat {
        return Err(GameError::NotYourTurn { seat });
    }
    if state.turn_phase != TurnPhase::Discarding {
        return Err(GameError::WrongPhase {
            action: "discard",
            phase: state.turn_phase,
        });
    }
    let position = state
        .seated(seat)?
        .hand_position(tile_id)
        .ok_or_else(|| GameError::TileNotInHand { tile: tile_id.clone() })?;

    let mut next = state.clone();
    let tile = next.seated_mut(seat)?.hand.remove(position);
    next.discards[seat].push_back(tile.clone());
    let discard = LastDiscard {
        tile: tile.clone(),
        from: seat,
    };
    next.last_discard = Some(discard.clone());
    next.last_draw = None;
    next.kong_replacement = false;
    next.pending_calls = Vector::new();
    next.record(ActionRecord::new(ActionKind::Discard, seat).with_tile(tile.id.clone()));

    let awaiting: Vector<Seat> = seat
        .others()
        .filter(|&other| !calls_on_discard(&next, other, &discard, ruleset).is_empty())
        .collect();

    if awaiting.is_empty() {
        next.current_turn = seat.next();
        next.turn_phase = TurnPhase::Drawing;
    } else {
        next.turn_phase = TurnPhase::WaitingForCalls;
    }
    next.awaiting_calls = awaiting;
    next.check_invariants()?;

    debug!(
        room = %next.room_code,
        seat = seat.index(),
        tile = %tile.id,
        awaiting = next.awaiting_calls.len(),
        "tile discarded"
    );
    Ok(next)
}
