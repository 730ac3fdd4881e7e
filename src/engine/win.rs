//! Win declarations and settlement.
//!
//! Both paths check the hand with the ruleset, score it, enforce the
//! ruleset's minimum fan, apply the zero-sum transfer to the scores and
//! finish the hand with a `RoundOutcome::Win`.

use tracing::info;

use crate::calls::CallType;
use crate::core::{
    ActionKind, ActionRecord, GameError, GameState, MatchPhase, RoundOutcome, Seat, TurnPhase, ACTIVE_HAND_SIZE,
};
use crate::hand::{calculate_score_transfer, check_zero_sum, ScoreBreakdown, WinContext, WinSource};
use crate::rules::Ruleset;
use crate::tiles::{Meld, TileInstance};

/// A settled win.
#[derive(Clone, Debug)]
pub struct WinResult {
    /// The finished state.
    pub state: GameState,
    pub winner: Seat,
    pub breakdown: ScoreBreakdown,
    pub self_drawn: bool,
}

/// Declare a win on the tile `seat` just drew.
pub fn declare_self_draw_win(state: &GameState, seat: Seat, ruleset: &dyn Ruleset) -> Result<WinResult, GameError> {
    if state.phase != MatchPhase::Playing {
        return Err(GameError::GameNotInProgress);
    }
    if state.current_turn != seat {
        return Err(GameError::NotYourTurn { seat });
    }
    if state.turn_phase != TurnPhase::Discarding {
        return Err(GameError::WrongPhase {
            action: "declare a self-drawn win",
            phase: state.turn_phase,
        });
    }
    let drawn = state.last_draw.as_ref().ok_or(GameError::NoDrawnTile)?;

    let player = state.seated(seat)?;
    if player.effective_hand_size() != ACTIVE_HAND_SIZE {
        return Err(GameError::NotWinningHand);
    }
    let winning_tile = player
        .hand
        .iter()
        .find(|t| &t.id == drawn)
        .cloned()
        .ok_or(GameError::NoDrawnTile)?;

    let context = WinContext::self_drawn(winning_tile.clone(), seat.wind(), state.round_wind)
        .with_last_tile(state.wall.is_empty())
        .with_replacement_tile(state.kong_replacement);
    let hand = player.hand_tiles();
    let breakdown = evaluate(&hand, &player.meld_list(), &context, ruleset)?;

    let mut next = state.clone();
    next.record(ActionRecord::new(ActionKind::SelfDrawWin, seat).with_tile(winning_tile.id));
    settle(next, seat, breakdown, WinSource::SelfDrawn)
}

/// Declare a win on the open discard.
///
/// Only a seat with the discard open to it may win on it: one still awaited
/// in the call window, or one that registered a win. The discard moves from
/// the discarder's pile into the winner's hand.
///
/// Declaring directly skips arbitration: seats still awaited are not asked,
/// even one nearer the discarder. Route the win through `register_call` and
/// `resolve_call_window` for the proximity tie-break.
pub fn declare_discard_win(state: &GameState, seat: Seat, ruleset: &dyn Ruleset) -> Result<WinResult, GameError> {
    if state.phase != MatchPhase::Playing {
        return Err(GameError::GameNotInProgress);
    }
    if state.turn_phase != TurnPhase::WaitingForCalls {
        return Err(GameError::WrongPhase {
            action: "declare a discard win",
            phase: state.turn_phase,
        });
    }
    let discard = state.last_discard.as_ref().ok_or(GameError::NoDiscardToWinOn)?;
    let registered_win = state
        .pending_calls
        .iter()
        .any(|c| c.seat == seat && c.call == CallType::Win);
    if seat == discard.from || !(state.is_awaiting(seat) || registered_win) {
        return Err(GameError::NotAwaitingCall { seat });
    }

    let player = state.seated(seat)?;
    let mut hand = player.hand_tiles();
    hand.push(discard.tile.clone());

    let context = WinContext::on_discard(discard.tile.clone(), seat.wind(), state.round_wind)
        .with_last_tile(state.wall.is_empty());
    let breakdown = evaluate(&hand, &player.meld_list(), &context, ruleset)?;

    let mut next = state.clone();
    let pile = &mut next.discards[discard.from];
    let position = pile
        .iter()
        .position(|t| t.id == discard.tile.id)
        .ok_or_else(|| GameError::Invariant(format!("discard {} missing from pile", discard.tile.id)))?;
    pile.remove(position);

    let winner = next.seated_mut(seat)?;
    winner.hand.push_back(discard.tile.clone());
    winner.sort_hand();
    next.last_discard = None;
    next.record(
        ActionRecord::new(ActionKind::DiscardWin, seat)
            .with_tile(discard.tile.id.clone())
            .with_from(discard.from),
    );

    settle(next, seat, breakdown, WinSource::Discard { discarder: discard.from })
}

/// Whether the current seat can declare a self-drawn win right now.
#[must_use]
pub fn can_declare_win(state: &GameState, ruleset: &dyn Ruleset) -> bool {
    state.phase == MatchPhase::Playing
        && state.turn_phase == TurnPhase::Discarding
        && declare_self_draw_win(state, state.current_turn, ruleset).is_ok()
}

fn evaluate(
    hand: &[TileInstance],
    melds: &[Meld],
    context: &WinContext,
    ruleset: &dyn Ruleset,
) -> Result<ScoreBreakdown, GameError> {
    if !ruleset.is_winning_hand(hand, melds, context) {
        return Err(GameError::NotWinningHand);
    }
    let breakdown = ruleset.score_hand(hand, melds, context);
    let minimum = ruleset.minimum_fan();
    if breakdown.fan < minimum {
        return Err(GameError::BelowMinimumFan {
            fan: breakdown.fan,
            minimum,
        });
    }
    Ok(breakdown)
}

fn settle(
    mut next: GameState,
    winner: Seat,
    breakdown: ScoreBreakdown,
    source: WinSource,
) -> Result<WinResult, GameError> {
    let transfer = calculate_score_transfer(winner, &breakdown, source);
    check_zero_sum(&transfer)?;
    for (seat, delta) in transfer.iter() {
        next.scores[seat] += delta;
    }

    let self_drawn = source == WinSource::SelfDrawn;
    next.phase = MatchPhase::Finished;
    next.turn_phase = TurnPhase::GameOver;
    next.pending_calls.clear();
    next.awaiting_calls.clear();
    next.outcome = Some(RoundOutcome::Win {
        winner,
        self_drawn,
        fan: breakdown.fan,
        transfer,
    });
    next.check_invariants()?;

    info!(
        room = %next.room_code,
        winner = winner.index(),
        self_drawn,
        fan = breakdown.fan,
        points = breakdown.total_points,
        "hand won"
    );
    Ok(WinResult {
        state: next,
        winner,
        breakdown,
        self_drawn,
    })
}
