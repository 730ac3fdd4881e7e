//! Dealing: starting the first hand and every hand after it.
//!
//! The ruleset's tile set is shuffled with the state's RNG. Bonus tiles are
//! separated out, then regular tiles are dealt round-robin starting with the
//! dealer. The next `dead_wall_size` regular tiles plus every bonus tile form
//! the dead wall; the rest is the live wall.

use tracing::info;

use crate::core::{GameError, GameState, MatchPhase, Seat, SeatMap, TurnPhase, SEAT_COUNT};
use crate::rules::Ruleset;
use crate::tiles::TileInstance;
use im::Vector;

/// Deal the first hand. Requires four seated players.
pub fn start_game(state: &GameState, ruleset: &dyn Ruleset) -> Result<GameState, GameError> {
    if state.phase != MatchPhase::Waiting {
        return Err(GameError::GameAlreadyStarted);
    }
    if state.players.len() != SEAT_COUNT {
        return Err(GameError::WrongPlayerCount {
            count: state.players.len(),
        });
    }

    let next = deal(state, ruleset)?;
    info!(
        room = %next.room_code,
        ruleset = ruleset.id(),
        seed = next.rng.seed(),
        "game started"
    );
    Ok(next)
}

/// Deal the next hand of a finished match.
///
/// Scores carry over. If the dealer won, or nobody did, the dealer stays and
/// the hand counter is unchanged; otherwise the winner becomes dealer and
/// the hand counter increments. The round counter always increments.
pub fn start_next_round(
    state: &GameState,
    ruleset: &dyn Ruleset,
    prior_winner: Option<Seat>,
) -> Result<GameState, GameError> {
    if state.phase != MatchPhase::Finished {
        return Err(GameError::GameNotFinished);
    }
    if state.players.len() != SEAT_COUNT {
        return Err(GameError::WrongPlayerCount {
            count: state.players.len(),
        });
    }

    let mut next = state.clone();
    if let Some(winner) = prior_winner.filter(|w| *w != state.dealer) {
        next.dealer = winner;
        next.hand_number += 1;
    }
    next.round_number += 1;

    let next = deal(&next, ruleset)?;
    info!(
        room = %next.room_code,
        round = next.round_number,
        hand = next.hand_number,
        dealer = next.dealer.index(),
        "next round dealt"
    );
    Ok(next)
}

fn deal(state: &GameState, ruleset: &dyn Ruleset) -> Result<GameState, GameError> {
    let mut next = state.clone();
    let config = &state.config;

    let mut tiles = ruleset.generate_tile_set();
    next.rng.shuffle(&mut tiles);
    let tile_total = tiles.len();

    let (bonus, regular): (Vec<TileInstance>, Vec<TileInstance>) =
        tiles.into_iter().partition(|t| t.tile.is_bonus());
    let needed = config.regular_tiles_needed();
    if regular.len() < needed {
        return Err(GameError::InsufficientTiles {
            needed,
            available: regular.len(),
        });
    }

    let dealer = state.dealer;
    let order: Vec<Seat> = std::iter::once(dealer).chain(dealer.others()).collect();
    let mut hands: SeatMap<Vec<TileInstance>> = SeatMap::with_default();
    let mut regular = regular.into_iter();
    for _ in 0..config.tiles_per_hand {
        for &seat in &order {
            if let Some(tile) = regular.next() {
                hands[seat].push(tile);
            }
        }
    }

    for player in next.players.iter_mut() {
        player.hand = Vector::from(std::mem::take(&mut hands[player.seat]));
        player.sort_hand();
        player.melds = Vector::new();
        player.bonus_tiles = Vector::new();
        player.is_dealer = player.seat == dealer;
    }

    let mut dead_wall: Vector<TileInstance> = regular.by_ref().take(config.dead_wall_size).collect();
    dead_wall.extend(bonus);
    next.dead_wall = dead_wall;
    next.wall = regular.collect();
    next.tile_total = tile_total;
    next.discards = SeatMap::new(|_| Vector::new());

    next.phase = MatchPhase::Playing;
    next.current_turn = dealer;
    next.turn_phase = TurnPhase::Drawing;
    next.last_draw = None;
    next.kong_replacement = false;
    next.last_discard = None;
    next.pending_calls = Vector::new();
    next.awaiting_calls = Vector::new();
    next.action_log = Vector::new();
    next.outcome = None;

    next.check_invariants()?;
    Ok(next)
}
