//! Claim eligibility on a discard.
//!
//! For each seat other than the discarder, `compute_available_calls` lists
//! the claims it could make and, for chi/peng/gang, the hand tiles each
//! option would use. Seats with an empty list are not asked to respond.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameState, LastDiscard, Seat};
use crate::hand::WinContext;
use crate::rules::Ruleset;
use crate::tiles::{Meld, MeldKind, Tile, TileId, TileInstance, Wind};

/// Hand tile identities used by one claim option.
pub type CallTiles = SmallVec<[TileId; 3]>;

/// A response to a discard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallType {
    Chi,
    Peng,
    Gang,
    Win,
    Pass,
}

impl CallType {
    /// Resolution priority; higher wins.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            CallType::Win => 4,
            CallType::Gang => 3,
            CallType::Peng => 2,
            CallType::Chi => 1,
            CallType::Pass => 0,
        }
    }

    /// Meld formed by a successful claim.
    #[must_use]
    pub const fn meld_kind(self) -> Option<MeldKind> {
        match self {
            CallType::Chi => Some(MeldKind::Chi),
            CallType::Peng => Some(MeldKind::Peng),
            CallType::Gang => Some(MeldKind::Gang),
            CallType::Win | CallType::Pass => None,
        }
    }

    /// Hand tiles the claimer must name.
    #[must_use]
    pub const fn tiles_required(self) -> usize {
        match self {
            CallType::Chi | CallType::Peng => 2,
            CallType::Gang => 3,
            CallType::Win | CallType::Pass => 0,
        }
    }
}

impl std::fmt::Display for CallType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CallType::Chi => "chi",
            CallType::Peng => "peng",
            CallType::Gang => "gang",
            CallType::Win => "win",
            CallType::Pass => "pass",
        };
        f.write_str(name)
    }
}

/// One claim a seat may make, with every tile choice for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableCall {
    pub call: CallType,
    /// Tile choices; empty for a win.
    pub options: Vec<CallTiles>,
}

/// Hand tile pairs that make a run with `discard`.
///
/// Positions are tried low (discard is the lowest value), middle, then
/// high. Within a position every pair of distinct identities is reported.
#[must_use]
pub fn find_chi_combinations(hand: &[TileInstance], discard: &TileInstance) -> Vec<CallTiles> {
    let Tile::Suited { suit, value } = discard.tile else {
        return Vec::new();
    };

    let with_value = |v: i8| -> Vec<&TileId> {
        if !(1..=9).contains(&v) {
            return Vec::new();
        }
        hand.iter()
            .filter(|t| t.tile == Tile::suited(suit, v as u8))
            .map(|t| &t.id)
            .collect()
    };

    let value = value as i8;
    let positions = [(value + 1, value + 2), (value - 1, value + 1), (value - 2, value - 1)];

    let mut combinations = Vec::new();
    for (a, b) in positions {
        let (lows, highs) = (with_value(a), with_value(b));
        for low in &lows {
            for high in &highs {
                combinations.push(SmallVec::from_iter([(*low).clone(), (*high).clone()]));
            }
        }
    }
    combinations
}

fn matching(hand: &[TileInstance], discard: &TileInstance, n: usize) -> Option<CallTiles> {
    let tiles: CallTiles = hand
        .iter()
        .filter(|t| t.tile == discard.tile)
        .take(n)
        .map(|t| t.id.clone())
        .collect();
    (tiles.len() == n).then_some(tiles)
}

/// First two hand tiles matching `discard`, if there are two.
#[must_use]
pub fn find_peng_tiles(hand: &[TileInstance], discard: &TileInstance) -> Option<CallTiles> {
    matching(hand, discard, 2)
}

/// First three hand tiles matching `discard`, if there are three.
#[must_use]
pub fn find_gang_tiles(hand: &[TileInstance], discard: &TileInstance) -> Option<CallTiles> {
    matching(hand, discard, 3)
}

/// Every claim `claimant` may make on `discard`.
///
/// Order: peng, gang, chi, win. The discarder never has calls on its own
/// tile. Win eligibility checks the hand with the discard appended, in an
/// East round; `calls_on_discard` uses the table's actual round wind.
#[must_use]
pub fn compute_available_calls(
    hand: &[TileInstance],
    discard: &TileInstance,
    claimant: Seat,
    discarder: Seat,
    ruleset: &dyn Ruleset,
    melds: &[Meld],
) -> Vec<AvailableCall> {
    available_calls(hand, discard, claimant, discarder, ruleset, melds, Wind::East)
}

/// Claims `seat` may make on the open discard of `state`.
pub(crate) fn calls_on_discard(
    state: &GameState,
    seat: Seat,
    discard: &LastDiscard,
    ruleset: &dyn Ruleset,
) -> Vec<AvailableCall> {
    let Some(player) = state.player(seat) else {
        return Vec::new();
    };
    available_calls(
        &player.hand_tiles(),
        &discard.tile,
        seat,
        discard.from,
        ruleset,
        &player.meld_list(),
        state.round_wind,
    )
}

fn available_calls(
    hand: &[TileInstance],
    discard: &TileInstance,
    claimant: Seat,
    discarder: Seat,
    ruleset: &dyn Ruleset,
    melds: &[Meld],
    round_wind: Wind,
) -> Vec<AvailableCall> {
    if claimant == discarder {
        return Vec::new();
    }

    let policy = ruleset.call_policy();
    let mut calls = Vec::new();

    if policy.allow_peng {
        if let Some(tiles) = find_peng_tiles(hand, discard) {
            calls.push(AvailableCall {
                call: CallType::Peng,
                options: vec![tiles],
            });
        }
    }

    if policy.allow_gang {
        if let Some(tiles) = find_gang_tiles(hand, discard) {
            calls.push(AvailableCall {
                call: CallType::Gang,
                options: vec![tiles],
            });
        }
    }

    let chi_seat = claimant == discarder.next();
    if policy.allow_chi && (chi_seat || !policy.chi_from_left_only) {
        let combinations = find_chi_combinations(hand, discard);
        if !combinations.is_empty() {
            calls.push(AvailableCall {
                call: CallType::Chi,
                options: combinations,
            });
        }
    }

    let mut with_discard = hand.to_vec();
    with_discard.push(discard.clone());
    let context = WinContext::on_discard(discard.clone(), claimant.wind(), round_wind);
    if ruleset.is_winning_hand(&with_discard, melds, &context) {
        calls.push(AvailableCall {
            call: CallType::Win,
            options: Vec::new(),
        });
    }

    calls
}

/// Whether `tiles` from a hand form `call` together with `discard`.
///
/// Checks shape only (count, faces, distinct identities), not policy.
#[must_use]
pub fn forms_call(call: CallType, tiles: &[TileInstance], discard: &TileInstance) -> bool {
    if tiles.len() != call.tiles_required() {
        return false;
    }
    let distinct = tiles
        .iter()
        .enumerate()
        .all(|(i, t)| tiles[..i].iter().all(|u| u.id != t.id) && t.id != discard.id);
    if !distinct {
        return false;
    }

    match call {
        CallType::Peng | CallType::Gang => tiles.iter().all(|t| t.tile == discard.tile),
        CallType::Chi => {
            let Tile::Suited { suit, value } = discard.tile else {
                return false;
            };
            let mut values: SmallVec<[u8; 3]> = SmallVec::new();
            values.push(value);
            for t in tiles {
                match t.tile {
                    Tile::Suited { suit: s, value: v } if s == suit => values.push(v),
                    _ => return false,
                }
            }
            values.sort_unstable();
            values[1] == values[0] + 1 && values[2] == values[1] + 1
        }
        CallType::Win | CallType::Pass => true,
    }
}
