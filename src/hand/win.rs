//! Win detection.
//!
//! A hand is complete when its concealed tiles plus exposed melds make four
//! melds and a pair, or when it forms one of the two special shapes:
//!
//! - **Thirteen orphans**: one of each terminal and honor, one of them doubled
//! - **Seven pairs**: seven distinct faces, two of each
//!
//! Special shapes only count with no exposed melds and exactly 14 concealed
//! tiles.
//!
//! ## Decomposition
//!
//! The standard shape is found by exhaustive backtracking over a
//! `TileCounts` table. At each step the lowest remaining face is used as
//! (1) the pair, (2) a triplet, or (3) the low end of a run, in that order.
//! Every branch is tried before giving up: a greedy choice can strand tiles
//! that another split would have used.

use super::counts::TileCounts;
use crate::tiles::{Meld, Tile, TileInstance};

/// Melds in a complete hand.
pub const MELDS_PER_HAND: usize = 4;

/// Whether `concealed` plus `melds` is a complete hand.
///
/// Order of `concealed` is irrelevant. Bonus tiles never complete a hand.
///
/// ```
/// use mahjong_rules::hand::is_winning_hand;
/// use mahjong_rules::tiles::{Suit, Tile, TileInstance};
///
/// let mut hand = Vec::new();
/// for value in 1..=4u8 {
///     for copy in 0..3 {
///         hand.push(TileInstance::standard(Tile::suited(Suit::Dots, value), copy));
///     }
/// }
/// hand.push(TileInstance::standard(Tile::suited(Suit::Dots, 5), 0));
/// hand.push(TileInstance::standard(Tile::suited(Suit::Dots, 5), 1));
///
/// assert!(is_winning_hand(&hand, &[]));
/// hand.pop();
/// assert!(!is_winning_hand(&hand, &[]));
/// ```
#[must_use]
pub fn is_winning_hand(concealed: &[TileInstance], melds: &[Meld]) -> bool {
    let Some(counts) = TileCounts::from_instances(concealed) else {
        return false;
    };

    if melds.is_empty() && counts.total() == 14 && (is_thirteen_orphans(&counts) || is_seven_pairs(&counts)) {
        return true;
    }

    if melds.len() > MELDS_PER_HAND {
        return false;
    }
    let melds_needed = MELDS_PER_HAND - melds.len();
    if counts.total() != melds_needed * 3 + 2 {
        return false;
    }

    can_form_standard_hand(counts, melds_needed)
}

/// One of each terminal and honor plus exactly one duplicate, nothing else.
#[must_use]
pub fn is_thirteen_orphans(counts: &TileCounts) -> bool {
    if counts.total() != 14 {
        return false;
    }

    let mut pairs = 0;
    let mut covered = 0;
    for orphan in Tile::orphans() {
        match counts.get(orphan) {
            1 => covered += 1,
            2 => {
                covered += 2;
                pairs += 1;
            }
            _ => return false,
        }
    }

    pairs == 1 && covered == 14
}

/// Seven distinct faces, each exactly twice.
#[must_use]
pub fn is_seven_pairs(counts: &TileCounts) -> bool {
    counts.total() == 14 && counts.distinct() == 7 && counts.iter().all(|(_, c)| c == 2)
}

/// Whether `counts` splits into `melds_needed` melds plus one pair.
#[must_use]
pub fn can_form_standard_hand(counts: TileCounts, melds_needed: usize) -> bool {
    decompose(counts, melds_needed, false)
}

fn decompose(counts: TileCounts, melds_left: usize, has_pair: bool) -> bool {
    let Some(index) = counts.first_present() else {
        return melds_left == 0 && has_pair;
    };
    let count = counts.at(index);

    if !has_pair && count >= 2 && decompose(counts.without(index, 2), melds_left, true) {
        return true;
    }

    if melds_left == 0 {
        return false;
    }

    if count >= 3 && decompose(counts.without(index, 3), melds_left - 1, has_pair) {
        return true;
    }

    // Suited faces are indices 0..27, nine per suit; a run may start at 1-7.
    let starts_run = index < 27 && index % 9 <= 6;
    if starts_run && counts.at(index + 1) > 0 && counts.at(index + 2) > 0 {
        let rest = counts
            .without(index, 1)
            .without(index + 1, 1)
            .without(index + 2, 1);
        if decompose(rest, melds_left - 1, has_pair) {
            return true;
        }
    }

    false
}
