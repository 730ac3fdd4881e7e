//! The `Ruleset` capability trait.
//!
//! A ruleset supplies everything variant-specific: which tiles exist, which
//! claims are legal, what completes a hand and what it is worth. The engine
//! calls through this trait and never branches on a ruleset's identity, so a
//! new variant is a new implementation plus a registry entry.

use serde::{Deserialize, Serialize};

use crate::hand::{ScoreBreakdown, WinContext};
use crate::tiles::{Meld, TileInstance};

/// Which claims a ruleset allows on a discard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallPolicy {
    pub allow_chi: bool,
    /// Chi only by the seat after the discarder.
    pub chi_from_left_only: bool,
    pub allow_peng: bool,
    pub allow_gang: bool,
}

impl Default for CallPolicy {
    fn default() -> Self {
        Self {
            allow_chi: true,
            chi_from_left_only: true,
            allow_peng: true,
            allow_gang: true,
        }
    }
}

/// A playable rules variant.
///
/// ## Implementation Notes
///
/// - `generate_tile_set`: every identity must be unique
/// - `is_winning_hand`: pure and order-independent; `hand` is the concealed
///   tiles including the winning tile
/// - `score_hand`: only called on hands `is_winning_hand` accepted
pub trait Ruleset: Send + Sync + std::fmt::Debug {
    /// Stable identifier used for registry lookup.
    fn id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    /// Every tile instance in a fresh set, unshuffled.
    fn generate_tile_set(&self) -> Vec<TileInstance>;

    fn call_policy(&self) -> CallPolicy;

    /// Fan a hand needs before it may be declared.
    fn minimum_fan(&self) -> u32 {
        0
    }

    /// Whether `hand` plus `melds` is complete.
    ///
    /// The default accepts four melds and a pair, seven pairs, and thirteen
    /// orphans.
    fn is_winning_hand(&self, hand: &[TileInstance], melds: &[Meld], _context: &WinContext) -> bool {
        crate::hand::is_winning_hand(hand, melds)
    }

    /// Score a complete hand.
    fn score_hand(&self, hand: &[TileInstance], melds: &[Meld], context: &WinContext) -> ScoreBreakdown;
}
