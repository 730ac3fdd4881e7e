//! Scoring: fan factors and point transfers.
//!
//! A ruleset scores a won hand by filling a `ScoreSheet` with named factors
//! and closing it with a fan cap. The sheet turns fan into points
//! (`2^min(fan, cap)`), and `calculate_score_transfer` turns points into a
//! zero-sum change per seat.
//!
//! ## Example
//!
//! ```
//! use mahjong_rules::hand::{calculate_score_transfer, Factor, ScoreSheet, WinSource};
//! use mahjong_rules::Seat;
//!
//! let mut sheet = ScoreSheet::new();
//! sheet.award(Factor::SelfDraw, 1);
//! sheet.award(Factor::AllTriplets, 3);
//! let breakdown = sheet.finish(10);
//! assert_eq!(breakdown.fan, 4);
//! assert_eq!(breakdown.total_points, 16);
//!
//! let transfer = calculate_score_transfer(Seat::SOUTH, &breakdown, WinSource::SelfDrawn);
//! assert_eq!(transfer[Seat::SOUTH], 48);
//! assert_eq!(transfer.values().sum::<i64>(), 0);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Seat, SeatMap};
use crate::tiles::{Dragon, TileInstance, Wind};

/// Facts about a win that the tiles alone do not show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinContext {
    pub winning_tile: TileInstance,
    pub self_drawn: bool,
    pub seat_wind: Wind,
    pub round_wind: Wind,
    /// Won with the live wall empty.
    pub last_tile: bool,
    /// Won on the replacement draw after a gang.
    pub replacement_tile: bool,
    pub robbing_gang: bool,
}

impl WinContext {
    /// Context for a win on a tile this seat drew.
    #[must_use]
    pub fn self_drawn(winning_tile: TileInstance, seat_wind: Wind, round_wind: Wind) -> Self {
        Self {
            winning_tile,
            self_drawn: true,
            seat_wind,
            round_wind,
            last_tile: false,
            replacement_tile: false,
            robbing_gang: false,
        }
    }

    /// Context for a win on another seat's discard.
    #[must_use]
    pub fn on_discard(winning_tile: TileInstance, seat_wind: Wind, round_wind: Wind) -> Self {
        Self {
            self_drawn: false,
            ..Self::self_drawn(winning_tile, seat_wind, round_wind)
        }
    }

    pub fn with_last_tile(mut self, last_tile: bool) -> Self {
        self.last_tile = last_tile;
        self
    }

    pub fn with_replacement_tile(mut self, replacement_tile: bool) -> Self {
        self.replacement_tile = replacement_tile;
        self
    }

    pub fn with_robbing_gang(mut self, robbing_gang: bool) -> Self {
        self.robbing_gang = robbing_gang;
        self
    }
}

/// A named scoring factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factor {
    SelfDraw,
    AllTriplets,
    MixedOneSuit,
    PureOneSuit,
    AllHonors,
    DragonTriplet(Dragon),
    SeatWind,
    RoundWind,
    ConcealedSelfDraw,
    LastTile,
    ReplacementTile,
    RobbingGang,
    ChickenHand,
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Factor::SelfDraw => f.write_str("Self-Draw"),
            Factor::AllTriplets => f.write_str("All Triplets"),
            Factor::MixedOneSuit => f.write_str("Mixed One Suit"),
            Factor::PureOneSuit => f.write_str("Pure One Suit"),
            Factor::AllHonors => f.write_str("All Honors"),
            Factor::DragonTriplet(Dragon::Red) => f.write_str("Red Dragon"),
            Factor::DragonTriplet(Dragon::Green) => f.write_str("Green Dragon"),
            Factor::DragonTriplet(Dragon::White) => f.write_str("White Dragon"),
            Factor::SeatWind => f.write_str("Seat Wind"),
            Factor::RoundWind => f.write_str("Round Wind"),
            Factor::ConcealedSelfDraw => f.write_str("Concealed Hand"),
            Factor::LastTile => f.write_str("Last Tile"),
            Factor::ReplacementTile => f.write_str("Win on Gang"),
            Factor::RobbingGang => f.write_str("Robbing Gang"),
            Factor::ChickenHand => f.write_str("Chicken Hand"),
        }
    }
}

/// One applied factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreItem {
    pub factor: Factor,
    pub fan: u32,
}

/// The scored value of a win.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub fan: u32,
    pub items: Vec<ScoreItem>,
    pub base_points: i64,
    pub total_points: i64,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn has(&self, factor: Factor) -> bool {
        self.items.iter().any(|item| item.factor == factor)
    }
}

/// Points for `fan`, capped: `2^min(fan, cap)`.
#[must_use]
pub fn points_for_fan(fan: u32, cap: u32) -> i64 {
    1i64 << fan.min(cap).min(62)
}

/// Accumulator for factors while a hand is being scored.
#[derive(Clone, Debug, Default)]
pub struct ScoreSheet {
    items: Vec<ScoreItem>,
}

impl ScoreSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, factor: Factor, fan: u32) {
        self.items.push(ScoreItem { factor, fan });
    }

    /// Remove a factor previously awarded (e.g. one superseded by a stronger one).
    pub fn retract(&mut self, factor: Factor) {
        self.items.retain(|item| item.factor != factor);
    }

    #[must_use]
    pub fn has(&self, factor: Factor) -> bool {
        self.items.iter().any(|item| item.factor == factor)
    }

    #[must_use]
    pub fn fan(&self) -> u32 {
        self.items.iter().map(|item| item.fan).sum()
    }

    /// Close the sheet. A hand with no fan is recorded as a chicken hand.
    #[must_use]
    pub fn finish(mut self, fan_cap: u32) -> ScoreBreakdown {
        let fan = self.fan();
        if fan == 0 {
            self.award(Factor::ChickenHand, 0);
        }
        let points = points_for_fan(fan, fan_cap);
        ScoreBreakdown {
            fan,
            items: self.items,
            base_points: points,
            total_points: points,
        }
    }
}

/// How the winning tile arrived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinSource {
    SelfDrawn,
    Discard { discarder: Seat },
}

/// Per-seat score change for a win.
///
/// Self-drawn: every opponent pays `total_points`. On a discard the
/// discarder pays double and the other two pay single. The result sums to
/// zero.
#[must_use]
pub fn calculate_score_transfer(winner: Seat, breakdown: &ScoreBreakdown, source: WinSource) -> SeatMap<i64> {
    let base = breakdown.total_points;
    let mut transfer = SeatMap::with_value(0i64);

    for loser in winner.others() {
        let payment = match source {
            WinSource::Discard { discarder } if discarder == loser => base * 2,
            _ => base,
        };
        transfer[loser] -= payment;
        transfer[winner] += payment;
    }

    transfer
}

/// Error unless the deltas sum to zero.
pub fn check_zero_sum(transfer: &SeatMap<i64>) -> Result<(), GameError> {
    let sum: i64 = transfer.values().sum();
    if sum == 0 {
        Ok(())
    } else {
        Err(GameError::Invariant(format!("score transfer sums to {sum}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(fan: u32) -> ScoreBreakdown {
        let mut sheet = ScoreSheet::new();
        if fan > 0 {
            sheet.award(Factor::AllHonors, fan);
        }
        sheet.finish(10)
    }

    #[test]
    fn test_points_for_fan() {
        assert_eq!(points_for_fan(0, 10), 1);
        assert_eq!(points_for_fan(3, 10), 8);
        assert_eq!(points_for_fan(10, 10), 1024);
        assert_eq!(points_for_fan(13, 10), 1024);
    }

    #[test]
    fn test_chicken_hand_added_at_zero_fan() {
        let result = ScoreSheet::new().finish(10);
        assert_eq!(result.fan, 0);
        assert_eq!(result.total_points, 1);
        assert!(result.has(Factor::ChickenHand));
    }

    #[test]
    fn test_retract() {
        let mut sheet = ScoreSheet::new();
        sheet.award(Factor::MixedOneSuit, 3);
        sheet.award(Factor::SelfDraw, 1);
        sheet.retract(Factor::MixedOneSuit);
        assert!(!sheet.has(Factor::MixedOneSuit));
        assert_eq!(sheet.fan(), 1);
    }

    #[test]
    fn test_self_drawn_transfer() {
        let result = breakdown(3);
        let transfer = calculate_score_transfer(Seat::EAST, &result, WinSource::SelfDrawn);

        assert_eq!(transfer[Seat::EAST], 24);
        for seat in Seat::EAST.others() {
            assert_eq!(transfer[seat], -8);
        }
        assert!(check_zero_sum(&transfer).is_ok());
    }

    #[test]
    fn test_discard_transfer() {
        let result = breakdown(1);
        let source = WinSource::Discard { discarder: Seat::NORTH };
        let transfer = calculate_score_transfer(Seat::WEST, &result, source);

        assert_eq!(transfer[Seat::NORTH], -4);
        assert_eq!(transfer[Seat::EAST], -2);
        assert_eq!(transfer[Seat::SOUTH], -2);
        assert_eq!(transfer[Seat::WEST], 8);
        assert!(check_zero_sum(&transfer).is_ok());
    }

    #[test]
    fn test_zero_sum_check_reports_invariant() {
        let mut transfer = SeatMap::with_value(0i64);
        transfer[Seat::EAST] = 5;
        let err = check_zero_sum(&transfer).unwrap_err();
        assert_eq!(err.kind(), crate::core::ErrorKind::Invariant);
    }

    #[test]
    fn test_factor_labels() {
        assert_eq!(Factor::DragonTriplet(Dragon::Green).to_string(), "Green Dragon");
        assert_eq!(Factor::ChickenHand.to_string(), "Chicken Hand");
    }
}
