//! Action log for the current hand.
//!
//! Every draw, bonus set-aside, discard, claim and win is appended to
//! `GameState::action_log` as an `ActionRecord`. The log is cleared when a
//! new hand is dealt.

use serde::{Deserialize, Serialize};

use super::seat::Seat;
use crate::tiles::TileId;

/// What happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Drew from the live wall.
    Draw,
    /// Drew from the dead wall (after a gang or a bonus tile).
    ReplacementDraw,
    /// Set a drawn flower or season aside.
    Bonus,
    Discard,
    Chi,
    Peng,
    Gang,
    SelfDrawWin,
    DiscardWin,
}

/// One logged action.
///
/// ## Example
///
/// ```
/// use mahjong_rules::core::{ActionKind, ActionRecord};
/// use mahjong_rules::Seat;
///
/// let record = ActionRecord::new(ActionKind::Peng, Seat::WEST)
///     .with_tile("dots-5-2")
///     .with_from(Seat::SOUTH);
/// assert_eq!(record.tile.as_ref().map(|t| t.as_str()), Some("dots-5-2"));
/// assert_eq!(record.from, Some(Seat::SOUTH));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub kind: ActionKind,

    /// Seat that acted.
    pub seat: Seat,

    /// Tile involved, if any. For claims and discard wins this is the
    /// claimed discard.
    pub tile: Option<TileId>,

    /// Seat the tile came from, for claims and discard wins.
    pub from: Option<Seat>,
}

impl ActionRecord {
    #[must_use]
    pub fn new(kind: ActionKind, seat: Seat) -> Self {
        Self {
            kind,
            seat,
            tile: None,
            from: None,
        }
    }

    #[must_use]
    pub fn with_tile(mut self, tile: impl Into<TileId>) -> Self {
        self.tile = Some(tile.into());
        self
    }

    #[must_use]
    pub fn with_from(mut self, from: Seat) -> Self {
        self.from = Some(from);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = ActionRecord::new(ActionKind::Discard, Seat::NORTH).with_tile("wind-east-1");

        assert_eq!(record.kind, ActionKind::Discard);
        assert_eq!(record.seat, Seat::NORTH);
        assert_eq!(record.tile, Some(TileId::new("wind-east-1")));
        assert_eq!(record.from, None);
    }

    #[test]
    fn test_record_serialization() {
        let record = ActionRecord::new(ActionKind::Chi, Seat::SOUTH)
            .with_tile("bamboo-3-0")
            .with_from(Seat::EAST);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
