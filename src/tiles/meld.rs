//! Melds: groups of tiles claimed or declared together.

use serde::{Deserialize, Serialize};

use super::instance::TileInstance;
use super::tile::Tile;
use crate::core::Seat;

/// Kind of meld.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    /// Sequence of three consecutive same-suit tiles.
    Chi,
    /// Exposed triplet.
    Peng,
    /// Exposed quad.
    Gang,
    /// Quad declared from the concealed hand.
    ConcealedGang,
}

impl MeldKind {
    /// Triplet-shaped (peng or either gang).
    #[must_use]
    pub const fn is_triplet_like(self) -> bool {
        matches!(self, MeldKind::Peng | MeldKind::Gang | MeldKind::ConcealedGang)
    }

    /// Tiles a meld of this kind holds.
    #[must_use]
    pub const fn tile_count(self) -> usize {
        match self {
            MeldKind::Chi | MeldKind::Peng => 3,
            MeldKind::Gang | MeldKind::ConcealedGang => 4,
        }
    }
}

/// An immutable meld.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meld {
    pub kind: MeldKind,
    pub tiles: Vec<TileInstance>,
    /// Seat the claimed tile came from; `None` for concealed melds.
    pub from: Option<Seat>,
}

impl Meld {
    #[must_use]
    pub fn new(kind: MeldKind, tiles: Vec<TileInstance>, from: Option<Seat>) -> Self {
        debug_assert_eq!(tiles.len(), kind.tile_count(), "meld size mismatch for {kind:?}");
        Self { kind, tiles, from }
    }

    /// Whether this meld was declared from the concealed hand.
    #[must_use]
    pub fn is_concealed(&self) -> bool {
        self.kind == MeldKind::ConcealedGang
    }

    /// Face of the first tile; the shared face for triplet-like melds.
    #[must_use]
    pub fn lead_tile(&self) -> Option<Tile> {
        self.tiles.first().map(|t| t.tile)
    }

    /// Shared face if this is an exposed peng or gang.
    #[must_use]
    pub fn exposed_triplet_face(&self) -> Option<Tile> {
        match self.kind {
            MeldKind::Peng | MeldKind::Gang => self.lead_tile(),
            MeldKind::Chi | MeldKind::ConcealedGang => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{Dragon, Suit};

    fn copies(tile: Tile, n: u8) -> Vec<TileInstance> {
        (0..n).map(|c| TileInstance::standard(tile, c)).collect()
    }

    #[test]
    fn test_exposed_triplet_face() {
        let red = Tile::Dragon(Dragon::Red);
        let peng = Meld::new(MeldKind::Peng, copies(red, 3), Some(Seat::WEST));
        assert_eq!(peng.exposed_triplet_face(), Some(red));
        assert!(!peng.is_concealed());

        let concealed = Meld::new(MeldKind::ConcealedGang, copies(red, 4), None);
        assert_eq!(concealed.exposed_triplet_face(), None);
        assert!(concealed.is_concealed());
    }

    #[test]
    fn test_chi_is_not_triplet_like() {
        let run = vec![
            TileInstance::standard(Tile::suited(Suit::Dots, 3), 0),
            TileInstance::standard(Tile::suited(Suit::Dots, 4), 0),
            TileInstance::standard(Tile::suited(Suit::Dots, 5), 0),
        ];
        let chi = Meld::new(MeldKind::Chi, run, Some(Seat::EAST));
        assert!(!chi.kind.is_triplet_like());
        assert_eq!(chi.exposed_triplet_face(), None);
        assert_eq!(chi.lead_tile(), Some(Tile::suited(Suit::Dots, 3)));
    }
}
