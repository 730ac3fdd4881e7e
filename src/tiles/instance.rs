//! Physical tile copies.
//!
//! A `TileInstance` pairs a face with an identity that is unique across the
//! whole tile set (`dots-5-2` is the third 5-dots). Identities are how the
//! engine tracks which container holds which copy, and how callers name the
//! exact tiles they discard or call with.

use serde::{Deserialize, Serialize};

use super::tile::Tile;

/// Unique identity of one physical tile.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(String);

impl TileId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TileId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A tile face plus its identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileInstance {
    pub id: TileId,
    pub tile: Tile,
}

impl TileInstance {
    #[must_use]
    pub fn new(id: impl Into<TileId>, tile: Tile) -> Self {
        Self { id: id.into(), tile }
    }

    /// Build an instance whose identity follows the standard naming scheme:
    /// `{suit}-{value}-{copy}`, `wind-{dir}-{copy}`, `dragon-{color}-{copy}`,
    /// `{flower|season}-{number}`.
    #[must_use]
    pub fn standard(tile: Tile, copy: u8) -> Self {
        let id = match tile {
            Tile::Suited { suit, value } => format!("{}-{value}-{copy}", suit.name()),
            Tile::Wind(wind) => format!("wind-{}-{copy}", wind.name()),
            Tile::Dragon(dragon) => format!("dragon-{}-{copy}", dragon.name()),
            Tile::Bonus { kind, number } => format!("{}-{number}", kind.name()),
        };
        Self { id: TileId(id), tile }
    }
}

impl From<String> for TileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Sort order for displayed hands: by face, then identity.
pub fn sort_tiles(tiles: &mut [TileInstance]) {
    tiles.sort_by(|a, b| a.tile.cmp(&b.tile).then_with(|| a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{BonusKind, Dragon, Suit, Wind};

    #[test]
    fn test_standard_ids() {
        assert_eq!(
            TileInstance::standard(Tile::suited(Suit::Dots, 5), 2).id.as_str(),
            "dots-5-2"
        );
        assert_eq!(
            TileInstance::standard(Tile::Wind(Wind::East), 0).id.as_str(),
            "wind-east-0"
        );
        assert_eq!(
            TileInstance::standard(Tile::Dragon(Dragon::Green), 3).id.as_str(),
            "dragon-green-3"
        );
        assert_eq!(
            TileInstance::standard(Tile::bonus(BonusKind::Season, 4), 0).id.as_str(),
            "season-4"
        );
    }

    #[test]
    fn test_sort_tiles() {
        let mut tiles = vec![
            TileInstance::standard(Tile::Dragon(Dragon::Red), 0),
            TileInstance::standard(Tile::suited(Suit::Bamboo, 2), 1),
            TileInstance::standard(Tile::suited(Suit::Dots, 9), 0),
            TileInstance::standard(Tile::suited(Suit::Bamboo, 2), 0),
        ];
        sort_tiles(&mut tiles);

        let ids: Vec<_> = tiles.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["dots-9-0", "bamboo-2-0", "bamboo-2-1", "dragon-red-0"]);
    }
}
