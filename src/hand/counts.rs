//! Face-count table for hand analysis.
//!
//! `TileCounts` is a `Copy` histogram over the 34 non-bonus faces. The win
//! detector recurses over it by value, so every branch of the search owns
//! its own table and nothing needs restoring on backtrack.

use crate::tiles::{Tile, TileInstance, FACE_COUNT};

/// Copies of each face in a tile set.
pub const COPIES_PER_FACE: u8 = 4;

/// Histogram of tile faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileCounts {
    counts: [u8; FACE_COUNT],
    total: u32,
}

impl Default for TileCounts {
    fn default() -> Self {
        Self {
            counts: [0; FACE_COUNT],
            total: 0,
        }
    }
}

impl TileCounts {
    /// Count faces. Returns `None` if any tile is a bonus tile or a face
    /// appears more than `COPIES_PER_FACE` times.
    #[must_use]
    pub fn from_tiles<I>(tiles: I) -> Option<Self>
    where
        I: IntoIterator<Item = Tile>,
    {
        let mut table = Self::default();
        for tile in tiles {
            let index = tile.face_index()?;
            if table.counts[index] >= COPIES_PER_FACE {
                return None;
            }
            table.counts[index] += 1;
            table.total += 1;
        }
        Some(table)
    }

    /// Count the faces of tile instances.
    #[must_use]
    pub fn from_instances(tiles: &[TileInstance]) -> Option<Self> {
        Self::from_tiles(tiles.iter().map(|t| t.tile))
    }

    /// Copies of `tile` in the table (0 for bonus tiles).
    #[must_use]
    pub fn get(&self, tile: Tile) -> u8 {
        tile.face_index().map_or(0, |i| self.counts[i])
    }

    /// Copies at a face index.
    #[must_use]
    pub fn at(&self, index: usize) -> u8 {
        self.counts[index]
    }

    /// Total tiles counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total as usize
    }

    /// Number of faces with a nonzero count.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Lowest face index with a nonzero count.
    #[must_use]
    pub fn first_present(&self) -> Option<usize> {
        self.counts.iter().position(|&c| c > 0)
    }

    /// A copy of this table with `n` copies removed at `index`.
    ///
    /// Callers check availability first; removing more than present is a bug.
    #[must_use]
    pub fn without(mut self, index: usize, n: u8) -> Self {
        debug_assert!(self.counts[index] >= n, "removing {n} from count {}", self.counts[index]);
        self.counts[index] -= n;
        self.total -= u32::from(n);
        self
    }

    /// Iterate over (face, count) for faces present.
    pub fn iter(&self) -> impl Iterator<Item = (Tile, u8)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, &c)| (Tile::from_face_index(i), c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{BonusKind, Dragon, Suit};

    #[test]
    fn test_counts_faces() {
        let five = Tile::suited(Suit::Dots, 5);
        let red = Tile::Dragon(Dragon::Red);
        let table = TileCounts::from_tiles([five, red, five]).unwrap();

        assert_eq!(table.get(five), 2);
        assert_eq!(table.get(red), 1);
        assert_eq!(table.total(), 3);
        assert_eq!(table.distinct(), 2);
        assert_eq!(table.first_present(), five.face_index());
    }

    #[test]
    fn test_bonus_tiles_are_rejected() {
        let flower = Tile::bonus(BonusKind::Flower, 1);
        assert!(TileCounts::from_tiles([Tile::suited(Suit::Dots, 1), flower]).is_none());
    }

    #[test]
    fn test_fifth_copy_is_rejected() {
        let east = Tile::Wind(crate::tiles::Wind::East);
        assert!(TileCounts::from_tiles([east; 4]).is_some());
        assert!(TileCounts::from_tiles([east; 5]).is_none());
        assert!(TileCounts::from_tiles(std::iter::repeat(east).take(300)).is_none());
    }

    #[test]
    fn test_without_returns_new_table() {
        let five = Tile::suited(Suit::Bamboo, 5);
        let table = TileCounts::from_tiles([five, five, five]).unwrap();
        let index = five.face_index().unwrap();

        let reduced = table.without(index, 2);

        assert_eq!(reduced.get(five), 1);
        assert_eq!(reduced.total(), 1);
        assert_eq!(table.get(five), 3);
    }

    #[test]
    fn test_iter_present_faces() {
        let table = TileCounts::from_tiles([
            Tile::suited(Suit::Characters, 9),
            Tile::suited(Suit::Dots, 1),
        ])
        .unwrap();
        let faces: Vec<_> = table.iter().collect();
        assert_eq!(
            faces,
            vec![(Tile::suited(Suit::Dots, 1), 1), (Tile::suited(Suit::Characters, 9), 1)]
        );
    }
}
