//! Tile faces.
//!
//! A `Tile` is a face value only: two copies of 5-dots are equal `Tile`s.
//! Physical copies are told apart by `TileInstance`.

use serde::{Deserialize, Serialize};

/// Number suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Dots,
    Bamboo,
    Characters,
}

impl Suit {
    pub const ALL: [Suit; 3] = [Suit::Dots, Suit::Bamboo, Suit::Characters];

    /// Lower-case name, used in tile identities.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Dots => "dots",
            Suit::Bamboo => "bamboo",
            Suit::Characters => "characters",
        }
    }
}

/// Wind direction. Also names seat winds and the round wind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Wind {
    East,
    South,
    West,
    North,
}

impl Wind {
    pub const ALL: [Wind; 4] = [Wind::East, Wind::South, Wind::West, Wind::North];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Wind::East => "east",
            Wind::South => "south",
            Wind::West => "west",
            Wind::North => "north",
        }
    }
}

impl std::fmt::Display for Wind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Wind::East => "East",
            Wind::South => "South",
            Wind::West => "West",
            Wind::North => "North",
        };
        f.write_str(label)
    }
}

/// Dragon color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dragon {
    Red,
    Green,
    White,
}

impl Dragon {
    pub const ALL: [Dragon; 3] = [Dragon::Red, Dragon::Green, Dragon::White];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Dragon::Red => "red",
            Dragon::Green => "green",
            Dragon::White => "white",
        }
    }
}

/// Bonus tile family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    Flower,
    Season,
}

impl BonusKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BonusKind::Flower => "flower",
            BonusKind::Season => "season",
        }
    }
}

/// Number of distinct non-bonus faces (27 suited + 4 winds + 3 dragons).
pub const FACE_COUNT: usize = 34;

/// A tile face.
///
/// The derived ordering (suits by value, then winds, dragons, bonus) is the
/// display order for sorted hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tile {
    Suited { suit: Suit, value: u8 },
    Wind(Wind),
    Dragon(Dragon),
    Bonus { kind: BonusKind, number: u8 },
}

impl Tile {
    /// Suited tile. Panics unless `value` is 1-9.
    #[must_use]
    pub const fn suited(suit: Suit, value: u8) -> Self {
        assert!(value >= 1 && value <= 9, "Suited value must be 1-9");
        Tile::Suited { suit, value }
    }

    /// Bonus tile. Panics unless `number` is 1-4.
    #[must_use]
    pub const fn bonus(kind: BonusKind, number: u8) -> Self {
        assert!(number >= 1 && number <= 4, "Bonus number must be 1-4");
        Tile::Bonus { kind, number }
    }

    #[must_use]
    pub const fn is_bonus(self) -> bool {
        matches!(self, Tile::Bonus { .. })
    }

    /// Winds and dragons.
    #[must_use]
    pub const fn is_honor(self) -> bool {
        matches!(self, Tile::Wind(_) | Tile::Dragon(_))
    }

    /// Suited 1s and 9s.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Tile::Suited { value: 1 | 9, .. })
    }

    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        match self {
            Tile::Suited { suit, .. } => Some(suit),
            _ => None,
        }
    }

    /// Dense index over the 34 non-bonus faces, `None` for bonus tiles.
    ///
    /// Suited faces come first (`suit * 9 + value - 1`), then winds, then
    /// dragons, so a suited run occupies consecutive indices.
    #[must_use]
    pub const fn face_index(self) -> Option<usize> {
        match self {
            Tile::Suited { suit, value } => Some(suit as usize * 9 + value as usize - 1),
            Tile::Wind(wind) => Some(27 + wind as usize),
            Tile::Dragon(dragon) => Some(31 + dragon as usize),
            Tile::Bonus { .. } => None,
        }
    }

    /// Inverse of `face_index`. Panics if `index >= FACE_COUNT`.
    #[must_use]
    pub fn from_face_index(index: usize) -> Self {
        match index {
            0..=26 => Tile::Suited {
                suit: Suit::ALL[index / 9],
                value: (index % 9) as u8 + 1,
            },
            27..=30 => Tile::Wind(Wind::ALL[index - 27]),
            31..=33 => Tile::Dragon(Dragon::ALL[index - 31]),
            _ => panic!("face index {index} out of range"),
        }
    }

    /// The 13 terminal and honor faces.
    #[must_use]
    pub fn orphans() -> [Tile; 13] {
        [
            Tile::suited(Suit::Dots, 1),
            Tile::suited(Suit::Dots, 9),
            Tile::suited(Suit::Bamboo, 1),
            Tile::suited(Suit::Bamboo, 9),
            Tile::suited(Suit::Characters, 1),
            Tile::suited(Suit::Characters, 9),
            Tile::Wind(Wind::East),
            Tile::Wind(Wind::South),
            Tile::Wind(Wind::West),
            Tile::Wind(Wind::North),
            Tile::Dragon(Dragon::Red),
            Tile::Dragon(Dragon::Green),
            Tile::Dragon(Dragon::White),
        ]
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tile::Suited { suit, value } => {
                let name = match suit {
                    Suit::Dots => "Dots",
                    Suit::Bamboo => "Bamboo",
                    Suit::Characters => "Char",
                };
                write!(f, "{value} {name}")
            }
            Tile::Wind(wind) => write!(f, "{wind}"),
            Tile::Dragon(dragon) => match dragon {
                Dragon::Red => f.write_str("Red"),
                Dragon::Green => f.write_str("Green"),
                Dragon::White => f.write_str("White"),
            },
            Tile::Bonus { kind, number } => match kind {
                BonusKind::Flower => write!(f, "F{number}"),
                BonusKind::Season => write!(f, "S{number}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_index_round_trips_every_face() {
        for index in 0..FACE_COUNT {
            assert_eq!(Tile::from_face_index(index).face_index(), Some(index));
        }
    }

    #[test]
    fn test_bonus_has_no_face_index() {
        assert_eq!(Tile::bonus(BonusKind::Season, 2).face_index(), None);
    }

    #[test]
    fn test_suited_runs_are_contiguous() {
        let three = Tile::suited(Suit::Bamboo, 3).face_index().unwrap();
        let four = Tile::suited(Suit::Bamboo, 4).face_index().unwrap();
        assert_eq!(four, three + 1);
    }

    #[test]
    fn test_classification() {
        assert!(Tile::suited(Suit::Dots, 9).is_terminal());
        assert!(!Tile::suited(Suit::Dots, 5).is_terminal());
        assert!(Tile::Dragon(Dragon::White).is_honor());
        assert!(!Tile::Wind(Wind::North).is_terminal());
        assert!(Tile::bonus(BonusKind::Flower, 1).is_bonus());
        assert_eq!(Tile::Wind(Wind::East).suit(), None);
    }

    #[test]
    fn test_orphans_are_distinct_terminals_and_honors() {
        let orphans = Tile::orphans();
        for (i, tile) in orphans.iter().enumerate() {
            assert!(tile.is_terminal() || tile.is_honor());
            assert!(!orphans[i + 1..].contains(tile));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Tile::suited(Suit::Dots, 5).to_string(), "5 Dots");
        assert_eq!(Tile::suited(Suit::Characters, 1).to_string(), "1 Char");
        assert_eq!(Tile::Wind(Wind::East).to_string(), "East");
        assert_eq!(Tile::Dragon(Dragon::Red).to_string(), "Red");
        assert_eq!(Tile::bonus(BonusKind::Flower, 1).to_string(), "F1");
    }

    #[test]
    #[should_panic(expected = "Suited value must be 1-9")]
    fn test_suited_rejects_zero() {
        let _ = Tile::suited(Suit::Dots, 0);
    }
}
