//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! One of the four fixed table positions. Seat order is also turn order:
//! East (0) → South (1) → West (2) → North (3) → East.
//!
//! ## SeatMap
//!
//! Per-seat storage backed by a fixed array, indexable by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::GameError;
use crate::tiles::Wind;

/// Number of seats at a table.
pub const SEAT_COUNT: usize = 4;

/// A table position, 0-based (`Seat(0)` is East).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    pub const EAST: Seat = Seat(0);
    pub const SOUTH: Seat = Seat(1);
    pub const WEST: Seat = Seat(2);
    pub const NORTH: Seat = Seat(3);

    /// All seats in turn order.
    pub const ALL: [Seat; SEAT_COUNT] = [Seat::EAST, Seat::SOUTH, Seat::WEST, Seat::NORTH];

    /// Create a seat from its index.
    ///
    /// Panics if `index >= 4`. Use `Seat::try_from` for untrusted input.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < SEAT_COUNT as u8, "Seat index must be 0-3");
        Self(index)
    }

    /// Raw seat index (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % SEAT_COUNT as u8)
    }

    /// How many turns after `origin` this seat plays (0 for `origin` itself).
    ///
    /// ```
    /// use mahjong_rules::Seat;
    ///
    /// assert_eq!(Seat::SOUTH.distance_from(Seat::EAST), 1);
    /// assert_eq!(Seat::EAST.distance_from(Seat::SOUTH), 3);
    /// ```
    #[must_use]
    pub const fn distance_from(self, origin: Seat) -> u8 {
        (self.0 + SEAT_COUNT as u8 - origin.0) % SEAT_COUNT as u8
    }

    /// The seat wind, fixed by seat position.
    #[must_use]
    pub const fn wind(self) -> Wind {
        match self.0 {
            0 => Wind::East,
            1 => Wind::South,
            2 => Wind::West,
            _ => Wind::North,
        }
    }

    /// The three other seats, in turn order starting after this one.
    pub fn others(self) -> impl Iterator<Item = Seat> {
        (1..SEAT_COUNT as u8).map(move |offset| Seat((self.0 + offset) % SEAT_COUNT as u8))
    }
}

impl TryFrom<u8> for Seat {
    type Error = GameError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if (index as usize) < SEAT_COUNT {
            Ok(Self(index))
        } else {
            Err(GameError::InvalidSeat { index })
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {} ({})", self.0, self.wind())
    }
}

/// Per-seat data with O(1) access.
///
/// ```
/// use mahjong_rules::{Seat, SeatMap};
///
/// let mut scores: SeatMap<i64> = SeatMap::with_value(0);
/// scores[Seat::SOUTH] += 8;
/// assert_eq!(scores[Seat::SOUTH], 8);
/// assert_eq!(scores.values().sum::<i64>(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: Seat::ALL.map(factory),
        }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Iterate over (Seat, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Build a new map by transforming each entry.
    pub fn map<U>(&self, f: impl Fn(Seat, &T) -> U) -> SeatMap<U> {
        SeatMap::new(|seat| f(seat, &self.data[seat.index()]))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_basics() {
        assert_eq!(Seat::new(2).index(), 2);
        assert_eq!(Seat::NORTH.next(), Seat::EAST);
        assert_eq!(Seat::EAST.wind(), Wind::East);
        assert_eq!(format!("{}", Seat::SOUTH), "Seat 1 (South)");
    }

    #[test]
    fn test_seat_try_from() {
        assert_eq!(Seat::try_from(3), Ok(Seat::NORTH));
        assert_eq!(Seat::try_from(4), Err(GameError::InvalidSeat { index: 4 }));
    }

    #[test]
    #[should_panic(expected = "Seat index must be 0-3")]
    fn test_seat_new_out_of_range() {
        let _ = Seat::new(7);
    }

    #[test]
    fn test_distance_wraps() {
        assert_eq!(Seat::WEST.distance_from(Seat::WEST), 0);
        assert_eq!(Seat::EAST.distance_from(Seat::NORTH), 1);
        assert_eq!(Seat::SOUTH.distance_from(Seat::WEST), 3);
    }

    #[test]
    fn test_others_in_turn_order() {
        let others: Vec<_> = Seat::WEST.others().collect();
        assert_eq!(others, vec![Seat::NORTH, Seat::EAST, Seat::SOUTH]);
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<usize> = SeatMap::new(|s| s.index() * 10);

        assert_eq!(map[Seat::EAST], 0);
        assert_eq!(map[Seat::SOUTH], 10);
        assert_eq!(map[Seat::NORTH], 30);
    }

    #[test]
    fn test_seat_map_iter_and_map() {
        let map: SeatMap<i64> = SeatMap::new(|s| s.index() as i64);
        let doubled = map.map(|_, v| v * 2);

        let pairs: Vec<_> = doubled.iter().collect();
        assert_eq!(pairs[3], (Seat::NORTH, &6));
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<i64> = SeatMap::new(|s| s.index() as i64 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
