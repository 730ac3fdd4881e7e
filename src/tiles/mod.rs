//! Tile and meld value types.
//!
//! - `Tile`: a face (suited, wind, dragon, bonus), compared by value
//! - `TileInstance`: a face plus a unique identity
//! - `Meld`: tiles claimed or declared together

pub mod instance;
pub mod meld;
pub mod tile;

pub use instance::{sort_tiles, TileId, TileInstance};
pub use meld::{Meld, MeldKind};
pub use tile::{BonusKind, Dragon, Suit, Tile, Wind, FACE_COUNT};
