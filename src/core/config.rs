//! Table configuration.

use serde::{Deserialize, Serialize};

/// Dealing and room parameters for a table.
///
/// The ruleset decides *which* tiles exist and how they score; the table
/// config decides how many go where.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Concealed tiles dealt to each seat.
    pub tiles_per_hand: usize,

    /// Regular tiles reserved for gang replacement draws.
    /// Bonus tiles are appended on top of this.
    pub dead_wall_size: usize,

    /// Length of generated room codes.
    pub room_code_length: usize,

    /// RNG seed. `None` seeds from entropy when the state is created.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            tiles_per_hand: 13,
            dead_wall_size: 14,
            room_code_length: 4,
            seed: None,
        }
    }
}

impl TableConfig {
    /// Use a fixed RNG seed (reproducible deals).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the dead wall size.
    pub fn with_dead_wall_size(mut self, size: usize) -> Self {
        self.dead_wall_size = size;
        self
    }

    /// Set the room code length.
    pub fn with_room_code_length(mut self, length: usize) -> Self {
        self.room_code_length = length;
        self
    }

    /// Regular tiles needed to deal every hand and fill the dead wall.
    #[must_use]
    pub fn regular_tiles_needed(&self) -> usize {
        self.tiles_per_hand * super::seat::SEAT_COUNT + self.dead_wall_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TableConfig::default();
        assert_eq!(config.tiles_per_hand, 13);
        assert_eq!(config.dead_wall_size, 14);
        assert_eq!(config.seed, None);
        assert_eq!(config.regular_tiles_needed(), 66);
    }

    #[test]
    fn test_builder_pattern() {
        let config = TableConfig::default()
            .with_seed(123)
            .with_dead_wall_size(16)
            .with_room_code_length(6);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.dead_wall_size, 16);
        assert_eq!(config.room_code_length, 6);
    }

    #[test]
    fn test_serialization() {
        let config = TableConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TableConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
