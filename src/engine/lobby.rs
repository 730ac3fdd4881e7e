//! Room setup: creating a state, seating and unseating players.

use tracing::debug;

use crate::core::{GameError, GameRng, GameState, MatchPhase, Player, Seat, TableConfig};

/// Room code alphabet, without easily confused characters (0/O, 1/I).
pub const ROOM_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// A random room code of `len` characters.
#[must_use]
pub fn generate_room_code(rng: &mut GameRng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(ROOM_CODE_ALPHABET[rng.gen_range_usize(0..ROOM_CODE_ALPHABET.len())]))
        .collect()
}

/// A new room in the waiting phase, with default table settings and an
/// entropy-seeded RNG.
#[must_use]
pub fn create_initial_state(room_code: impl Into<String>, ruleset_id: impl Into<String>) -> GameState {
    create_initial_state_with(room_code, ruleset_id, TableConfig::default())
}

/// A new room in the waiting phase with explicit table settings.
#[must_use]
pub fn create_initial_state_with(
    room_code: impl Into<String>,
    ruleset_id: impl Into<String>,
    config: TableConfig,
) -> GameState {
    GameState::new(room_code, ruleset_id, config)
}

/// Seat a player.
pub fn add_player(state: &GameState, id: &str, name: &str, seat: Seat) -> Result<GameState, GameError> {
    if state.phase != MatchPhase::Waiting {
        return Err(GameError::GameAlreadyStarted);
    }
    if state.player(seat).is_some() {
        return Err(GameError::SeatTaken { seat });
    }
    if state.player_by_id(id).is_some() {
        return Err(GameError::AlreadyJoined { id: id.to_string() });
    }

    let mut player = Player::new(id, name, seat);
    player.is_dealer = seat == state.dealer;

    let mut next = state.clone();
    let position = next
        .players
        .iter()
        .position(|p| p.seat > seat)
        .unwrap_or(next.players.len());
    next.players.insert(position, player);

    debug!(room = %next.room_code, player = id, seat = seat.index(), "player seated");
    Ok(next)
}

/// Unseat a player before the game starts.
pub fn remove_player(state: &GameState, id: &str) -> Result<GameState, GameError> {
    if state.phase != MatchPhase::Waiting {
        return Err(GameError::GameAlreadyStarted);
    }
    let position = state
        .players
        .iter()
        .position(|p| p.id == id)
        .ok_or(GameError::PlayerNotFound)?;

    let mut next = state.clone();
    next.players.remove(position);

    debug!(room = %next.room_code, player = id, "player left");
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> GameState {
        create_initial_state_with("ROOM", "hongkong", TableConfig::default().with_seed(3))
    }

    #[test]
    fn test_room_code() {
        let mut rng = GameRng::new(9);
        let code = generate_room_code(&mut rng, 6);
        assert_eq!(code.len(), 6);
        assert!(code.bytes().all(|b| ROOM_CODE_ALPHABET.contains(&b)));
        assert!(!code.contains('O') && !code.contains('1'));

        let mut again = GameRng::new(9);
        assert_eq!(generate_room_code(&mut again, 6), code);
    }

    #[test]
    fn test_initial_state() {
        let state = create_initial_state("ABCD", "hongkong");
        assert_eq!(state.phase, MatchPhase::Waiting);
        assert_eq!(state.room_code, "ABCD");
        assert_eq!(state.ruleset_id, "hongkong");
        assert_eq!(state.config, TableConfig::default());
    }

    #[test]
    fn test_players_kept_in_seat_order() {
        let state = add_player(&room(), "c", "Cy", Seat::WEST).unwrap();
        let state = add_player(&state, "a", "Al", Seat::EAST).unwrap();
        let state = add_player(&state, "b", "Bea", Seat::SOUTH).unwrap();

        let seats: Vec<_> = state.players.iter().map(|p| p.seat).collect();
        assert_eq!(seats, vec![Seat::EAST, Seat::SOUTH, Seat::WEST]);
        assert!(state.player(Seat::EAST).unwrap().is_dealer);
        assert!(!state.player(Seat::WEST).unwrap().is_dealer);
    }

    #[test]
    fn test_add_player_rejections() {
        let state = add_player(&room(), "a", "Al", Seat::EAST).unwrap();

        assert_eq!(
            add_player(&state, "b", "Bea", Seat::EAST).unwrap_err(),
            GameError::SeatTaken { seat: Seat::EAST }
        );
        assert_eq!(
            add_player(&state, "a", "Al", Seat::NORTH).unwrap_err(),
            GameError::AlreadyJoined { id: "a".into() }
        );

        let mut started = state.clone();
        started.phase = MatchPhase::Playing;
        assert_eq!(
            add_player(&started, "b", "Bea", Seat::SOUTH).unwrap_err(),
            GameError::GameAlreadyStarted
        );
    }

    #[test]
    fn test_remove_player() {
        let state = add_player(&room(), "a", "Al", Seat::EAST).unwrap();
        let state = add_player(&state, "b", "Bea", Seat::SOUTH).unwrap();

        let removed = remove_player(&state, "a").unwrap();
        assert_eq!(removed.players.len(), 1);
        assert!(removed.player_by_id("a").is_none());
        assert_eq!(state.players.len(), 2);

        assert_eq!(remove_player(&state, "zz").unwrap_err(), GameError::PlayerNotFound);
    }
}
