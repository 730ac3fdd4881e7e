//! State transitions for a match.
//!
//! Every operation takes a `&GameState` snapshot and returns a new one (or a
//! `GameError` with the input untouched):
//!
//! - `lobby`: room creation and seating
//! - `deal`: starting a match and each following hand
//! - `turn`: drawing (with bonus replacement) and discarding
//! - `win`: self-drawn and discard wins, settlement
//! - `view`: per-seat and spectator projections

pub mod deal;
pub mod lobby;
pub mod turn;
pub mod view;
pub mod win;

pub use deal::{start_game, start_next_round};
pub use lobby::{
    add_player, create_initial_state, create_initial_state_with, generate_room_code, remove_player,
    ROOM_CODE_ALPHABET,
};
pub use turn::{discard_tile, draw_tile};
pub use view::{player_view, table_view, PlayerView, RedactedPlayer, TableView};
pub use win::{can_declare_win, declare_discard_win, declare_self_draw_win, WinResult};
