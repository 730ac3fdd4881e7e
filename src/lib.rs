//! # mahjong-rules
//!
//! A rules engine for four-seat Hong Kong mahjong.
//!
//! ## Design Principles
//!
//! 1. **Snapshots In, Snapshots Out**: every engine operation takes a
//!    `&GameState` and returns a new `GameState` or a `GameError`. The input
//!    is never modified, so a host can keep, compare or discard snapshots.
//!
//! 2. **Ruleset as Capability**: tile sets, claim policy, win shapes and
//!    scoring come from a `Ruleset` passed to each operation. The engine
//!    never branches on which variant is in play.
//!
//! 3. **Tile Custody**: every tile identity lives in exactly one container
//!    for the whole hand. Operations re-check this before returning.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`.
//!
//! - **Explicit Call Windows**: after a discard, each eligible seat answers
//!   with a claim or a pass; resolution picks win > gang > peng > chi, ties
//!   going to the seat nearest the discarder in turn order.
//!
//! - **No I/O**: no transport, persistence or timers. Hosts drive the engine
//!   and ship its serde views.
//!
//! ## Modules
//!
//! - `core`: seats, state, action log, errors, RNG, configuration
//! - `tiles`: tile faces, identities, melds
//! - `hand`: face counting, win detection, scoring
//! - `rules`: the `Ruleset` trait, registry, Hong Kong variant
//! - `calls`: claim eligibility and call-window arbitration
//! - `engine`: lobby, dealing, turns, wins, views
//!
//! ## Example
//!
//! ```
//! use mahjong_rules::{
//!     add_player, create_initial_state_with, draw_tile, start_game, RulesetRegistry, Seat,
//!     TableConfig, TurnPhase,
//! };
//!
//! let registry = RulesetRegistry::with_defaults();
//! let ruleset = registry.get("hongkong").unwrap();
//!
//! let mut state = create_initial_state_with("ABCD", "hongkong", TableConfig::default().with_seed(7));
//! for (i, seat) in Seat::ALL.into_iter().enumerate() {
//!     state = add_player(&state, &format!("p{i}"), "Player", seat).unwrap();
//! }
//! let state = start_game(&state, ruleset).unwrap();
//! let state = draw_tile(&state, ruleset).unwrap();
//! assert_eq!(state.turn_phase, TurnPhase::Discarding);
//! ```

pub mod calls;
pub mod core;
pub mod engine;
pub mod hand;
pub mod rules;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{
    ActionKind, ActionRecord, ErrorKind, GameError, GameRng, GameState, LastDiscard, MatchPhase, Player,
    RoundOutcome, Seat, SeatMap, TableConfig, TurnPhase, SEAT_COUNT,
};

pub use crate::tiles::{BonusKind, Dragon, Meld, MeldKind, Suit, Tile, TileId, TileInstance, Wind};

pub use crate::hand::{is_winning_hand, Factor, ScoreBreakdown, WinContext, WinSource};

pub use crate::rules::{CallPolicy, HongKongRuleset, Ruleset, RulesetRegistry};

pub use crate::calls::{
    compute_available_calls, register_call, resolve_call_window, AvailableCall, CallResolution, CallType,
    PendingCall,
};

pub use crate::engine::{
    add_player, can_declare_win, create_initial_state, create_initial_state_with, declare_discard_win,
    declare_self_draw_win, discard_tile, draw_tile, player_view, remove_player, start_game, start_next_round,
    table_view, PlayerView, TableView, WinResult,
};
