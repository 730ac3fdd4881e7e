//! Rulesets: variant-specific tiles, claims, win shapes and scoring.
//!
//! - `Ruleset`: the capability trait the engine calls through
//! - `RulesetRegistry`: lookup by id, passed explicitly by the host
//! - `HongKongRuleset`: the built-in Cantonese variant

pub mod hong_kong;
pub mod registry;
pub mod ruleset;

pub use hong_kong::{standard_tile_set, HongKongRuleset};
pub use registry::RulesetRegistry;
pub use ruleset::{CallPolicy, Ruleset};
