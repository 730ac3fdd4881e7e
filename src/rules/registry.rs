//! Ruleset lookup by id.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::hong_kong::HongKongRuleset;
use super::ruleset::Ruleset;
use crate::core::GameError;

/// Registry of available rulesets.
///
/// An explicit value owned by the host; there is no process-wide registry.
///
/// ## Example
///
/// ```
/// use mahjong_rules::rules::RulesetRegistry;
///
/// let registry = RulesetRegistry::with_defaults();
/// let ruleset = registry.get("hongkong").unwrap();
/// assert_eq!(ruleset.generate_tile_set().len(), 144);
/// assert!(registry.get("riichi").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RulesetRegistry {
    rulesets: FxHashMap<String, Arc<dyn Ruleset>>,
}

impl RulesetRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in rulesets.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HongKongRuleset::new()));
        registry
    }

    /// Register a ruleset under its id, replacing any earlier entry.
    pub fn register(&mut self, ruleset: Arc<dyn Ruleset>) {
        self.rulesets.insert(ruleset.id().to_string(), ruleset);
    }

    /// Look up a ruleset.
    pub fn get(&self, id: &str) -> Result<&dyn Ruleset, GameError> {
        self.rulesets
            .get(id)
            .map(|r| &**r)
            .ok_or_else(|| GameError::UnknownRuleset { id: id.to_string() })
    }

    /// Shared handle to a ruleset.
    pub fn get_shared(&self, id: &str) -> Result<Arc<dyn Ruleset>, GameError> {
        self.rulesets
            .get(id)
            .cloned()
            .ok_or_else(|| GameError::UnknownRuleset { id: id.to_string() })
    }

    /// (id, name) of every registered ruleset, sorted by id.
    #[must_use]
    pub fn available(&self) -> Vec<(String, String)> {
        let mut listing: Vec<_> = self
            .rulesets
            .values()
            .map(|r| (r.id().to_string(), r.name().to_string()))
            .collect();
        listing.sort();
        listing
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rulesets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rulesets.is_empty()
    }
}
