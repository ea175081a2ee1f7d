//! The anagram matcher.
//!
//! # Side effects of comparing
//!
//! [`AnagramMatcher::are_anagrams`] is not a pure predicate. Every call
//! records both inputs in the dictionary, whether or not they match, and
//! [`AnagramMatcher::get_anagrams`] answers only from what has been recorded
//! this way.
//!
//! # Sharing
//!
//! The matcher has no internal synchronization. Callers that share one
//! matcher between sessions must wrap it, e.g. in a `Mutex`, and hold the
//! lock for the whole operation.

use std::collections::BTreeSet;
use std::sync::Arc;

use anagram_model::{AnagramError, ModeId, Result};
use anagram_transform::{GroupKey, ModeRegistry};

use crate::dictionary::{AnagramDictionary, DictionaryStats};

/// Compares strings for anagrams and remembers what it has compared.
///
/// # Example
///
/// ```
/// use anagram_core::AnagramMatcher;
///
/// let mut matcher = AnagramMatcher::new();
/// assert!(matcher.check("Evil", "Vile"));
/// assert!(!matcher.check("Evil", "life"));
/// assert!(matcher.check("Evil", "live"));
///
/// let known: Vec<String> = matcher.get_anagrams(Some("Evil")).into_iter().collect();
/// assert_eq!(known, ["Vile", "live"]);
/// ```
pub struct AnagramMatcher {
    registry: Arc<ModeRegistry>,
    active_modes: BTreeSet<ModeId>,
    dictionary: AnagramDictionary,
}

impl AnagramMatcher {
    /// Matcher over the built-in modes, with no mode active.
    pub fn new() -> Self {
        Self::with_registry(Arc::new(ModeRegistry::builtin()))
    }

    pub fn with_registry(registry: Arc<ModeRegistry>) -> Self {
        Self {
            registry,
            active_modes: BTreeSet::new(),
            dictionary: AnagramDictionary::new(),
        }
    }

    pub fn registry(&self) -> &ModeRegistry {
        &self.registry
    }

    /// Activate a mode. Returns false if it was already active or is not
    /// registered; unregistered ids never enter the active set.
    pub fn activate_mode(&mut self, mode: ModeId) -> bool {
        self.registry.contains(&mode) && self.active_modes.insert(mode)
    }

    /// Deactivate a mode. Returns false if it was not active.
    pub fn deactivate_mode(&mut self, mode: &ModeId) -> bool {
        self.active_modes.remove(mode)
    }

    /// Activate a mode by its (case-insensitive) name.
    ///
    /// # Errors
    ///
    /// [`AnagramError::InvalidMode`] if no mode is registered under `name`.
    pub fn activate_mode_by_name(&mut self, name: &str) -> Result<ModeId> {
        let id = self.registry.resolve(name)?;
        self.activate_mode(id.clone());
        Ok(id)
    }

    /// Deactivate a mode by its (case-insensitive) name.
    ///
    /// # Errors
    ///
    /// [`AnagramError::InvalidMode`] if no mode is registered under `name`.
    pub fn deactivate_mode_by_name(&mut self, name: &str) -> Result<ModeId> {
        let id = self.registry.resolve(name)?;
        self.deactivate_mode(&id);
        Ok(id)
    }

    /// Copy of the active mode set.
    pub fn active_modes(&self) -> BTreeSet<ModeId> {
        self.active_modes.clone()
    }

    /// Compare two texts, recording both in the dictionary.
    ///
    /// # Errors
    ///
    /// [`AnagramError::InvalidInput`] if either text is absent. Nothing is
    /// recorded in that case.
    pub fn are_anagrams(&mut self, first: Option<&str>, second: Option<&str>) -> Result<bool> {
        match (first, second) {
            (Some(first), Some(second)) => Ok(self.check(first, second)),
            _ => Err(AnagramError::InvalidInput),
        }
    }

    /// Compare two present texts, recording both in the dictionary.
    pub fn check(&mut self, first: &str, second: &str) -> bool {
        let first_key = self.group_key(first);
        let second_key = self.group_key(second);
        let matched = first_key == second_key;
        self.dictionary.insert(first_key, first);
        self.dictionary.insert(second_key, second);
        matched
    }

    /// Known anagrams of `word`, excluding `word` itself.
    ///
    /// Only the exact query string is excluded: after comparing `Evil` with
    /// `Vile`, a query for `evil` reports both `Evil` and `Vile`.
    pub fn get_anagrams(&self, word: Option<&str>) -> BTreeSet<String> {
        let Some(word) = word else {
            return BTreeSet::new();
        };
        let key = self.group_key(word);
        self.dictionary
            .group(&key)
            .map(|group| {
                group
                    .iter()
                    .filter(|known| known.as_str() != word)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The group key `text` gets under the currently active modes.
    pub fn group_key(&self, text: &str) -> GroupKey {
        GroupKey::of(&self.registry.apply(&self.active_modes, text))
    }

    pub fn stats(&self) -> DictionaryStats {
        self.dictionary.stats()
    }
}

impl Default for AnagramMatcher {
    fn default() -> Self {
        Self::new()
    }
}
