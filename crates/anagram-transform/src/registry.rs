//! Registry of replacement modes.
//!
//! The registry maps mode names to implementations and fixes the order in
//! which active modes are applied. Modes do not commute in general (a
//! `u → v` rule followed by a `v → w` rule differs from the reverse), so
//! application always follows registration order, never the order in which
//! modes were activated.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use anagram_transform::ModeRegistry;
//!
//! let registry = ModeRegistry::builtin();
//! let latin = registry.resolve("latin").unwrap();
//! let active = BTreeSet::from([latin]);
//! assert_eq!(registry.apply(&active, "wuhuw"), "vvvhvvv");
//! ```

use std::collections::BTreeSet;

use anagram_model::{AnagramError, ModeId, Result};

use crate::modes::{LatinMode, ModernMode, ReplacementMode};

/// Replacement modes in registration order.
pub struct ModeRegistry {
    modes: Vec<Box<dyn ReplacementMode>>,
}

impl ModeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { modes: Vec::new() }
    }

    /// Registry with the built-in modes, LATIN before MODERN.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(LatinMode));
        registry.register(Box::new(ModernMode));
        registry
    }

    /// Registers a mode under its name.
    ///
    /// A mode with the same name replaces the earlier one and keeps its
    /// position in the application order.
    pub fn register(&mut self, mode: Box<dyn ReplacementMode>) {
        let id = mode.id();
        match self.modes.iter().position(|existing| existing.id() == id) {
            Some(index) => self.modes[index] = mode,
            None => self.modes.push(mode),
        }
    }

    /// Case-insensitive lookup by name.
    pub fn get(&self, name: &str) -> Option<&dyn ReplacementMode> {
        let id = ModeId::new(name);
        self.modes
            .iter()
            .find(|mode| mode.id() == id)
            .map(|mode| mode.as_ref())
    }

    /// Resolve user input to the id of a registered mode.
    ///
    /// # Errors
    ///
    /// Returns [`AnagramError::InvalidMode`] carrying the raw input when no
    /// mode is registered under that name.
    pub fn resolve(&self, name: &str) -> Result<ModeId> {
        self.get(name)
            .map(|mode| mode.id())
            .ok_or_else(|| AnagramError::InvalidMode(name.to_string()))
    }

    pub fn contains(&self, id: &ModeId) -> bool {
        self.modes.iter().any(|mode| &mode.id() == id)
    }

    /// Registered modes in application order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn ReplacementMode> + '_ {
        self.modes.iter().map(|mode| mode.as_ref())
    }

    /// Registered ids in application order.
    pub fn ids(&self) -> impl Iterator<Item = ModeId> + '_ {
        self.modes.iter().map(|mode| mode.id())
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Apply every active mode to `input` in registration order.
    ///
    /// Ids in `active` that are not registered are ignored.
    pub fn apply(&self, active: &BTreeSet<ModeId>, input: &str) -> String {
        let mut output = input.to_string();
        for mode in &self.modes {
            if active.contains(&mode.id()) {
                output = mode.transform(&output);
            }
        }
        output
    }
}

impl Default for ModeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
