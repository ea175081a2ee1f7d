//! Anagram matching engine.
//!
//! [`AnagramMatcher`] compares strings under the currently active
//! replacement modes and remembers every string it has compared, so that
//! later lookups can report known anagrams.

pub mod dictionary;
pub mod matcher;

pub use anagram_model::{AnagramError, ModeId, Result};
pub use dictionary::{AnagramDictionary, DictionaryStats};
pub use matcher::AnagramMatcher;
