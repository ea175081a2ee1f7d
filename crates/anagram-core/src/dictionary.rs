//! Accumulated strings grouped by anagram class.

use std::collections::{BTreeSet, HashMap};

use anagram_transform::GroupKey;

/// Size of an [`AnagramDictionary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictionaryStats {
    /// Number of distinct group keys.
    pub groups: usize,
    /// Number of recorded strings across all groups.
    pub entries: usize,
}

/// Map from group key to the original strings seen with that key.
///
/// Entries are only ever added. Strings are kept verbatim, so `Evil` and
/// `evil` are two separate entries of the same group.
#[derive(Debug, Default)]
pub struct AnagramDictionary {
    groups: HashMap<GroupKey, BTreeSet<String>>,
}

impl AnagramDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `original` under `key`. Returns false if it was already there.
    pub fn insert(&mut self, key: GroupKey, original: &str) -> bool {
        self.groups
            .entry(key)
            .or_default()
            .insert(original.to_string())
    }

    pub fn group(&self, key: &GroupKey) -> Option<&BTreeSet<String>> {
        self.groups.get(key)
    }

    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            groups: self.groups.len(),
            entries: self.groups.values().map(BTreeSet::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
