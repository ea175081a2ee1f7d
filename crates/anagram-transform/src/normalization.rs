//! Normalization and canonical group keys.
//!
//! Normalization is deliberately narrow: after Unicode lower-casing only the
//! ASCII letters `a`-`z` survive. Digits, punctuation, whitespace and
//! accented letters are dropped, not folded (`é` does not become `e`).

use std::fmt;

/// Lower-case `text` and drop every character outside `a`-`z`.
///
/// # Example
/// ```
/// use anagram_transform::normalize;
///
/// assert_eq!(normalize("Santa; shy, less cruel!"), "santashylesscruel");
/// assert_eq!(normalize("Café 42"), "caf");
/// ```
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Identifier of an anagram equivalence class.
///
/// Two strings share a key if and only if their normalized forms contain the
/// same multiset of characters. The key is the normalized text with its
/// characters sorted, so `listen` and `silent` both map to `eilnst`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey(String);

impl GroupKey {
    /// Key for text that has already gone through [`normalize`].
    pub fn from_normalized(normalized: &str) -> Self {
        let mut chars: Vec<char> = normalized.chars().collect();
        chars.sort_unstable();
        Self(chars.into_iter().collect())
    }

    /// Normalize `text` and compute its key.
    pub fn of(text: &str) -> Self {
        Self::from_normalized(&normalize(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the key of text with no letters at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
