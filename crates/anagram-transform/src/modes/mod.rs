//! Replacement modes.
//!
//! A replacement mode rewrites a string one character at a time according to
//! a fixed rule table. Modes never look at neighbouring characters, keep the
//! relative order of the input, and may expand one character into several.
//!
//! | Mode | Replacements |
//! |------|--------------|
//! | LATIN | i → j, u → v, w → vv |
//! | MODERN | v → w, s → z, c → k |

mod latin;
mod modern;

pub use latin::LatinMode;
pub use modern::ModernMode;

use anagram_model::ModeId;

/// A named, stateless character-rewrite rule.
///
/// # Implementing a Mode
///
/// ```
/// use anagram_transform::{ReplacementMode, apply_rules};
///
/// struct GreekMode;
///
/// impl ReplacementMode for GreekMode {
///     fn name(&self) -> &'static str {
///         "GREEK"
///     }
///
///     fn replacements(&self) -> &'static [(char, &'static str)] {
///         &[('f', "ph")]
///     }
///
///     fn transform(&self, input: &str) -> String {
///         apply_rules(input, self.replacements())
///     }
/// }
///
/// assert_eq!(GreekMode.transform("fish"), "phish");
/// ```
pub trait ReplacementMode: Send + Sync {
    /// Upper-case name the mode is registered and looked up by.
    fn name(&self) -> &'static str;

    /// The rule table, as `(character, replacement)` pairs.
    fn replacements(&self) -> &'static [(char, &'static str)];

    /// Rewrite `input`. Must be total and pure; matching is case-sensitive.
    fn transform(&self, input: &str) -> String;

    fn id(&self) -> ModeId {
        ModeId::new(self.name())
    }
}

/// Apply a per-character rule table to `input`.
///
/// Characters without a rule pass through unchanged.
pub fn apply_rules(input: &str, rules: &[(char, &str)]) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match rules.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => output.push_str(to),
            None => output.push(c),
        }
    }
    output
}

/// Render a rule table for display, e.g. `i → j, u → v, w → vv`.
pub fn describe_rules(rules: &[(char, &str)]) -> String {
    rules
        .iter()
        .map(|(from, to)| format!("{from} → {to}"))
        .collect::<Vec<_>>()
        .join(", ")
}
