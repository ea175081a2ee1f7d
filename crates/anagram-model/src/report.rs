//! Serializable result of a one-shot comparison.

use serde::{Deserialize, Serialize};

use crate::mode::ModeId;

/// Outcome of comparing two texts, as emitted by `check --format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub first: String,
    pub second: String,
    pub anagrams: bool,
    /// Modes that were active for the comparison, in canonical order.
    pub active_modes: Vec<ModeId>,
}

impl CheckReport {
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        anagrams: bool,
        active_modes: impl IntoIterator<Item = ModeId>,
    ) -> Self {
        let mut active_modes: Vec<ModeId> = active_modes.into_iter().collect();
        active_modes.sort();
        active_modes.dedup();
        Self {
            first: first.into(),
            second: second.into(),
            anagrams,
            active_modes,
        }
    }
}
