//! Identifiers for replacement modes.
//!
//! A [`ModeId`] is the canonical, upper-case name a mode is registered under
//! (e.g. `LATIN`). Whether an id names a registered mode is decided by the
//! mode registry, not here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical identifier of a replacement mode.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModeId(String);

impl ModeId {
    /// Create an id from any spelling of a mode name.
    ///
    /// Surrounding whitespace is dropped and the name is upper-cased, so
    /// `" latin"` and `"LATIN"` produce the same id.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_uppercase())
    }

    /// Returns the canonical name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for ModeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
