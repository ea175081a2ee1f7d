//! Text transformation for anagram matching.
//!
//! Input flows through three stages before two strings can be compared:
//!
//! 1. Active [`ReplacementMode`]s rewrite individual characters
//!    (applied by [`ModeRegistry::apply`] in registration order).
//! 2. [`normalize`] lower-cases and keeps only `a`-`z`.
//! 3. [`GroupKey`] sorts what is left into an order-independent key.

pub mod modes;
pub mod normalization;
pub mod registry;

pub use modes::{LatinMode, ModernMode, ReplacementMode, apply_rules, describe_rules};
pub use normalization::{GroupKey, normalize};
pub use registry::ModeRegistry;
