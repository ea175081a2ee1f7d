//! Library components of the anagram finder CLI.

pub mod logging;
pub mod messages;
pub mod shell;
pub mod summary;
