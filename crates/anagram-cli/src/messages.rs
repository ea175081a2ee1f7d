//! Texts shown by the interactive shell.

use std::collections::BTreeSet;
use std::fmt::Display;

use anagram_model::ModeId;

pub const WELCOME: &str = "Welcome to the Anagram Finder!";
pub const REPLACEMENTS_HEADER: &str = "Replacement modes:";
pub const CHOOSE_OPTION: &str = "Choose an option:";
pub const ENTER_TEXTS: &str = "Enter two texts, one per line:";
pub const ENTER_TEXT: &str = "Enter a text to look up:";
pub const BACK_TO_MAIN_MENU: &str = "Back to main menu...";
pub const EXITING: &str = "Exiting...";

/// One line of the startup banner, e.g. `  LATIN: i → j, u → v, w → vv`.
pub fn mode_rules(name: &str, rules: &str) -> String {
    format!("  {name}: {rules}")
}

pub fn active_modes(modes: &BTreeSet<ModeId>) -> String {
    if modes.is_empty() {
        return "Active modes: none".to_string();
    }
    format!("Active modes: {}", join(modes))
}

/// The numbered menu; `mode_names` lists the registered modes.
pub fn menu(mode_names: &str) -> String {
    format!(
        "[1] Check if two texts are anagrams\n\
         [2] Get known anagrams of a text\n\
         [3] Add replacement mode ({mode_names})\n\
         [4] Remove replacement mode ({mode_names})\n\
         [5] Exit"
    )
}

pub fn enter_mode_to_add(mode_names: &str) -> String {
    format!("Enter a mode to add ({mode_names}):")
}

pub fn enter_mode_to_remove(mode_names: &str) -> String {
    format!("Enter a mode to remove ({mode_names}):")
}

pub fn are_anagrams(first: &str, second: &str) -> String {
    format!("'{first}' and '{second}' are anagrams!")
}

pub fn not_anagrams(first: &str, second: &str) -> String {
    format!("'{first}' and '{second}' are not anagrams!")
}

pub fn known_anagrams(word: &str, anagrams: &BTreeSet<String>) -> String {
    format!("Known anagrams of '{word}': [{}]", join(anagrams))
}

pub fn no_anagrams(word: &str) -> String {
    format!("No known anagrams of '{word}'")
}

pub fn mode_activated(mode: &ModeId) -> String {
    format!("Mode '{mode}' has been activated.")
}

pub fn mode_deactivated(mode: &ModeId) -> String {
    format!("Mode '{mode}' has been deactivated.")
}

pub fn invalid_option(option: &str) -> String {
    format!("'{option}' is not a valid option. Please enter a number from 1 to 5.")
}

pub fn error(error: &dyn Display) -> String {
    format!("Error: {error}")
}

fn join<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_modes_lists_names() {
        assert_eq!(active_modes(&BTreeSet::new()), "Active modes: none");
        let modes = BTreeSet::from([ModeId::new("MODERN"), ModeId::new("LATIN")]);
        assert_eq!(active_modes(&modes), "Active modes: LATIN, MODERN");
    }

    #[test]
    fn known_anagrams_are_sorted() {
        let anagrams = BTreeSet::from(["live".to_string(), "Vile".to_string()]);
        assert_eq!(
            known_anagrams("Evil", &anagrams),
            "Known anagrams of 'Evil': [Vile, live]"
        );
    }
}
