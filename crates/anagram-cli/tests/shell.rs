//! Integration tests for the interactive shell.

use std::io::Cursor;

use anagram_cli::shell::Shell;
use anagram_core::{AnagramMatcher, ModeId};

fn run_with(matcher: AnagramMatcher, input: impl AsRef<[u8]>) -> (String, AnagramMatcher) {
    let mut shell = Shell::new(matcher, Cursor::new(input.as_ref().to_vec()), Vec::new());
    shell.run().expect("in-memory session");
    let (matcher, output) = shell.into_parts();
    (String::from_utf8(output).expect("utf-8 output"), matcher)
}

fn transcript(input: &str) -> String {
    run_with(AnagramMatcher::new(), input).0
}

fn lines(output: &str) -> Vec<&str> {
    output.lines().collect()
}

#[test]
fn compare_then_lookup_transcript() {
    let output = transcript("1\nEvil\nVile\n2\nevil\n5\n");
    insta::assert_snapshot!(output, @r"
    Welcome to the Anagram Finder!
    Replacement modes:
      LATIN: i → j, u → v, w → vv
      MODERN: v → w, s → z, c → k

    Active modes: none
    [1] Check if two texts are anagrams
    [2] Get known anagrams of a text
    [3] Add replacement mode (LATIN, MODERN)
    [4] Remove replacement mode (LATIN, MODERN)
    [5] Exit
    Choose an option:
    Enter two texts, one per line:
    'Evil' and 'Vile' are anagrams!

    Active modes: none
    [1] Check if two texts are anagrams
    [2] Get known anagrams of a text
    [3] Add replacement mode (LATIN, MODERN)
    [4] Remove replacement mode (LATIN, MODERN)
    [5] Exit
    Choose an option:
    Enter a text to look up:
    Known anagrams of 'evil': [Evil, Vile]

    Active modes: none
    [1] Check if two texts are anagrams
    [2] Get known anagrams of a text
    [3] Add replacement mode (LATIN, MODERN)
    [4] Remove replacement mode (LATIN, MODERN)
    [5] Exit
    Choose an option:
    Exiting...
    ");
}

#[test]
fn unknown_option_is_reported_and_loop_continues() {
    let output = transcript("9\n5\n");
    let lines = lines(&output);
    assert!(
        lines.contains(&"Error: '9' is not a valid option. Please enter a number from 1 to 5.")
    );
    assert!(lines.contains(&"Back to main menu..."));
    assert_eq!(lines.last(), Some(&"Exiting..."));
}

#[test]
fn invalid_mode_echoes_input() {
    let output = transcript("3\nklingon\n4\nGreek\n5\n");
    let lines = lines(&output);
    assert!(lines.contains(&"Error: 'klingon' is not a valid replacement mode"));
    assert!(lines.contains(&"Error: 'Greek' is not a valid replacement mode"));
    assert!(!lines.contains(&"Active modes: LATIN"));
}

#[test]
fn modes_toggle_case_insensitively() {
    let (output, matcher) = run_with(
        AnagramMatcher::new(),
        "3\nlatin\n3\nModern\n4\nMODERN\n5\n",
    );
    let lines = lines(&output);
    assert!(lines.contains(&"Enter a mode to add (LATIN, MODERN):"));
    assert!(lines.contains(&"Mode 'LATIN' has been activated."));
    assert!(lines.contains(&"Mode 'MODERN' has been activated."));
    assert!(lines.contains(&"Active modes: LATIN, MODERN"));
    assert!(lines.contains(&"Mode 'MODERN' has been deactivated."));
    assert_eq!(
        matcher.active_modes().into_iter().collect::<Vec<_>>(),
        vec![ModeId::new("LATIN")]
    );
}

#[test]
fn latin_mode_changes_the_verdict() {
    let output = transcript("1\nwuhuw\nvvvhvvv\n3\nLATIN\n1\nwuhuw\nvvvhvvv\n5\n");
    let lines = lines(&output);
    assert!(lines.contains(&"'wuhuw' and 'vvvhvvv' are not anagrams!"));
    assert!(lines.contains(&"'wuhuw' and 'vvvhvvv' are anagrams!"));
}

#[test]
fn texts_keep_their_spacing() {
    let (output, matcher) = run_with(
        AnagramMatcher::new(),
        "1\nListen \r\nSiLEnT\r\n2\nsilent\n5\n",
    );
    let lines = lines(&output);
    assert!(lines.contains(&"'Listen ' and 'SiLEnT' are anagrams!"));
    assert!(lines.contains(&"Known anagrams of 'silent': [Listen , SiLEnT]"));
    assert_eq!(matcher.stats().entries, 2);
}

#[test]
fn lookup_without_matches() {
    let output = transcript("1\nEvil\nlife\n2\nlife\n5\n");
    assert!(lines(&output).contains(&"No known anagrams of 'life'"));
}

#[test]
fn end_of_input_ends_the_session() {
    let (output, matcher) = run_with(AnagramMatcher::new(), "1\nonly one text");
    assert!(!output.contains("Exiting..."));
    assert!(output.ends_with("Enter two texts, one per line:\n"));
    assert_eq!(matcher.stats().entries, 0);

    let output = transcript("");
    assert!(output.ends_with("Choose an option:\n"));
}

#[test]
fn preactivated_modes_show_in_menu() {
    let mut matcher = AnagramMatcher::new();
    matcher.activate_mode_by_name("modern").expect("registered mode");
    let output = run_with(matcher, "1\nwssw\nvzzv\n5\n").0;
    let lines = lines(&output);
    assert!(lines.contains(&"Active modes: MODERN"));
    assert!(lines.contains(&"'wssw' and 'vzzv' are anagrams!"));
}

#[test]
fn invalid_utf8_line_does_not_end_session() {
    let (output, matcher) = run_with(
        AnagramMatcher::new(),
        b"1\n\xff\xfe\nabc\n2\nabc\n5\n",
    );
    let lines = lines(&output);
    assert!(lines.contains(&"'\u{fffd}\u{fffd}' and 'abc' are not anagrams!"));
    assert!(lines.contains(&"No known anagrams of 'abc'"));
    assert_eq!(lines.last(), Some(&"Exiting..."));
    assert_eq!(matcher.stats().entries, 2);
}
