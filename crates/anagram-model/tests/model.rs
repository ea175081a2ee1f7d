//! Tests for anagram-model types.

use anagram_model::{AnagramError, CheckReport, ModeId};

#[test]
fn invalid_mode_echoes_input() {
    let error = AnagramError::InvalidMode("klingon".to_string());
    assert_eq!(error.to_string(), "'klingon' is not a valid replacement mode");
}

#[test]
fn invalid_input_message() {
    assert_eq!(
        AnagramError::InvalidInput.to_string(),
        "invalid input: both texts are required"
    );
}

#[test]
fn mode_id_serializes_as_plain_string() {
    let json = serde_json::to_string(&ModeId::new("latin")).expect("serialize mode id");
    assert_eq!(json, "\"LATIN\"");
}

#[test]
fn report_serializes() {
    let report = CheckReport::new("Listen ", "SiLEnT", true, [ModeId::new("MODERN")]);
    let json = serde_json::to_string(&report).expect("serialize report");
    assert_eq!(
        json,
        r#"{"first":"Listen ","second":"SiLEnT","anagrams":true,"active_modes":["MODERN"]}"#
    );
    let round: CheckReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round, report);
}
