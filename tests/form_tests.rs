//! Tests for the submit form — field coercion, algorithm inference, and the
//! exact wire shape of the queries it builds.

use rstest::rstest;

use evobench::form::SubmitForm;
use evobench::Algorithm;

// -- Count field coercion -------------------------------------------------

#[rstest]
#[case("3", 3)]
#[case("0", 0)]
#[case(" 42 ", 42)]
#[case("-5", -5)]
#[case("", 0)]
#[case("abc", 0)]
#[case("12.5", 0)]
#[case("999999999999999999999999", 0)]
fn test_count_field_coercion(#[case] raw: &str, #[case] expected: i64) {
    assert_eq!(SubmitForm::new(raw, false, false).count_value(), expected);
}

#[test]
fn test_non_numeric_count_builds_empty_vote_list() {
    let query = SubmitForm::new("lots", true, false).query();
    assert!(query.votes.is_empty());
}

#[test]
fn test_negative_count_builds_empty_vote_list() {
    let query = SubmitForm::new("-3", false, false).query();
    assert!(query.votes.is_empty());
}

// -- Algorithm inference --------------------------------------------------

#[test]
fn test_selector_always_yields_exactly_one_algorithm() {
    for neff in [false, true] {
        let algorithm = SubmitForm::new("1", neff, false).algorithm();
        assert!(algorithm == Algorithm::Neff || algorithm == Algorithm::Sato);
        assert_eq!(algorithm == Algorithm::Neff, neff);
    }
}

#[test]
fn test_algorithm_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Algorithm::Neff).unwrap(), "\"neff\"");
    assert_eq!(serde_json::to_string(&Algorithm::Sato).unwrap(), "\"sato\"");
}

// -- Wire shape -----------------------------------------------------------

#[test]
fn test_neff_query_wire_shape() {
    let query = SubmitForm::new("3", true, false).query();
    assert_eq!(
        serde_json::to_string(&query).unwrap(),
        r#"{"votes":["vote#0","vote#1","vote#2"],"algorithm":"neff","parallelize":false}"#,
    );
}

#[test]
fn test_sato_query_wire_shape() {
    let query = SubmitForm::new("0", false, true).query();
    assert_eq!(
        serde_json::to_string(&query).unwrap(),
        r#"{"votes":[],"algorithm":"sato","parallelize":true}"#,
    );
}

#[test]
fn test_query_is_rebuilt_from_current_fields() {
    let mut form = SubmitForm::new("2", false, false);
    let first = form.query();
    form.count = "4".to_string();
    form.neff = true;
    let second = form.query();
    assert_eq!(first.votes.len(), 2);
    assert_eq!(second.votes.len(), 4);
    assert_eq!(second.algorithm, Algorithm::Neff);
}
