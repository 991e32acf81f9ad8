use std::fs;
use tempfile::TempDir;

use dsearch_core::{matcher, Error, Record, RecordCollection};

fn collection(raw: &str) -> RecordCollection {
    RecordCollection::from_json_str(raw).expect("load")
}

fn names(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.get("name").expect("name field").to_string())
        .collect()
}

#[test]
fn from_path_loads_and_indexes_fields() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("users.json");
    fs::write(&path, r#"[{"b":"1","a":"2"},{"a":"3","c":""}]"#).unwrap();

    let collection = RecordCollection::from_path(&path).expect("load from disk");

    assert_eq!(collection.len(), 2);
    assert!(collection.has_field("a"));
    assert!(collection.has_field("c"));
    assert!(!collection.has_field("z"));
}

#[test]
fn from_path_missing_file_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = RecordCollection::from_path(&tmp.path().join("missing.json")).unwrap_err();
    assert_eq!(err, Error::LoadNotFound);
    assert_eq!(err.to_string(), "Unable to load the specified data due to file not found");
}

#[test]
fn malformed_content_is_distinct_from_not_found() {
    let err = RecordCollection::from_json_str("not json at all").unwrap_err();
    assert_eq!(err, Error::LoadMalformed);
    assert_eq!(err.to_string(), "Unable to load the specified data due to invalid file format");

    // A top-level object is not a well-formed record sequence either.
    let err = RecordCollection::from_json_str(r#"{"a":"1"}"#).unwrap_err();
    assert_eq!(err, Error::LoadMalformed);
}

#[test]
fn field_listing_is_sorted_and_deduplicated() {
    let c = collection(r#"[{"zeta":"1","alpha":"2"},{"alpha":"3","mid":"4"},{"mid":"5"}]"#);
    assert_eq!(c.field_listing(), "alpha\nmid\nzeta\n");
}

#[test]
fn record_preserves_insertion_order_but_index_sorts() {
    let c = collection(r#"[{"b":"2","a":"1"}]"#);
    let fields: Vec<&str> = c.records()[0].field_names().collect();
    assert_eq!(fields, vec!["b", "a"]);
    assert_eq!(c.field_listing(), "a\nb\n");
}

#[test]
fn scalar_values_match_on_their_text_form() {
    let c = collection(r#"[{"name":"n","count":42,"active":true,"note":null}]"#);
    let record = &c.records()[0];
    assert_eq!(record.get("count").unwrap().to_string(), "42");
    assert_eq!(record.get("active").unwrap().to_string(), "true");
    assert_eq!(record.get("note").unwrap().to_string(), "");

    let hits = matcher::search(&c, "count", "42").expect("numeric text match");
    assert_eq!(hits.len(), 1);
}

#[test]
fn nested_values_render_as_json_text() {
    let c = collection(r#"[{"name":"n","tags":["silver","gold"],"meta":{"x":"1"}}]"#);
    let record = &c.records()[0];
    assert_eq!(record.get("tags").unwrap().to_string(), r#"["silver","gold"]"#);
    assert_eq!(record.get("meta").unwrap().to_string(), r#"{"x":"1"}"#);

    // Substring matching reaches into the rendered list text.
    let hits = matcher::search(&c, "tags", "gold").expect("list match");
    assert_eq!(hits.len(), 1);
}

#[test]
fn substring_match_is_unanchored_and_ordered() {
    let c = collection(r#"[{"name":"Jon Doe"},{"name":"Jonathan"},{"name":"Amy"}]"#);
    let hits = matcher::search(&c, "name", "jon").expect("match");
    assert_eq!(names(&hits), vec!["Jon Doe", "Jonathan"]);
}

#[test]
fn matching_is_case_insensitive() {
    let c = collection(r#"[{"name":"acme corp"}]"#);
    let hits = matcher::search(&c, "name", "ACME").expect("match");
    assert_eq!(hits.len(), 1);
}

#[test]
fn empty_query_selects_absent_or_empty_fields() {
    let c = collection(r#"[{"name":"a","tag":""},{"name":"b"},{"name":"c","tag":"x"}]"#);
    let hits = matcher::search(&c, "tag", "").expect("gap match");
    assert_eq!(names(&hits), vec!["a", "b"]);
}

#[test]
fn unknown_field_fails_before_any_scan() {
    let c = collection(r#"[{"name":"a"}]"#);
    let err = matcher::search(&c, "bogus", "a").unwrap_err();
    assert_eq!(err, Error::unknown_field("bogus"));
    assert_eq!(err.to_string(), "Field bogus was not found");

    // Same failure for the empty query.
    let err = matcher::search(&c, "bogus", "").unwrap_err();
    assert_eq!(err, Error::unknown_field("bogus"));
}

#[test]
fn zero_matches_is_an_error_not_an_empty_result() {
    let c = collection(r#"[{"name":"a"},{"name":"b"}]"#);
    let err = matcher::search(&c, "name", "zzz").unwrap_err();
    assert_eq!(
        err.to_string(),
        "No data found for field : \"name\" with provided value \"zzz\""
    );
}

#[test]
fn empty_query_with_no_gaps_reports_the_empty_marker() {
    let c = collection(r#"[{"name":"a"},{"name":"b"}]"#);
    let err = matcher::search(&c, "name", "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "No data found for field : \"name\" with provided value \"[]\""
    );
}
