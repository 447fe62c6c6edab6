use jsontrans::document::directory::{ensure_output_dir, find_json_files};
use jsontrans::document::{load_document, save_document, DEFAULT_INDENT};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_then_save_keeps_layout() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("in.json");
    let original = "{\n    \"Name\": {\n        \"Localized\": \"Röd Jacka\",\n        \"Id\": 17\n    },\n    \"Tags\": [\n        \"a\",\n        \"b\"\n    ]\n}";
    fs::write(&input, original).unwrap();

    let document = load_document(&input).unwrap();
    let output = tmp.path().join("out.json");
    save_document(&document, &output, DEFAULT_INDENT).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), original);
}

#[test]
fn test_numbers_outside_machine_range_survive_round_trip() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("big.json");
    let original = "{\n    \"Id\": 123456789012345678901234567890,\n    \"Weight\": 1e400,\n    \"Name\": {\n        \"Localized\": \"Hat\"\n    }\n}";
    fs::write(&input, original).unwrap();

    let document = load_document(&input).unwrap();
    let output = tmp.path().join("out.json");
    save_document(&document, &output, DEFAULT_INDENT).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), original);
}

#[test]
fn test_load_reports_malformed_json() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("bad.json");
    fs::write(&input, "{ name: invalid }").unwrap();

    let err = load_document(&input).unwrap_err();
    assert!(err.message.starts_with("Invalid JSON"));
    assert!(err.location.is_some());
}

#[test]
fn test_directory_helpers() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("output");
    assert!(ensure_output_dir(&out).unwrap());

    fs::write(tmp.path().join("x.json"), "{}").unwrap();
    fs::write(tmp.path().join("x.json.bak"), "{}").unwrap();
    let files = find_json_files(tmp.path(), false).unwrap();
    assert_eq!(files, vec![tmp.path().join("x.json")]);
}
