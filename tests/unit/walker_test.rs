use jsontrans::error::{TranslateError, TranslateResult};
use jsontrans::{
    translate_document, translate_json, ErrorLog, GlossaryTranslator, LanguagePair,
    TranslationConfig, Translator,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::tempdir;

fn glossary() -> GlossaryTranslator {
    GlossaryTranslator::from_pairs(
        LanguagePair::default(),
        [("Red Jacket", "Röd Jacka"), ("Hat", "Hatt")],
    )
}

fn log_lines(log: &ErrorLog) -> Vec<String> {
    std::fs::read_to_string(log.path())
        .map(|content| content.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

#[test]
fn test_translates_localized_field() {
    let dir = tempdir().unwrap();
    let log = ErrorLog::in_dir(dir.path(), "translation_errors.log");

    let mut doc = json!({"Name": {"Localized": "Red Jacket"}});
    translate_json(&mut doc, &glossary(), &log, "jackets.json").unwrap();

    assert_eq!(doc, json!({"Name": {"Localized": "Röd Jacka"}}));
    assert!(log_lines(&log).is_empty());
}

#[test]
fn test_null_value_is_left_alone() {
    let dir = tempdir().unwrap();
    let log = ErrorLog::in_dir(dir.path(), "translation_errors.log");

    let mut doc = json!({"Name": {"Localized": "NULL"}});
    let stats = translate_json(&mut doc, &glossary(), &log, "jackets.json").unwrap();

    assert_eq!(doc, json!({"Name": {"Localized": "NULL"}}));
    assert_eq!(stats.skipped, 1);
    assert!(!log.path().exists());
}

#[test]
fn test_not_found_falls_back_and_logs() {
    let dir = tempdir().unwrap();
    let log = ErrorLog::in_dir(dir.path(), "translation_errors.log");

    let mut doc = json!({"Name": {"Localized": "Xyzzyplugh"}});
    translate_json(&mut doc, &glossary(), &log, "jackets.json").unwrap();

    assert_eq!(doc, json!({"Name": {"Localized": "Xyzzyplugh"}}));
    let lines = log_lines(&log);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Failed to translate 'Xyzzyplugh' in jackets.json: "));
}

#[test]
fn test_deeply_nested_field_is_translated() {
    let dir = tempdir().unwrap();
    let log = ErrorLog::in_dir(dir.path(), "translation_errors.log");

    let mut doc = json!({"A": {"B": {"Localized": "Hat"}}});
    translate_json(&mut doc, &glossary(), &log, "hats.json").unwrap();

    assert_eq!(doc, json!({"A": {"B": {"Localized": "Hatt"}}}));
}

#[test]
fn test_other_keys_are_never_touched() {
    let dir = tempdir().unwrap();
    let log = ErrorLog::in_dir(dir.path(), "translation_errors.log");

    let mut doc = json!({
        "Hat": "Hat",
        "Name": {
            "Localized": "Hat",
            "Description": "Red Jacket",
            "Deeper": {"Title": "Hat", "Count": 3}
        }
    });
    translate_json(&mut doc, &glossary(), &log, "mixed.json").unwrap();

    assert_eq!(
        doc,
        json!({
            "Hat": "Hat",
            "Name": {
                "Localized": "Hatt",
                "Description": "Red Jacket",
                "Deeper": {"Title": "Hat", "Count": 3}
            }
        })
    );
}

#[test]
fn test_every_field_visited_once() {
    struct Counting {
        calls: std::cell::Cell<usize>,
        languages: LanguagePair,
    }

    impl Translator for Counting {
        fn translate(&self, text: &str) -> TranslateResult<String> {
            self.calls.set(self.calls.get() + 1);
            Ok(format!("{}!", text))
        }

        fn languages(&self) -> &LanguagePair {
            &self.languages
        }
    }

    let dir = tempdir().unwrap();
    let log = ErrorLog::in_dir(dir.path(), "translation_errors.log");
    let translator = Counting {
        calls: std::cell::Cell::new(0),
        languages: LanguagePair::default(),
    };

    let mut doc = json!({
        "a": {"Localized": "one"},
        "b": {"c": {"Localized": "two"}, "d": {"Localized": "NULL"}},
        "e": {"Localized": "three"}
    });
    let stats = translate_document(
        &mut doc,
        &translator,
        &TranslationConfig::default(),
        &log,
        "doc.json",
    )
    .unwrap();

    assert_eq!(translator.calls.get(), 3);
    assert_eq!(stats.translated, 3);
    assert_eq!(doc["b"]["c"]["Localized"], Value::from("two!"));
}

#[test]
fn test_rerun_is_idempotent_only_for_idempotent_translator() {
    let dir = tempdir().unwrap();
    let log = ErrorLog::in_dir(dir.path(), "translation_errors.log");

    // The glossary has no entry for its own output, so the second pass
    // leaves the text alone and logs it.
    let translator = glossary();
    let mut doc = json!({"Name": {"Localized": "Hat"}});
    translate_json(&mut doc, &translator, &log, "a.json").unwrap();
    let once = doc.clone();
    translate_json(&mut doc, &translator, &log, "a.json").unwrap();

    assert_eq!(doc, once);
    assert_eq!(log_lines(&log).len(), 1);
}

#[test]
fn test_service_failure_is_returned() {
    struct Offline(LanguagePair);

    impl Translator for Offline {
        fn translate(&self, _text: &str) -> TranslateResult<String> {
            Err(TranslateError::invalid_response("connection reset".to_string()))
        }

        fn languages(&self) -> &LanguagePair {
            &self.0
        }
    }

    let dir = tempdir().unwrap();
    let log = ErrorLog::in_dir(dir.path(), "translation_errors.log");

    let mut doc = json!({"Name": {"Localized": "Hat"}});
    let err = translate_json(&mut doc, &Offline(LanguagePair::default()), &log, "a.json")
        .unwrap_err();

    assert!(err.to_string().contains("connection reset"));
    assert!(!log.path().exists());
}
