// Drift oracle behavior across generate / mutate / re-check cycles.

use std::fs;
use std::path::Path;

use suitegen_core::{SuiteConfig, check};

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, "").expect("write fixture file");
}

fn config_for(root: &Path) -> SuiteConfig {
    SuiteConfig::from_json(&format!(
        r#"{{
            "suite": "codeFragments",
            "root": {root:?},
            "pattern": "(.+)\\.kt",
            "kind": "file",
            "recursive": true,
            "bindings": [{{"prefix": "imports/", "hook": "doTestWithImport"}}],
            "default_hook": "doTest"
        }}"#
    ))
    .expect("valid config")
}

#[test]
fn fresh_model_never_drifts_against_itself() {
    let temp = tempfile::tempdir().unwrap();
    touch(temp.path(), "binaryExpression.kt");
    touch(temp.path(), "imports/hashMap.kt");

    let config = config_for(temp.path());
    let model = config.generate().unwrap();

    let report = check(&model, &config.root, &config.compiled_pattern().unwrap()).unwrap();
    assert!(report.is_clean(), "unexpected drift: {report:?}");
}

#[test]
fn added_fixture_is_reported_as_missing_from_model() {
    let temp = tempfile::tempdir().unwrap();
    touch(temp.path(), "binaryExpression.kt");

    let config = config_for(temp.path());
    let model = config.generate().unwrap();

    touch(temp.path(), "imports/hashMap.kt");

    let report = check(&model, &config.root, &config.compiled_pattern().unwrap()).unwrap();
    assert_eq!(report.missing_from_model, vec!["imports/hashMap.kt"]);
    assert!(report.missing_on_disk.is_empty());

    let drift = report.into_result().unwrap_err();
    assert_eq!(
        drift.to_string(),
        "Missing from generated tests: [imports/hashMap.kt]"
    );
}

#[test]
fn deleted_fixture_is_reported_as_missing_on_disk() {
    let temp = tempfile::tempdir().unwrap();
    touch(temp.path(), "binaryExpression.kt");
    touch(temp.path(), "smartCasts.kt");

    let config = config_for(temp.path());
    let model = config.generate().unwrap();

    fs::remove_file(temp.path().join("smartCasts.kt")).unwrap();

    let report = check(&model, &config.root, &config.compiled_pattern().unwrap()).unwrap();
    assert!(report.missing_from_model.is_empty());
    assert_eq!(report.missing_on_disk, vec!["smartCasts.kt"]);
}

#[test]
fn both_directions_are_reported_together() {
    let temp = tempfile::tempdir().unwrap();
    touch(temp.path(), "old.kt");

    let config = config_for(temp.path());
    let model = config.generate().unwrap();

    fs::remove_file(temp.path().join("old.kt")).unwrap();
    touch(temp.path(), "new.kt");

    let drift = check(&model, &config.root, &config.compiled_pattern().unwrap())
        .unwrap()
        .into_result()
        .unwrap_err();
    assert_eq!(
        drift.to_string(),
        "Missing from generated tests: [new.kt]; No longer present on disk: [old.kt]"
    );
}

#[test]
fn model_survives_a_save_load_roundtrip_before_checking() {
    let temp = tempfile::tempdir().unwrap();
    touch(temp.path(), "imports/hashMap.kt");

    let config = config_for(temp.path());
    let model = config.generate().unwrap();
    let path = temp.path().join(".model.json");
    fs::write(&path, model.to_json().unwrap()).unwrap();

    let restored = suitegen_core::SuiteModel::from_file(&path).unwrap();
    let report = check(&restored, &config.root, &config.compiled_pattern().unwrap()).unwrap();
    assert!(report.is_clean());
}
