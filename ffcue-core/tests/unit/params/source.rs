use super::*;

use std::fs;

fn write_doc(dir: &tempfile::TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn absent_file_is_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_system_map(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CueError::MissingSource(_)));
}

#[test]
fn malformed_json_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(&dir, "bad.json", "{ not json");
    let err = load_system_map(&path).unwrap_err();
    match err {
        CueError::Parse { path: p, .. } => assert!(p.ends_with("bad.json")),
        other => panic!("expected parse error, got {other}"),
    }
}

#[test]
fn system_doc_requires_plugin_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(&dir, "sys.json", r#"{"other": {}}"#);
    let err = load_system_map(&path).unwrap_err();
    assert_eq!(err.to_string(), "plugin_config key not found in system parameters file");
}

#[test]
fn system_doc_loads_the_nested_map() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(&dir, "sys.json", r#"{"plugin_config": {"width": "1920"}}"#);
    let map = load_system_map(&path).unwrap();
    assert_eq!(map.get("width").map(scalar_string).unwrap(), "1920");
}

#[test]
fn user_doc_requires_both_namespace_levels() {
    let dir = tempfile::tempdir().unwrap();

    let path = write_doc(&dir, "u1.json", r#"{"x265": {}}"#);
    let err = load_user_map(&path).unwrap_err();
    assert_eq!(err.to_string(), "user_config key not found in user parameters file");

    let path = write_doc(&dir, "u2.json", r#"{"user_config": {}}"#);
    let err = load_user_map(&path).unwrap_err();
    assert_eq!(err.to_string(), "x265 key not found in user parameters file");
}

#[test]
fn user_doc_keeps_document_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(
        &dir,
        "user.json",
        r#"{"user_config": {"x265": {"zeta": "1", "alpha": "2", "mid": "3"}}}"#,
    );
    let map = load_user_map(&path).unwrap();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn scalars_keep_their_json_spelling() {
    assert_eq!(scalar_string(&serde_json::json!("fast")), "fast");
    assert_eq!(scalar_string(&serde_json::json!(1920)), "1920");
    assert_eq!(scalar_string(&serde_json::json!(2.5)), "2.5");
    assert_eq!(scalar_string(&serde_json::json!(true)), "true");
}
