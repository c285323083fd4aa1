use super::*;
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &TempDir, rel: &str, contents: &[u8]) {
    let path = dir.path().join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn loads_matching_files_recursively() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "ZCL_ORDER.abap", b"CLASS zcl_order DEFINITION.");
    write_file(&dir, "nested/deep/zif_order.abap", b"INTERFACE zif_order.");
    write_file(&dir, "readme.txt", b"not source");

    let outcome = load(dir.path(), "abap").unwrap();

    assert_eq!(outcome.documents.len(), 2);
    assert!(outcome.skipped.is_empty());

    let mut identities: Vec<&str> = outcome
        .documents
        .iter()
        .map(|doc| doc.identity.as_str())
        .collect();
    identities.sort();
    assert_eq!(identities, vec!["zcl_order", "zif_order"]);
}

#[test]
fn identity_is_lowercase_stem_without_extension() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "ZCL_Mixed_Case.ABAP", b"REPORT demo.");

    let outcome = load(dir.path(), "abap").unwrap();

    assert_eq!(outcome.documents.len(), 1);
    let doc = &outcome.documents[0];
    assert_eq!(doc.identity, "zcl_mixed_case");
    assert!(doc.origin["source"].ends_with("ZCL_Mixed_Case.ABAP"));
}

#[test]
fn non_utf8_file_is_decoded_not_skipped() {
    let dir = TempDir::new().unwrap();
    // "sociét" in Latin-1: 0xE9 is invalid as UTF-8.
    write_file(&dir, "legacy.abap", b"REPORT soci\xe9t\xe9.");

    let outcome = load(dir.path(), "abap").unwrap();

    assert_eq!(outcome.documents.len(), 1);
    assert!(outcome.skipped.is_empty());
    assert!(outcome.documents[0].content.starts_with("REPORT"));
}

#[test]
fn empty_directory_is_not_an_error() {
    let dir = TempDir::new().unwrap();

    let outcome = load(dir.path(), "abap").unwrap();

    assert!(outcome.documents.is_empty());
    assert!(outcome.skipped.is_empty());
}

#[test]
fn missing_root_is_a_hard_failure() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    let error = load(&missing, "abap").unwrap_err();
    assert!(matches!(error, LoaderError::RootMissing(_)));
}

#[test]
fn file_as_root_is_a_hard_failure() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "only.abap", b"REPORT demo.");

    let error = load(&dir.path().join("only.abap"), "abap").unwrap_err();
    assert!(matches!(error, LoaderError::NotADirectory(_)));
}
