//! Integration tests for the `triform` binary.
//!
//! Exercises format inference, explicit overrides, error surfaces, and the
//! no-partial-output guarantee through the actual executable, using
//! `assert_cmd` and `predicates` with file fixtures.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures")).join(name)
}

fn triform() -> Command {
    Command::cargo_bin("triform").unwrap()
}

#[test]
fn yml_to_json_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");

    triform()
        .arg(fixture("sample.yml"))
        .arg(&out)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    // 4-space pretty-printed JSON with YAML's key order intact.
    assert!(text.contains("    \"name\": \"city survey\""));
    assert!(text.find("year").unwrap() < text.find("complete").unwrap());
}

#[test]
fn json_to_yaml_and_back_is_lossless() {
    let dir = tempfile::tempdir().unwrap();
    let yaml_out = dir.path().join("mid.yaml");
    let json_out = dir.path().join("back.json");

    triform()
        .arg(fixture("sample.json"))
        .arg(&yaml_out)
        .assert()
        .success();
    triform().arg(&yaml_out).arg(&json_out).assert().success();

    let original: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(fixture("sample.json")).unwrap()).unwrap();
    let back: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(original, back);
}

#[test]
fn json_to_xml_with_custom_root_tag() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.xml");

    triform()
        .arg(fixture("sample.json"))
        .arg(&out)
        .args(["--root-tag", "survey"])
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(text.contains("<survey>"));
    // Two cities unfold into two repeated <cities> elements.
    assert_eq!(text.matches("<cities>").count(), 2);
}

#[test]
fn unsupported_extension_fails_without_reading() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");

    // The input file does not exist; the unknown extension must fail first.
    triform()
        .arg(dir.path().join("data.txt"))
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
    assert!(!out.exists());
}

#[test]
fn explicit_from_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("dump.dat");
    let out = dir.path().join("out.yaml");
    std::fs::write(&input, br#"{"a": 1}"#).unwrap();

    triform()
        .arg(&input)
        .arg(&out)
        .args(["--from", "json"])
        .assert()
        .success();
    assert!(std::fs::read_to_string(&out).unwrap().contains("a: 1"));
}

#[test]
fn format_tokens_are_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("dump.dat");
    let out = dir.path().join("other.dat");
    std::fs::write(&input, b"a: 1").unwrap();

    triform()
        .arg(&input)
        .arg(&out)
        .args(["--from", "YML", "--to", "Json"])
        .assert()
        .success();
    assert!(std::fs::read_to_string(&out).unwrap().contains("\"a\": 1"));
}

#[test]
fn malformed_input_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.json");
    let out = dir.path().join("out.yaml");
    std::fs::write(&input, b"{invalid").unwrap();

    triform()
        .arg(&input)
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse error"));
    assert!(!out.exists());
}

#[test]
fn failed_conversion_writes_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("list.json");
    let out = dir.path().join("out.xml");
    // A top-level array cannot be written as XML.
    std::fs::write(&input, b"[1, 2, 3]").unwrap();

    triform()
        .arg(&input)
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not representable"));
    assert!(!out.exists());
}

#[test]
fn missing_input_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();

    triform()
        .arg(dir.path().join("absent.json"))
        .arg(dir.path().join("out.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
