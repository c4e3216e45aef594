/*
 * cli.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * End-to-end tests for the regdoc binary.
 */

use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture_path(name: &str) -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir).join("test-fixtures").join(name)
}

fn regdoc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_regdoc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run regdoc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_render_text() {
    let schema = fixture_path("company.csv");
    let data = fixture_path("company.xml");
    let output = regdoc(&["render", "--schema", schema.to_str().unwrap(), data.to_str().unwrap()]);

    assert!(output.status.success());
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "   № | Field | Value");
    assert!(lines.contains(&"   1 | Registration number | 1027700132195"));
    assert!(lines.contains(&"   2 | Date of issue | 01.10.2017"));
    assert!(lines.contains(&"  12 | Date of birth | 17.05.1980"));
    assert!(lines.contains(&"  Natural person"));
    assert!(!text.contains("Director"));
}

#[test]
fn test_render_json_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.json");
    let schema = fixture_path("company.csv");
    let data = fixture_path("company.xml");

    let output = regdoc(&[
        "render",
        "--schema",
        schema.to_str().unwrap(),
        "--format",
        "json",
        "--output",
        out.to_str().unwrap(),
        data.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json[0]["rows"], 14);
    assert_eq!(
        json[0]["emissions"][0],
        serde_json::json!({"kind": "section-header", "text": "Company details", "style": "title"})
    );
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let schema = dir.path().join("layout.csv");
    let config = dir.path().join("regdoc.yml");
    let data = dir.path().join("person.xml");
    std::fs::write(
        &schema,
        "index;path;name;required;container;description\n1;Person;Person;+;*;\n1.1;name;Name;+;-;\n1.2;age;Age;+;-;\n",
    )
    .unwrap();
    std::fs::write(
        &config,
        "schema:\n  delimiter: \";\"\n  has-header: true\n  required-marker: \"+\"\n  container-marker: \"*\"\nrender:\n  placeholder: missing\noutput:\n  format: json\n",
    )
    .unwrap();
    std::fs::write(&data, r#"<Response><Person name="Ann"/></Response>"#).unwrap();

    let output = regdoc(&[
        "render",
        "-s",
        schema.to_str().unwrap(),
        "-c",
        config.to_str().unwrap(),
        data.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        json[0]["emissions"],
        serde_json::json!([
            {"kind": "section-header", "text": "Person", "style": "title"},
            {"kind": "row", "sequence": 1, "name": "Name", "value": "Ann"}
        ])
    );
}

#[test]
fn test_failed_document_does_not_stop_others() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.xml");
    std::fs::write(&broken, "<Response><Company>").unwrap();
    let schema = fixture_path("company.csv");
    let data = fixture_path("company.xml");

    let output = regdoc(&[
        "render",
        "--schema",
        schema.to_str().unwrap(),
        "--format",
        "json",
        broken.to_str().unwrap(),
        data.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(1));
    assert!(json[0]["source"].as_str().unwrap().ends_with("company.xml"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 of 2 documents failed to render"));
}

#[test]
fn test_malformed_schema_fails() {
    let dir = tempfile::tempdir().unwrap();
    let schema = dir.path().join("gap.csv");
    std::fs::write(&schema, "1,A,A,О,С,\n1.1.1,b,B,О,П,\n").unwrap();

    let output = regdoc(&["schema", "--schema", schema.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load schema"));
}

#[test]
fn test_schema_outline() {
    let schema = fixture_path("company.csv");
    let output = regdoc(&["schema", "--schema", schema.to_str().unwrap()]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["path"], "/Response");
    assert_eq!(json["children"][0]["path"], "/Response/Company");
    assert_eq!(
        json["children"][0]["children"][3]["params"][0]["path"],
        "/Response/Company/Director/LastName"
    );
}

#[test]
fn test_inspect() {
    let data = fixture_path("company.xml");
    let output = regdoc(&["inspect", data.to_str().unwrap()]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("ns1:Response [DocId: A-1042]\n"));
    assert!(text.contains("\n      fnst:Region = Moscow\n"));
}
