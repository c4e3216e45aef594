//! Parsing of the registry response fixtures.

use pretty_assertions::assert_eq;
use regdoc_xml::{parse, parse_file};
use std::path::{Path, PathBuf};

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir).join("test-fixtures").join(name)
}

#[test]
fn test_parse_company_fixture() {
    let doc = parse_file(fixture_path("company.xml")).unwrap();

    assert_eq!(doc.root.name, "Response");
    assert_eq!(doc.root.get_attribute("DocId"), Some("A-1042"));

    let company = doc.root.find_path("/Response/Company").unwrap();
    assert_eq!(company.get_attribute("RegNumber"), Some("1027700132195"));

    let name = company.find_path("Name").unwrap();
    assert_eq!(
        name.get_attribute("FullName"),
        Some(r#"Limited Liability Company "Northwind""#)
    );

    let phones: Vec<&str> = company
        .get_children("Phone")
        .into_iter()
        .filter_map(|p| p.text())
        .collect();
    assert_eq!(
        phones,
        vec!["+7 495 000-00-01", "+7 495 000-00-02", "+7 495 000-00-03"]
    );

    let region = company.find_path("Address/Region").unwrap();
    assert_eq!(region.prefix.as_deref(), Some("fnst"));
    assert_eq!(region.text(), Some("Moscow"));

    assert_eq!(company.get_children("Founder").len(), 2);
}

#[test]
fn test_parse_file_missing() {
    let result = parse_file(fixture_path("does-not-exist.xml"));
    assert!(matches!(result, Err(regdoc_xml::Error::Io(_))));
}

#[test]
fn test_text_content_of_container() {
    let doc = parse("<Address><Region>Moscow</Region><Street>Tverskaya</Street></Address>").unwrap();
    assert_eq!(doc.root.text_content(), "MoscowTverskaya");
}
