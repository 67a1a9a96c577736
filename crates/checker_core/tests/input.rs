use std::sync::Once;

use checker_core::{parse_url_block, parse_url_csv, validate_property, InputError, PropertyError};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(check_logging::initialize_for_tests);
}

#[test]
fn block_keeps_only_http_lines() {
    init_logging();
    let raw = "https://a.com\nnotaurl\nhttp://b.com\n";
    assert_eq!(
        parse_url_block(raw),
        vec!["https://a.com".to_string(), "http://b.com".to_string()]
    );
}

#[test]
fn block_trims_and_ignores_blank_lines() {
    init_logging();
    let raw = "  https://a.example.com \n\n   \nftp://c.example.com\n";
    assert_eq!(parse_url_block(raw), vec!["https://a.example.com".to_string()]);
}

#[test]
fn block_of_garbage_yields_nothing() {
    init_logging();
    assert!(parse_url_block("one\ntwo\nthree").is_empty());
}

#[test]
fn csv_extracts_url_column() {
    init_logging();
    let raw = "Title,URL,Notes\npage a,https://a.com,x\npage b,http://b.com,y\n";
    assert_eq!(
        parse_url_csv(raw).unwrap(),
        vec!["https://a.com".to_string(), "http://b.com".to_string()]
    );
}

#[test]
fn csv_filters_non_url_cells() {
    init_logging();
    let raw = "URL\nhttps://a.com\nnotaurl\n\nhttp://b.com\n";
    assert_eq!(
        parse_url_csv(raw).unwrap(),
        vec!["https://a.com".to_string(), "http://b.com".to_string()]
    );
}

#[test]
fn csv_without_url_column_is_rejected() {
    init_logging();
    let raw = "Link,Notes\nhttps://a.com,x\n";
    assert_eq!(parse_url_csv(raw), Err(InputError::MissingUrlColumn));
}

#[test]
fn empty_csv_is_rejected() {
    init_logging();
    assert_eq!(parse_url_csv(""), Err(InputError::EmptyFile));
}

#[test]
fn csv_handles_quoted_header_cells() {
    init_logging();
    let raw = "\"Page, name\",URL\n\"a, b\",https://a.com\n";
    assert_eq!(parse_url_csv(raw).unwrap(), vec!["https://a.com".to_string()]);
}

#[test]
fn property_accepts_url_and_domain_forms() {
    init_logging();
    assert_eq!(
        validate_property("https://example.com/").unwrap(),
        "https://example.com/"
    );
    assert_eq!(
        validate_property("  sc-domain:example.com ").unwrap(),
        "sc-domain:example.com"
    );
}

#[test]
fn property_rejects_other_prefixes() {
    init_logging();
    assert_eq!(validate_property("example.com"), Err(PropertyError::BadPrefix));
    assert_eq!(validate_property("   "), Err(PropertyError::Empty));
}
