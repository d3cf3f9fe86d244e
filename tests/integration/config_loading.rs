//! Loading suite configuration from disk.

use std::io::Write;

use siftmetric::{ConfigError, SiftMetric, SuiteConfig};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_config_round_trips_into_suite() {
    let file = write_config(r#"{"sift": {"maxOffset": 6, "fastResync": true}}"#);
    let suite = SuiteConfig::load(file.path()).unwrap().build().unwrap();
    assert_eq!(*suite.sift(), SiftMetric::new(6).with_fast_resync(true));
}

#[test]
fn test_configured_lookahead_changes_results() {
    // Five inserted characters are only bridged by a window of 6 or more.
    let file = write_config(r#"{"sift": {"maxOffset": 6}}"#);
    let wide = SuiteConfig::load(file.path()).unwrap().build().unwrap();
    let narrow = SuiteConfig::default().build().unwrap();

    let (a, b) = (Some("abcdef"), Some("vwxyzabcdef"));
    assert!(wide.sift_distance(a, b) < narrow.sift_distance(a, b));
    // The exact metric does not care.
    assert_eq!(wide.levenshtein_distance(a, b), narrow.levenshtein_distance(a, b));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let file = write_config(r#"{"sift": {"maxOffset": 3}, "comment": "tuned for ids"}"#);
    let config = SuiteConfig::load(file.path()).unwrap();
    assert_eq!(config.sift.max_offset, 3);
}

#[test]
fn test_invalid_files_are_reported() {
    let file = write_config("[1, 2");
    assert!(matches!(SuiteConfig::load(file.path()), Err(ConfigError::Parse(_))));

    let file = write_config(r#"{"sift": {"maxOffset": "five"}}"#);
    assert!(matches!(SuiteConfig::load(file.path()), Err(ConfigError::Parse(_))));

    let file = write_config(r#"{"sift": {"maxOffset": 0}}"#);
    let err = SuiteConfig::load(file.path()).unwrap().build().unwrap_err();
    assert_eq!(err.to_string(), "maxOffset must be at least 1, got 0");
}
