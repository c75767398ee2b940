use super::utils::*;
use super::*;
use crate::{error::PreprocessorError, traits::TextSerialize, DEFAULT_CONFIG_NAME};
use std::fs::write;
use tempfile::TempDir;

/// creates a dummy configuration file for testing
fn setup_config_test() -> Configuration {
    let data = r#"
            vectorizer_path = "/some/vectorizer.json"
            max_features = 50
            stopwords_path = "/some/stopwords.txt"
            stemmer_language = "french"
            verbosity = 3
            json = true
            debug_log = "/yet/anotherpath"
        "#;
    let tmp_dir = TempDir::new().unwrap();
    let file = tmp_dir.path().join(DEFAULT_CONFIG_NAME);
    write(&file, data).unwrap();
    Configuration::parse_config(file).unwrap()
}

#[test]
/// test that all default config values meet expectations
fn default_configuration() {
    let config = Configuration::default();
    assert_eq!(config.kind, serialized_type());
    assert_eq!(config.config, String::new());
    assert_eq!(config.vectorizer_path, String::new());
    assert_eq!(config.max_features, 1420);
    assert_eq!(config.stopwords_path, String::new());
    assert_eq!(config.stemmer_language, "english");
    assert_eq!(config.verbosity, 0);
    assert!(!config.json);
    assert_eq!(config.debug_log, String::new());
    assert!(config.vectorizer_path().is_none());
}

#[test]
/// under test, `new` skips the filesystem and hands back defaults
fn new_returns_defaults_under_test() {
    assert_eq!(Configuration::new().unwrap(), Configuration::default());
}

#[test]
/// parse the test config and see that the values parsed are correct
fn config_reads_every_value() {
    let config = setup_config_test();
    assert_eq!(config.vectorizer_path, "/some/vectorizer.json");
    assert_eq!(config.max_features, 50);
    assert_eq!(config.stopwords_path, "/some/stopwords.txt");
    assert_eq!(config.stemmer_language, "french");
    assert_eq!(config.verbosity, 3);
    assert!(config.json);
    assert_eq!(config.debug_log, "/yet/anotherpath");
    assert_eq!(
        config.vectorizer_path().unwrap().to_str(),
        Some("/some/vectorizer.json")
    );
}

#[test]
/// a partial config file falls back to defaults for whatever it doesn't mention
fn config_partial_file_uses_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let file = tmp_dir.path().join(DEFAULT_CONFIG_NAME);
    write(&file, "verbosity = 1\n").unwrap();

    let config = Configuration::from_file(&file).unwrap();
    assert_eq!(config.verbosity, 1);
    assert_eq!(config.max_features, max_features());
    assert_eq!(config.stemmer_language, stemmer_language());
    assert_eq!(config.config, file.to_string_lossy());
}

#[test]
/// zero features can never produce a vocabulary
fn config_rejects_zero_max_features() {
    let config = Configuration {
        max_features: 0,
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(PreprocessorError::InvalidConfiguration(_))
    ));

    let tmp_dir = TempDir::new().unwrap();
    let file = tmp_dir.path().join(DEFAULT_CONFIG_NAME);
    write(&file, "max_features = 0\n").unwrap();
    assert!(Configuration::from_file(&file).is_err());
}

#[test]
/// garbage toml or a missing file is an error, not a default
fn config_from_file_errors() {
    let tmp_dir = TempDir::new().unwrap();
    let file = tmp_dir.path().join(DEFAULT_CONFIG_NAME);

    assert!(Configuration::from_file(&file).is_err());

    write(&file, "max_features = \"lots\"\n").unwrap();
    assert!(Configuration::from_file(&file).is_err());
}

#[test]
/// merging only overwrites values that differ from the defaults
fn config_merge_keeps_non_default_values() {
    let mut base = Configuration {
        vectorizer_path: String::from("/base/vectorizer.json"),
        verbosity: 2,
        ..Default::default()
    };

    let new = Configuration {
        max_features: 10,
        ..Default::default()
    };

    Configuration::merge_config(&mut base, new);

    assert_eq!(base.vectorizer_path, "/base/vectorizer.json");
    assert_eq!(base.verbosity, 2);
    assert_eq!(base.max_features, 10);

    Configuration::merge_config(&mut base, setup_config_test());
    assert_eq!(base.vectorizer_path, "/some/vectorizer.json");
    assert_eq!(base.max_features, 50);
    assert_eq!(base.stemmer_language, "french");
}

#[test]
/// verbosity levels map onto the expected log filters
fn verbosity_filters() {
    assert_eq!(verbosity_filter(0), None);
    assert_eq!(verbosity_filter(1), Some("warn"));
    assert_eq!(verbosity_filter(2), Some("info"));
    assert_eq!(verbosity_filter(3), Some("lib_ml=debug,info"));
    assert_eq!(verbosity_filter(9), Some("lib_ml=trace,info"));
}

#[test]
/// test as_str method of Configuration
fn as_str_returns_string_with_newline() {
    let config = Configuration::default();
    let config_str = config.as_str();

    assert!(config_str.starts_with("Configuration"));
    assert!(config_str.ends_with('\n'));
    assert!(config_str.contains("max_features: 1420"));
}

#[test]
/// test as_json method of Configuration
fn as_json_returns_json_representation_of_configuration_with_newline() {
    let config = setup_config_test();
    let config_str = config.as_json().unwrap();

    assert!(config_str.ends_with('\n'));

    let json: Configuration = serde_json::from_str(&config_str).unwrap();
    assert_eq!(json, config);
}
