//! Integration tests for Settings loading.
//!
//! These tests only use explicit files and inline TOML. The env var layer is
//! covered in `config_env_test.rs`, its own binary, so overrides set there
//! cannot leak into the parallel tests here.

use std::fs;

use tempfile::TempDir;

use patternbook::config::Settings;
use patternbook::creational::OperatingSystem;
use patternbook::PatternError;

// ============================================================
// Settings::load()
// ============================================================

#[test]
fn given_config_file_when_load_then_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patternbook.toml");
    fs::write(
        &path,
        r#"
[observer]
seed = 7
rounds = 4

[gui]
system = "windows"
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.observer.seed, Some(7));
    assert_eq!(settings.observer.rounds, 4);
    assert_eq!(settings.gui.system, OperatingSystem::Windows);
}

#[test]
fn given_partial_config_file_when_load_then_untouched_sections_keep_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.toml");
    fs::write(&path, "[adapter]\ncelsius = 200.0\n").unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.adapter.celsius, 200.0);
    assert_eq!(settings.adapter.fahrenheit, 32.0);
    assert_eq!(settings.iterator.words, ["First", "Second", "Third"]);
    assert_eq!(settings.iterator.slices, 5);
}

#[test]
fn given_toml_file_without_toml_extension_when_load_then_parsed_as_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patternbook.conf");
    fs::write(&path, "[iterator]\nslices = 3\n").unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.iterator.slices, 3);
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    let result = Settings::load(Some(&path));

    assert!(
        matches!(result, Err(PatternError::Config { ref message }) if message.contains("not found")),
        "unexpected result: {result:?}"
    );
}

// ============================================================
// Settings::from_toml()
// ============================================================

#[test]
fn given_empty_document_when_from_toml_then_defaults() {
    assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
}

#[test]
fn given_custom_words_when_from_toml_then_iterator_uses_them() {
    let settings = Settings::from_toml(
        r#"
[iterator]
words = ["alpha", "beta"]
slices = 8
"#,
    )
    .unwrap();

    assert_eq!(settings.iterator.words, ["alpha", "beta"]);
    assert_eq!(settings.iterator.slices, 8);
}

#[test]
fn given_empty_word_list_when_from_toml_then_rejected() {
    let result = Settings::from_toml("[iterator]\nwords = []\n");

    assert!(matches!(result, Err(PatternError::Config { .. })));
}

#[test]
fn given_unknown_system_when_from_toml_then_rejected() {
    let result = Settings::from_toml("[gui]\nsystem = \"beos\"\n");

    assert!(matches!(result, Err(PatternError::Config { .. })));
}

#[test]
fn given_settings_when_to_toml_then_sections_are_rendered() {
    let text = Settings::default().to_toml().unwrap();

    assert!(text.contains("[observer]"));
    assert!(text.contains("[iterator]"));
    assert!(text.contains("system = \"linux\""));
}
