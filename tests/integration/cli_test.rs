//! Command-line front end tests
//!
//! Drives `Args` parsing and `run` directly so output files can be checked
//! without spawning the binary.

use clap::Parser;
use std::fs;
use tempfile::tempdir;
use towords::cli::{convert_one, run, Args, CliConfig};
use towords::{ToWords, ToWordsError};

fn config(args: &[&str]) -> CliConfig {
    let args = Args::try_parse_from(std::iter::once("towords").chain(args.iter().copied()))
        .expect("arguments should parse");
    CliConfig::from_args(args).expect("configuration should build")
}

#[test]
fn test_output_file_with_nested_dirs() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("nested/dir/words.txt");
    let output_arg = output.to_string_lossy().to_string();

    let config = config(&["452.36", "--currency", "-l", "en-US", "-o", &output_arg, "--quiet"]);
    run(&config).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(
        contents.trim_end(),
        "Four Hundred Fifty Two Dollars And Thirty Six Cents Only"
    );
}

#[test]
fn test_ordinal_flag() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("ordinal.txt");
    let output_arg = output.to_string_lossy().to_string();

    let config = config(&["21", "--ordinal", "--locale", "en-US", "--output", &output_arg]);
    run(&config).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "Twenty First\n");
}

#[test]
fn test_list_locales_to_file() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("locales.txt");
    let output_arg = output.to_string_lossy().to_string();

    let config = config(&["--list-locales", "-o", &output_arg, "--quiet"]);
    run(&config).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    let codes: Vec<&str> = contents.lines().collect();
    assert!(codes.contains(&"en-IN"));
    assert!(codes.contains(&"ru-RU"));
}

#[test]
fn test_options_json_and_flags() {
    let config = config(&[
        "0.5",
        "--locale",
        "en-US",
        "--options",
        r#"{"currency": true, "ignoreZeroCurrency": true}"#,
        "--do-not-add-only",
    ]);
    let converter = ToWords::new(config.to_words_options.clone());
    assert_eq!(convert_one(&converter, "0.5", false).unwrap(), "Fifty Cents");
}

#[test]
fn test_unknown_locale_fails_before_input() {
    let config = config(&["--locale", "en-US-wrong"]);
    let err = run(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ToWordsError>(),
        Some(ToWordsError::UnknownLocale { .. })
    ));
}

#[test]
fn test_missing_input() {
    let config = config(&["--locale", "en-US"]);
    let err = run(&config).unwrap_err();
    assert!(err.to_string().contains("No input provided"));
}

#[test]
fn test_invalid_number_is_reported() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("never.txt");
    let output_arg = output.to_string_lossy().to_string();

    let config = config(&["12abc", "-o", &output_arg]);
    let err = run(&config).unwrap_err();
    assert_eq!(err.to_string(), "Invalid Number \"12abc\"");
    assert!(!output.exists());
}
