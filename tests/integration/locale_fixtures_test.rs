//! Locale fixtures test runner
//!
//! Runs the per-locale cases in `tests/fixtures/locale_cases.json` through
//! the public `ToWords` API and reports every mismatch at once.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use towords::{available_locales, ConverterOptions, ToWords};

const FIXTURE_PATH: &str = "tests/fixtures/locale_cases.json";

/// Fixture file structure
#[derive(Debug, Deserialize)]
struct FixtureFile {
    version: String,
    #[allow(dead_code)]
    description: String,
    cases: Vec<TestCase>,
}

/// Individual test case from the fixture file
#[derive(Debug, Deserialize)]
struct TestCase {
    name: String,
    locale: String,
    input: String,
    expected: String,
    #[serde(default)]
    options: ConverterOptions,
    #[serde(default)]
    ordinal: bool,
}

fn load_fixture(path: &Path) -> FixtureFile {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture file {:?}: {}", path, e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture file {:?}: {}", path, e))
}

fn run_case(case: &TestCase) -> Result<(), String> {
    let converter = ToWords::with_locale(case.locale.as_str());
    let result = if case.ordinal {
        converter.to_ordinal(case.input.as_str())
    } else {
        converter.convert_with(case.input.as_str(), &case.options)
    };

    match result {
        Ok(actual) if actual == case.expected => Ok(()),
        Ok(actual) => Err(format!(
            "[{}] {} ({}): expected {:?}, got {:?}",
            case.locale, case.name, case.input, case.expected, actual
        )),
        Err(e) => Err(format!(
            "[{}] {} ({}): unexpected error: {}",
            case.locale, case.name, case.input, e
        )),
    }
}

#[test]
fn test_locale_fixtures() {
    let fixture = load_fixture(Path::new(FIXTURE_PATH));
    assert_eq!(fixture.version, "1.0");

    let failures: Vec<String> = fixture
        .cases
        .iter()
        .filter_map(|case| run_case(case).err())
        .collect();

    println!(
        "Ran {} fixture cases, {} failed",
        fixture.cases.len(),
        failures.len()
    );
    assert!(failures.is_empty(), "Fixture failures:\n{}", failures.join("\n"));
}

#[test]
fn test_every_locale_has_fixtures() {
    let fixture = load_fixture(Path::new(FIXTURE_PATH));
    let covered: BTreeSet<&str> = fixture.cases.iter().map(|c| c.locale.as_str()).collect();

    for code in available_locales() {
        assert!(covered.contains(code), "no fixture cases for {}", code);
    }
}
