//! Cross-locale invariants
//!
//! Properties that must hold for every registered locale, independent of
//! the locale's word tables.

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use towords::{available_locales, ConverterOptions, NumberInput, ToWords, ToWordsError};

const SAMPLES: &[i64] = &[
    1, 7, 13, 20, 45, 99, 100, 101, 137, 999, 1000, 1001, 2024, 10_000, 12_345, 100_000,
    1_000_000, 2_500_000, 123_456_789, 1_000_000_000,
];

fn converters() -> Vec<ToWords> {
    available_locales()
        .into_iter()
        .map(ToWords::with_locale)
        .collect()
}

fn separator(converter: &ToWords) -> &'static str {
    converter.locale().unwrap().config.separator()
}

#[test]
fn test_sign_invariant() {
    for converter in converters() {
        let minus = converter.locale().unwrap().config.texts.minus.clone();
        let sep = separator(&converter);

        for &n in SAMPLES {
            let positive = converter.convert(n).unwrap();
            let negative = converter.convert(-n).unwrap();
            assert_eq!(
                negative,
                format!("{}{}{}", minus, sep, positive),
                "locale {}",
                converter.options().locale_code
            );
        }
    }
}

#[test]
fn test_zero_invariant() {
    for converter in converters() {
        let zero = converter.convert(0).unwrap();
        assert!(!zero.is_empty());

        let representations = [
            NumberInput::from(-0.0),
            NumberInput::from(0.0),
            NumberInput::from(0i128),
            NumberInput::from("0"),
            NumberInput::from("-0"),
            NumberInput::from(dec!(0.00)),
        ];
        for input in representations {
            assert_eq!(converter.convert(input).unwrap(), zero);
        }
    }
}

#[test]
fn test_currency_only_toggle() {
    let amounts = [
        NumberInput::from(1),
        NumberInput::from(2),
        NumberInput::from(1.5),
        NumberInput::from("452.36"),
    ];

    for converter in converters() {
        let config = &converter.locale().unwrap().config;
        let only = config.texts.only.clone();
        let sep = config.separator();
        let in_front = config.only_in_front;

        for amount in &amounts {
            let with_only = converter
                .convert_with(amount.clone(), &ConverterOptions::currency())
                .unwrap();
            let without = converter
                .convert_with(
                    amount.clone(),
                    &ConverterOptions::currency().with_do_not_add_only(true),
                )
                .unwrap();

            let expected = match (only.is_empty(), in_front) {
                (true, _) => without.clone(),
                (false, false) => format!("{}{}{}", without, sep, only),
                (false, true) => format!("{}{}{}", only, sep, without),
            };
            assert_eq!(with_only, expected);
        }
    }
}

#[test]
fn test_ignore_zero_currency_on_zero() {
    let options = ConverterOptions::currency().with_ignore_zero_currency(true);
    for converter in converters() {
        assert_eq!(converter.convert_with(0, &options).unwrap(), "");
    }
}

#[test]
fn test_decimal_digit_preservation() {
    for converter in converters() {
        let hundredths = converter.convert(0.04).unwrap();
        let tenths = converter.convert(0.4).unwrap();
        assert_ne!(hundredths, tenths);
    }
}

#[test]
fn test_ordinal_validation_every_locale() {
    let invalid = [
        NumberInput::from(-1),
        NumberInput::from(1.5),
        NumberInput::from(10.01),
        NumberInput::from("-3"),
        NumberInput::from(f64::NAN),
        NumberInput::from("1.00000000000000000000000000000001"),
        NumberInput::from(1e-30),
    ];

    for converter in converters() {
        for input in &invalid {
            let err = converter.to_ordinal(input.clone()).unwrap_err();
            assert_matches!(err, ToWordsError::InvalidOrdinalInput { .. });
            assert_eq!(err.to_string(), "Ordinal numbers must be non-negative integers");
        }
    }
}

#[test]
fn test_unknown_locale() {
    let converter = ToWords::with_locale("en-US-wrong");
    let err = converter.convert(1).unwrap_err();
    assert!(err.to_string().contains("Unknown Locale"));
    assert_matches!(converter.locale(), Err(ToWordsError::UnknownLocale { .. }));
}

#[test]
fn test_invalid_numbers_rejected_everywhere() {
    for converter in converters() {
        for input in ["", "abc", "12abc", "1.2.3"] {
            assert_matches!(
                converter.convert(input),
                Err(ToWordsError::InvalidNumber { .. })
            );
        }
        assert_matches!(
            converter.convert(f64::INFINITY),
            Err(ToWordsError::InvalidNumber { .. })
        );
    }
}

#[test]
fn test_converters_are_shareable_across_threads() {
    let converter = std::sync::Arc::new(ToWords::with_locale("en-US"));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let converter = converter.clone();
            std::thread::spawn(move || converter.convert(i * 1000).unwrap())
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[1], "One Thousand");
    assert_eq!(results[3], "Three Thousand");
}
