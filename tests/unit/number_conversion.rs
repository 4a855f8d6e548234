//! Unit tests for cardinal number conversion
//!
//! Tests cover:
//! - Native integers, floats, big integers, strings and decimals
//! - Decimal fractions with and without leading zeros
//! - Option merging (ignoreDecimal)
//! - Range limits and invalid input

use assert_matches::assert_matches;
use rust_decimal_macros::dec;
use towords::{to_words, to_words_with, ConverterOptions, ToWords, ToWordsError};

#[cfg(test)]
mod number_conversion_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Default locale scenarios
    #[test]
    fn test_default_locale_scenarios() {
        assert_eq!(to_words(137).unwrap(), "One Hundred Thirty Seven");
        assert_eq!(to_words(0.04).unwrap(), "Zero Point Zero Four");
        assert_eq!(to_words(-100).unwrap(), "Minus One Hundred");
    }

    /// Every input shape yields the same words
    #[test]
    fn test_input_shapes_agree() {
        let converter = ToWords::with_locale("en-US");
        let expected = "Twelve Thousand Three Hundred Forty Five";

        assert_eq!(converter.convert(12345u32).unwrap(), expected);
        assert_eq!(converter.convert(12345i128).unwrap(), expected);
        assert_eq!(converter.convert(12345.0).unwrap(), expected);
        assert_eq!(converter.convert("12,345").unwrap(), expected);
        assert_eq!(converter.convert(" 12345 ").unwrap(), expected);
        assert_eq!(converter.convert(dec!(12345)).unwrap(), expected);
        assert_eq!(converter.convert("1.2345e4").unwrap(), expected);
    }

    /// Big integers beyond u64
    #[test]
    fn test_big_integer() {
        let converter = ToWords::with_locale("en-US");
        let words = converter.convert(10i128.pow(21)).unwrap();
        assert_eq!(words, "One Thousand Quintillion");
    }

    /// Fractions are read digit by digit only with a leading zero
    #[test]
    fn test_fraction_reading() {
        let converter = ToWords::with_locale("en-US");
        assert_eq!(converter.convert(3.14).unwrap(), "Three Point Fourteen");
        assert_eq!(converter.convert(3.014).unwrap(), "Three Point Zero One Four");
        assert_eq!(converter.convert("-0.5").unwrap(), "Minus Zero Point Five");
        assert_eq!(converter.convert("1.50").unwrap(), "One Point Five");
    }

    /// ignoreDecimal truncates before conversion
    #[test]
    fn test_ignore_decimal() {
        let options = ConverterOptions::new().with_ignore_decimal(true);
        assert_eq!(to_words_with(99.99, "en-US", &options).unwrap(), "Ninety Nine");
        assert_eq!(
            to_words_with(-42.7, "en-US", &options).unwrap(),
            "Minus Forty Two"
        );
    }

    /// Indian grouping
    #[test]
    fn test_lakh_and_crore() {
        assert_eq!(to_words(150_000).unwrap(), "One Lakh Fifty Thousand");
        assert_eq!(
            to_words(2_00_00_000).unwrap(),
            "Two Crore"
        );
        assert_eq!(
            to_words("1,00,00,00,000").unwrap(),
            "One Hundred Crore"
        );
    }

    /// Monolithic hundreds and paucal magnitudes
    #[test]
    fn test_russian_grammar() {
        let converter = ToWords::with_locale("ru-RU");
        assert_eq!(
            converter.convert(1_532_000).unwrap(),
            "Один Миллион Пятьсот Тридцать Две Тысячи"
        );
        assert_eq!(converter.convert(114_000).unwrap(), "Сто Четырнадцать Тысяч");
    }

    /// Invalid input echoes the original rendering
    #[test]
    fn test_invalid_input_messages() {
        let converter = ToWords::default();
        assert_eq!(
            converter.convert(f64::NAN).unwrap_err().to_string(),
            "Invalid Number \"NaN\""
        );
        assert_eq!(
            converter.convert(f64::INFINITY).unwrap_err().to_string(),
            "Invalid Number \"Infinity\""
        );
        assert_eq!(
            converter.convert("").unwrap_err().to_string(),
            "Invalid Number \"\""
        );
    }

    /// Integers are exact across the whole i128/u128 range
    #[test]
    fn test_integers_beyond_decimal_range() {
        let converter = ToWords::with_locale("en-US");
        let expected = "One Trillion Quintillion";

        assert_eq!(converter.convert(10i128.pow(30)).unwrap(), expected);
        assert_eq!(converter.convert(10u128.pow(30).to_string()).unwrap(), expected);
        assert_eq!(converter.convert("1e30").unwrap(), expected);
        assert_eq!(
            converter.convert(-(10i128.pow(29))).unwrap(),
            "Minus One Hundred Billion Quintillion"
        );
        assert!(converter.convert(i128::MIN).unwrap().starts_with("Minus One Hundred"));
    }

    /// Values beyond u128 or 38 decimal places are rejected, not rounded
    #[test]
    fn test_out_of_range() {
        let converter = ToWords::default();
        assert_matches!(
            converter.convert(format!("0.{}1", "0".repeat(38))),
            Err(ToWordsError::NumberOutOfRange { .. })
        );
        assert_matches!(
            converter.convert("1e40"),
            Err(ToWordsError::NumberOutOfRange { .. })
        );
    }
}
