//! Core conversion engine for numbers, currency amounts and ordinals

use crate::conversion::config::ConverterOptions;
use crate::conversion::decompose::Decomposer;
use crate::error::{ToWordsError, ToWordsResult};
use crate::locale::{Locale, LocaleConfig};
use crate::parser::ParsedNumber;
use tracing::trace;

/// Decimal places kept for currency minor units
const CURRENCY_PRECISION: u32 = 2;

/// Main conversion engine, bound to one locale
#[derive(Debug, Clone, Copy)]
pub struct ConversionEngine<'a> {
    code: &'a str,
    config: &'a LocaleConfig,
    decomposer: Decomposer<'a>,
}

impl<'a> ConversionEngine<'a> {
    /// Create an engine for an instantiated locale
    pub fn new(locale: &'a Locale) -> Self {
        Self::from_config(locale.code, &locale.config)
    }

    /// Create an engine over raw locale data
    pub fn from_config(code: &'a str, config: &'a LocaleConfig) -> Self {
        Self {
            code,
            config,
            decomposer: Decomposer::new(config),
        }
    }

    /// Join word tokens with the locale's separator
    pub fn join(&self, words: &[String]) -> String {
        words.join(self.config.separator())
    }

    /// Cardinal words for a (possibly negative, possibly fractional) number
    pub fn convert_number(&self, number: &ParsedNumber) -> Vec<String> {
        trace!(locale = self.code, %number, "converting number");

        let negative = number.is_negative();
        let (integer, fraction) = (number.integer(), number.fraction());
        let is_float = !fraction.is_empty();
        let ignore_zero = number.is_below_one() && self.config.ignore_zero_in_decimals;

        let mut words = self.decomposer.decompose(integer);
        if is_float && ignore_zero {
            words.clear();
        }

        let mut decimal_words = Vec::new();
        if is_float {
            if !ignore_zero {
                push_text(&mut decimal_words, &self.config.texts.point);
            }
            decimal_words.extend(self.fraction_words(fraction));
        }

        if !words.is_empty() && negative {
            prepend_text(&mut words, &self.config.texts.minus);
        }
        words.extend(decimal_words);
        words
    }

    /// Currency phrase for an amount, rounded to minor-unit precision
    pub fn convert_currency(
        &self,
        number: &ParsedNumber,
        options: &ConverterOptions,
    ) -> ToWordsResult<Vec<String>> {
        trace!(locale = self.code, %number, "converting currency");

        let currency = options
            .currency_options
            .as_ref()
            .unwrap_or(&self.config.currency);
        let rule = self.config.grammatical_number.as_ref();

        // Split after rounding so 1.999 becomes 2 rather than 1 and 100 minor units
        let number = number
            .round_dp(CURRENCY_PRECISION)
            .ok_or_else(|| ToWordsError::out_of_range(number.to_string()))?;
        let negative = number.is_negative();
        let (integer, fraction) = (number.integer(), number.fraction());

        let mut words = self.amount_words(integer, currency.agreement);
        push_text(&mut words, currency.word_for(integer, rule));

        let ignore_zero = number.is_below_one()
            && (options.is_ignore_zero_currency()
                || (self.config.ignore_zero_in_decimals && !number.is_zero()));
        if ignore_zero {
            words.clear();
        }

        let mut decimal_words = Vec::new();
        if !fraction.is_empty() {
            if !ignore_zero {
                push_text(&mut decimal_words, &self.config.texts.and);
            }

            let digits = parse_digits(fraction);
            let minor = match &self.config.decimal_speech {
                Some(_) => digits,
                None => {
                    let missing = CURRENCY_PRECISION.saturating_sub(fraction.len() as u32);
                    digits * 10u128.pow(missing)
                }
            };

            let unit = &currency.fractional_unit;
            decimal_words.extend(self.amount_words(minor, unit.agreement));
            if let Some(word) = self.length_word(fraction.len()) {
                decimal_words.push(word.to_string());
            }
            push_text(&mut decimal_words, unit.word_for(minor, rule));
        } else if self.config.decimal_speech.is_some() && !words.is_empty() {
            push_text(&mut decimal_words, &currency.fractional_unit.plural);
        }

        let is_empty = words.is_empty() && decimal_words.is_empty();
        if !is_empty && negative {
            prepend_text(&mut words, &self.config.texts.minus);
        }

        let add_only = !is_empty && !options.is_do_not_add_only();
        if add_only && !self.config.only_in_front {
            push_text(&mut decimal_words, &self.config.texts.only);
        }
        words.extend(decimal_words);
        if add_only && self.config.only_in_front {
            prepend_text(&mut words, &self.config.texts.only);
        }

        Ok(words)
    }

    /// Ordinal words for a non-negative integer
    pub fn to_ordinal(&self, number: u128) -> ToWordsResult<Vec<String>> {
        trace!(locale = self.code, %number, "converting ordinal");

        let rule = self
            .config
            .ordinal
            .as_ref()
            .ok_or_else(|| ToWordsError::ordinal_unsupported(self.code))?;

        if let Some(exact) = rule.exact(number) {
            return Ok(vec![exact.to_string()]);
        }

        let mut words = self.decomposer.decompose(number);
        rule.apply(&mut words);
        Ok(words)
    }

    /// Words for the digits after the decimal point
    fn fraction_words(&self, fraction: &str) -> Vec<String> {
        if self.config.decimal_speech.is_none() && fraction.starts_with('0') {
            // Digit by digit, so leading zeros are spoken
            return fraction
                .chars()
                .filter_map(|c| c.to_digit(10))
                .flat_map(|digit| self.decomposer.decompose(u128::from(digit)))
                .collect();
        }

        let mut words = self.decomposer.decompose(parse_digits(fraction));
        if let Some(word) = self.length_word(fraction.len()) {
            words.push(word.to_string());
        }
        words
    }

    fn length_word(&self, digits: usize) -> Option<&'a str> {
        self.config
            .decimal_speech
            .as_ref()
            .and_then(|speech| speech.length_word(digits))
    }

    /// Words for a counted amount, inflected when the unit demands agreement
    fn amount_words(&self, amount: u128, agreement: bool) -> Vec<String> {
        let mut words = self.decomposer.decompose(amount);
        if agreement {
            if let Some(rule) = &self.config.agreement {
                rule.apply(&mut words);
            }
        }
        words
    }
}

fn parse_digits(digits: &str) -> u128 {
    // Fractions hold at most 38 digits, always within u128
    digits.parse().unwrap_or_default()
}

fn push_text(words: &mut Vec<String>, text: &str) {
    if !text.is_empty() {
        words.push(text.to_string());
    }
}

fn prepend_text(words: &mut Vec<String>, text: &str) {
    if !text.is_empty() {
        words.insert(0, text.to_string());
    }
}
