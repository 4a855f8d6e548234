//! Magnitude decomposition
//!
//! Turns a non-negative integer into word tokens by repeatedly dividing by
//! the largest threshold of the locale's table. All locale differences
//! (lakh/crore, myriads, monolithic hundreds, plural and paucal forms) come
//! from the data, never from branches on the locale code.
//!
//! Recursion depth is bounded by the number of magnitude groups: every call
//! recurses only on a quotient or remainder strictly smaller than its input,
//! and a `u128` has at most 39 digits.

use crate::locale::{GrammaticalNumber, LocaleConfig, NumberWord, NumberWordMap};

/// Recursive threshold decomposer over one locale's tables
#[derive(Debug, Clone, Copy)]
pub struct Decomposer<'a> {
    config: &'a LocaleConfig,
}

impl<'a> Decomposer<'a> {
    pub fn new(config: &'a LocaleConfig) -> Self {
        Self { config }
    }

    /// Word tokens for `number`
    pub fn decompose(&self, number: u128) -> Vec<String> {
        let mut words = Vec::new();
        self.decompose_into(number, &mut words);
        words
    }

    fn decompose_into(&self, number: u128, words: &mut Vec<String>) {
        if let Some(exact) = self
            .config
            .exact_words_mapping
            .iter()
            .find(|entry| u128::from(entry.number) == number)
        {
            words.push(exact.value.primary().to_string());
            return;
        }

        let Some(matched) = self.find_match(number) else {
            return;
        };
        let threshold = u128::from(matched.number);

        if number <= 100 || (number < 1000 && self.config.named_less_than_1000) {
            words.push(matched.value.primary().to_string());
            let remainder = number - threshold;
            if remainder > 0 {
                if let Some(split) = self.config.split_word() {
                    words.push(split.to_string());
                }
                self.decompose_into(remainder, words);
            }
            return;
        }

        let quotient = number / threshold;
        let remainder = number % threshold;
        let magnitude = self.magnitude_word(matched, quotient);

        if quotient == 1 && self.config.ignores_one_for(&magnitude) {
            words.push(magnitude);
        } else {
            let mut quantity = self.decompose(quotient);
            if let Some(agreement) = &self.config.agreement {
                if agreement.applies_to(matched.value.primary()) {
                    agreement.apply(&mut quantity);
                }
            }
            words.extend(quantity);
            words.push(magnitude);
        }

        if remainder > 0 {
            if let Some(split) = self.config.split_word() {
                if !self.no_split_after(matched) {
                    words.push(split.to_string());
                }
            }
            self.decompose_into(remainder, words);
        }
    }

    /// First (largest) threshold not above `number`
    fn find_match(&self, number: u128) -> Option<&'a NumberWordMap> {
        self.config
            .number_words_mapping
            .iter()
            .find(|entry| u128::from(entry.number) <= number)
    }

    /// Magnitude word agreeing with its quotient
    fn magnitude_word(&self, matched: &NumberWordMap, quotient: u128) -> String {
        let number = GrammaticalNumber::of(quotient, self.config.grammatical_number.as_ref());
        let mut word = matched.value.form(number).to_string();

        if let (NumberWord::Single(base), Some(rule)) = (&matched.value, &self.config.pluralization) {
            if quotient > 1 && !rule.mark.is_empty() && rule.words.iter().any(|w| w == base) {
                word.push_str(&rule.mark);
            }
        }

        word
    }

    fn no_split_after(&self, matched: &NumberWordMap) -> bool {
        self.config.split.as_ref().is_some_and(|split| {
            split
                .no_split_word_after
                .iter()
                .any(|word| word == matched.value.primary())
        })
    }
}
