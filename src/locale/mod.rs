//! Declarative locale data
//!
//! A locale is pure data: word tables, connector words and a set of optional
//! capability rules. The conversion engine consults each rule independently,
//! so adding a locale never requires new code.

pub mod plural;
pub mod registry;

pub use plural::{GrammaticalNumber, GrammaticalNumberRule};
pub use registry::{available_locales, get_locale_class, LocaleDescriptor};

use crate::error::{ToWordsError, ToWordsResult};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// A word, or the grammatical forms of a word
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NumberWord {
    Single(String),
    /// `[singular, plural]` or `[singular, paucal, plural]`
    Forms(Vec<String>),
}

impl NumberWord {
    /// The singular (dictionary) form
    pub fn primary(&self) -> &str {
        match self {
            NumberWord::Single(word) => word,
            NumberWord::Forms(forms) => forms.first().map(String::as_str).unwrap_or_default(),
        }
    }

    /// The form agreeing with the given grammatical number
    pub fn form(&self, number: GrammaticalNumber) -> &str {
        match self {
            NumberWord::Single(word) => word,
            NumberWord::Forms(forms) => {
                let index = match (number, forms.len()) {
                    (GrammaticalNumber::Singular, _) => 0,
                    (GrammaticalNumber::Paucal, 3) => 1,
                    _ => forms.len().saturating_sub(1),
                };
                forms.get(index).map(String::as_str).unwrap_or_default()
            }
        }
    }
}

/// A threshold and the word naming it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NumberWordMap {
    pub number: u64,
    pub value: NumberWord,
}

/// Connector words
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocaleTexts {
    pub and: String,
    pub minus: String,
    pub only: String,
    pub point: String,
}

/// Names of a currency's minor unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrencyUnit {
    pub name: String,
    pub plural: String,
    pub singular: Option<String>,
    pub paucal: Option<String>,
    pub symbol: String,
    /// Irregular words for exact quantities
    pub number_specific_forms: BTreeMap<u64, String>,
    /// Amount words take the locale's agreement forms
    pub agreement: bool,
}

impl CurrencyUnit {
    pub fn word_for(&self, amount: u128, rule: Option<&GrammaticalNumberRule>) -> &str {
        select_unit_word(
            UnitForms {
                plural: &self.plural,
                singular: self.singular.as_deref(),
                paucal: self.paucal.as_deref(),
                specific: &self.number_specific_forms,
            },
            amount,
            rule,
        )
    }
}

/// A currency definition, either the locale's own or a caller override
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrencyOptions {
    pub name: String,
    pub plural: String,
    pub singular: Option<String>,
    pub paucal: Option<String>,
    pub symbol: String,
    pub number_specific_forms: BTreeMap<u64, String>,
    pub agreement: bool,
    pub fractional_unit: CurrencyUnit,
}

impl CurrencyOptions {
    /// Word for the major unit given the integer amount
    pub fn word_for(&self, amount: u128, rule: Option<&GrammaticalNumberRule>) -> &str {
        select_unit_word(
            UnitForms {
                plural: &self.plural,
                singular: self.singular.as_deref(),
                paucal: self.paucal.as_deref(),
                specific: &self.number_specific_forms,
            },
            amount,
            rule,
        )
    }
}

struct UnitForms<'a> {
    plural: &'a str,
    singular: Option<&'a str>,
    paucal: Option<&'a str>,
    specific: &'a BTreeMap<u64, String>,
}

fn select_unit_word<'a>(
    forms: UnitForms<'a>,
    amount: u128,
    rule: Option<&GrammaticalNumberRule>,
) -> &'a str {
    if let Some(word) = u64::try_from(amount)
        .ok()
        .and_then(|amount| forms.specific.get(&amount))
    {
        return word;
    }

    match GrammaticalNumber::of(amount, rule) {
        GrammaticalNumber::Singular => forms.singular.unwrap_or(forms.plural),
        GrammaticalNumber::Paucal => forms.paucal.unwrap_or(forms.plural),
        GrammaticalNumber::Plural => forms.plural,
    }
}

/// Conjunction inserted between number groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SplitWordRule {
    pub word: String,
    pub no_split_word_after: Vec<String>,
}

/// Suffix pluralisation of magnitude words ("Million" -> "Millions")
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PluralizationRule {
    pub mark: String,
    pub words: Vec<String>,
}

/// Replacement of a quantity's last word before certain nouns
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AgreementRule {
    pub words: Vec<String>,
    pub replacements: HashMap<String, String>,
}

impl AgreementRule {
    pub fn applies_to(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Rewrite the last word of `words` in place
    pub fn apply(&self, words: &mut [String]) {
        if let Some(last) = words.last_mut() {
            if let Some(replacement) = self.replacements.get(last.as_str()) {
                *last = replacement.clone();
            }
        }
    }
}

/// Decimals spoken as named fractions ("four hundredths")
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecimalSpeechRule {
    /// Fractional digit count -> fraction word
    pub length_words: BTreeMap<usize, String>,
}

impl DecimalSpeechRule {
    pub fn length_word(&self, digits: usize) -> Option<&str> {
        self.length_words
            .get(&digits)
            .map(String::as_str)
            .filter(|word| !word.is_empty())
    }
}

/// Ending rewrite applied to a cardinal word to form its ordinal
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuffixRule {
    pub suffix: String,
    pub replacement: String,
}

/// Ordinal forms for a locale
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrdinalRule {
    /// Whole-number overrides, checked before anything else
    pub exact_numbers: BTreeMap<u64, String>,
    /// Cardinal word -> ordinal word
    pub words: HashMap<String, String>,
    pub suffixes: Vec<SuffixRule>,
    pub default_suffix: String,
}

/// Complete configuration for one locale
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocaleConfig {
    pub currency: CurrencyOptions,
    pub texts: LocaleTexts,
    /// Sorted descending by threshold
    pub number_words_mapping: Vec<NumberWordMap>,
    pub exact_words_mapping: Vec<NumberWordMap>,
    pub split: Option<SplitWordRule>,
    pub named_less_than_1000: bool,
    pub ignore_one_for_words: Vec<String>,
    pub pluralization: Option<PluralizationRule>,
    pub grammatical_number: Option<GrammaticalNumberRule>,
    pub agreement: Option<AgreementRule>,
    pub decimal_speech: Option<DecimalSpeechRule>,
    pub ignore_zero_in_decimals: bool,
    pub only_in_front: bool,
    pub trim: bool,
    pub ordinal: Option<OrdinalRule>,
}

impl LocaleConfig {
    /// Parse and validate locale data
    pub fn from_json(code: &str, source: &str) -> ToWordsResult<Self> {
        let config: LocaleConfig = serde_json::from_str(source)
            .map_err(|e| ToWordsError::locale_data(code, e.to_string()))?;
        crate::validation::validate_locale_config(&config)
            .map_err(|message| ToWordsError::locale_data(code, message))?;
        Ok(config)
    }

    /// Separator used when joining words
    pub fn separator(&self) -> &'static str {
        if self.trim {
            ""
        } else {
            " "
        }
    }

    pub fn split_word(&self) -> Option<&str> {
        self.split
            .as_ref()
            .map(|split| split.word.as_str())
            .filter(|word| !word.is_empty())
    }

    pub fn ignores_one_for(&self, word: &str) -> bool {
        self.ignore_one_for_words.iter().any(|w| w == word)
    }
}

/// An instantiated locale
#[derive(Debug, Clone, PartialEq)]
pub struct Locale {
    pub code: &'static str,
    pub config: LocaleConfig,
}
