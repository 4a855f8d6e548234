//! Ordinal word formation
//!
//! An ordinal is the cardinal phrase with only its last word replaced:
//! "One Hundred Twenty One" becomes "One Hundred Twenty First", and a round
//! "One Million" becomes "One Millionth". Whole-number overrides cover
//! locales where a small ordinal is unrelated to its cardinal (French
//! "Premier" versus "Vingt Et Unième").

use crate::locale::OrdinalRule;

impl OrdinalRule {
    /// Override for the whole number, if any
    pub fn exact(&self, number: u128) -> Option<&str> {
        u64::try_from(number)
            .ok()
            .and_then(|number| self.exact_numbers.get(&number))
            .map(String::as_str)
    }

    /// Ordinal form of a single cardinal word
    pub fn ordinal_word(&self, word: &str) -> String {
        if let Some(ordinal) = self.words.get(word) {
            return ordinal.clone();
        }

        for rule in &self.suffixes {
            if let Some(stem) = word.strip_suffix(rule.suffix.as_str()) {
                return format!("{}{}", stem, rule.replacement);
            }
        }

        format!("{}{}", word, self.default_suffix)
    }

    /// Rewrite the last cardinal token into its ordinal form
    pub fn apply(&self, words: &mut [String]) {
        if let Some(last) = words.last_mut() {
            *last = self.ordinal_word(last);
        }
    }
}
