//! Grammatical number resolution.
//!
//! Most locales only distinguish singular (exactly one) from plural. Slavic
//! locales also use a paucal form for small counts, chosen by the last digits
//! of the quantity. The rule is configured with explicit range tables instead
//! of hard-coded modulo checks.

use serde::Deserialize;

/// Grammatical number of a counted noun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammaticalNumber {
    Singular,
    /// Small counts in Slavic locales (2-4)
    Paucal,
    Plural,
}

impl GrammaticalNumber {
    /// Classify a quantity, falling back to "one is singular" without a rule
    pub fn of(quantity: u128, rule: Option<&GrammaticalNumberRule>) -> Self {
        match rule {
            Some(rule) => rule.classify(quantity),
            None if quantity == 1 => Self::Singular,
            None => Self::Plural,
        }
    }
}

/// Inclusive `[start, end]` range as written in locale data
pub type Range = [u64; 2];

fn in_ranges(ranges: &[Range], value: u128) -> bool {
    ranges
        .iter()
        .any(|[start, end]| u128::from(*start) <= value && value <= u128::from(*end))
}

/// Range tables selecting the grammatical number of a quantity
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GrammaticalNumberRule {
    /// Divisor applied before matching `singular`/`paucal`; 0 matches the whole quantity
    pub modulus: u64,
    /// Ranges over the last two digits that always take the plural
    pub plural_teens: Vec<Range>,
    pub singular: Vec<Range>,
    pub paucal: Vec<Range>,
}

impl GrammaticalNumberRule {
    pub fn classify(&self, quantity: u128) -> GrammaticalNumber {
        if in_ranges(&self.plural_teens, quantity % 100) {
            return GrammaticalNumber::Plural;
        }

        let tail = match self.modulus {
            0 => quantity,
            modulus => quantity % u128::from(modulus),
        };

        if in_ranges(&self.singular, tail) {
            GrammaticalNumber::Singular
        } else if in_ranges(&self.paucal, tail) {
            GrammaticalNumber::Paucal
        } else {
            GrammaticalNumber::Plural
        }
    }
}
