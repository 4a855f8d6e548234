//! Configuration options for number-to-words conversion

use crate::locale::registry::DEFAULT_LOCALE;
use crate::locale::CurrencyOptions;
use serde::Deserialize;

/// Per-call conversion options.
///
/// Every field is optional so that an unset field can fall through to the
/// next tier: global defaults < instance options < per-call options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConverterOptions {
    /// Render as a currency phrase
    pub currency: Option<bool>,
    /// Truncate to the integer part before converting
    pub ignore_decimal: Option<bool>,
    /// Drop the zero major-unit phrase ("Zero Rupees")
    pub ignore_zero_currency: Option<bool>,
    /// Omit the trailing "only" text
    pub do_not_add_only: Option<bool>,
    /// Override the locale's currency definition
    pub currency_options: Option<CurrencyOptions>,
}

impl ConverterOptions {
    /// Global defaults with every flag resolved
    pub fn defaults() -> Self {
        Self {
            currency: Some(false),
            ignore_decimal: Some(false),
            ignore_zero_currency: Some(false),
            do_not_add_only: Some(false),
            currency_options: None,
        }
    }

    /// Create empty options (everything inherited)
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for currency phrases
    pub fn currency() -> Self {
        Self::new().with_currency(true)
    }

    /// Options for plain cardinal numbers
    pub fn plain() -> Self {
        Self::new().with_currency(false)
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win
    pub fn merge(&self, overrides: &ConverterOptions) -> ConverterOptions {
        ConverterOptions {
            currency: overrides.currency.or(self.currency),
            ignore_decimal: overrides.ignore_decimal.or(self.ignore_decimal),
            ignore_zero_currency: overrides.ignore_zero_currency.or(self.ignore_zero_currency),
            do_not_add_only: overrides.do_not_add_only.or(self.do_not_add_only),
            currency_options: overrides
                .currency_options
                .clone()
                .or_else(|| self.currency_options.clone()),
        }
    }

    pub fn with_currency(mut self, enabled: bool) -> Self {
        self.currency = Some(enabled);
        self
    }

    pub fn with_ignore_decimal(mut self, enabled: bool) -> Self {
        self.ignore_decimal = Some(enabled);
        self
    }

    pub fn with_ignore_zero_currency(mut self, enabled: bool) -> Self {
        self.ignore_zero_currency = Some(enabled);
        self
    }

    pub fn with_do_not_add_only(mut self, enabled: bool) -> Self {
        self.do_not_add_only = Some(enabled);
        self
    }

    pub fn with_currency_options(mut self, currency: CurrencyOptions) -> Self {
        self.currency_options = Some(currency);
        self
    }

    pub fn is_currency(&self) -> bool {
        self.currency.unwrap_or(false)
    }

    pub fn is_ignore_decimal(&self) -> bool {
        self.ignore_decimal.unwrap_or(false)
    }

    pub fn is_ignore_zero_currency(&self) -> bool {
        self.ignore_zero_currency.unwrap_or(false)
    }

    pub fn is_do_not_add_only(&self) -> bool {
        self.do_not_add_only.unwrap_or(false)
    }
}

/// Options fixed when a converter is constructed
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToWordsOptions {
    pub locale_code: String,
    pub converter_options: ConverterOptions,
}

impl Default for ToWordsOptions {
    fn default() -> Self {
        Self {
            locale_code: DEFAULT_LOCALE.to_string(),
            converter_options: ConverterOptions::default(),
        }
    }
}

impl ToWordsOptions {
    pub fn new(locale_code: impl Into<String>) -> Self {
        Self {
            locale_code: locale_code.into(),
            ..Default::default()
        }
    }

    pub fn with_converter_options(mut self, options: ConverterOptions) -> Self {
        self.converter_options = options;
        self
    }
}
