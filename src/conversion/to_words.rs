//! Converter facade
//!
//! [`ToWords`] resolves its locale lazily: constructing a converter never
//! fails, and an unknown locale code surfaces on the first conversion. The
//! instantiated locale is cached for the lifetime of the converter.

use crate::conversion::config::{ConverterOptions, ToWordsOptions};
use crate::conversion::engine::ConversionEngine;
use crate::error::{ToWordsError, ToWordsResult};
use crate::locale::{get_locale_class, Locale, LocaleDescriptor};
use crate::parser::NumberInput;
use once_cell::sync::OnceCell;
use tracing::instrument;

/// Number-to-words converter bound to one locale
#[derive(Debug, Clone, Default)]
pub struct ToWords {
    options: ToWordsOptions,
    locale: OnceCell<Locale>,
}

impl ToWords {
    pub fn new(options: ToWordsOptions) -> Self {
        Self {
            options,
            locale: OnceCell::new(),
        }
    }

    /// Converter for `code` with default options
    pub fn with_locale(code: impl Into<String>) -> Self {
        Self::new(ToWordsOptions::new(code))
    }

    pub fn options(&self) -> &ToWordsOptions {
        &self.options
    }

    /// Registry entry for the configured locale code
    pub fn locale_class(&self) -> ToWordsResult<LocaleDescriptor> {
        get_locale_class(&self.options.locale_code)
    }

    /// The instantiated locale, created on first use
    pub fn locale(&self) -> ToWordsResult<&Locale> {
        self.locale
            .get_or_try_init(|| self.locale_class()?.instantiate())
    }

    /// Convert with the instance options
    pub fn convert(&self, number: impl Into<NumberInput>) -> ToWordsResult<String> {
        self.convert_with(number, &ConverterOptions::new())
    }

    /// Convert with per-call options layered over the instance options
    #[instrument(level = "trace", skip_all, fields(locale = %self.options.locale_code))]
    pub fn convert_with(
        &self,
        number: impl Into<NumberInput>,
        options: &ConverterOptions,
    ) -> ToWordsResult<String> {
        let value = number.into().clean()?;
        let options = ConverterOptions::defaults()
            .merge(&self.options.converter_options)
            .merge(options);

        let engine = ConversionEngine::new(self.locale()?);
        let value = if options.is_ignore_decimal() {
            value.trunc()
        } else {
            value
        };

        let words = if options.is_currency() {
            engine.convert_currency(&value, &options)?
        } else {
            engine.convert_number(&value)
        };
        Ok(engine.join(&words))
    }

    /// Ordinal words for a non-negative integer
    #[instrument(level = "trace", skip_all, fields(locale = %self.options.locale_code))]
    pub fn to_ordinal(&self, number: impl Into<NumberInput>) -> ToWordsResult<String> {
        let input = number.into();
        let value = input.clean().map_err(|e| match e {
            ToWordsError::InvalidNumber { input } => ToWordsError::invalid_ordinal(input),
            other => other,
        })?;

        if value.is_negative() || !value.is_integer() {
            return Err(ToWordsError::invalid_ordinal(input.to_string()));
        }

        let engine = ConversionEngine::new(self.locale()?);
        let words = engine.to_ordinal(value.integer())?;
        Ok(engine.join(&words))
    }
}
