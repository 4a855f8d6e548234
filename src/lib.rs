//! Number to words converter
//!
//! Converts integers, decimals, numeric strings and currency amounts into
//! their spoken-word form for a range of locales. All locale differences
//! live in declarative data under `locales/`; one recursive decomposer
//! handles every grouping system.
//!
//! ```
//! use towords::{ConverterOptions, ToWords};
//!
//! let converter = ToWords::with_locale("en-US");
//! assert_eq!(converter.convert(137).unwrap(), "One Hundred Thirty Seven");
//! assert_eq!(
//!     converter.convert_with(2, &ConverterOptions::currency()).unwrap(),
//!     "Two Dollars Only"
//! );
//! ```

pub mod cli;
pub mod conversion;
pub mod error;
pub mod locale;
pub mod parser;
pub mod validation;

// Re-export commonly used types
pub use conversion::{ConversionEngine, ConverterOptions, ToWords, ToWordsOptions};
pub use error::{ToWordsError, ToWordsResult};
pub use locale::registry::DEFAULT_LOCALE;
pub use locale::{available_locales, get_locale_class, CurrencyOptions, Locale, LocaleConfig};
pub use parser::{NumberInput, ParsedNumber};

/// Convert a number to words with the default locale and options
pub fn to_words(number: impl Into<NumberInput>) -> ToWordsResult<String> {
    ToWords::default().convert(number)
}

/// Convert a number to words with a given locale and options
pub fn to_words_with(
    number: impl Into<NumberInput>,
    locale_code: &str,
    options: &ConverterOptions,
) -> ToWordsResult<String> {
    ToWords::with_locale(locale_code).convert_with(number, options)
}
