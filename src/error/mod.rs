//! Error types for number-to-words conversion

/// Main error type for conversion operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ToWordsError {
    #[error("Unknown Locale \"{code}\"")]
    UnknownLocale { code: String },

    #[error("Invalid Number \"{input}\"")]
    InvalidNumber { input: String },

    #[error("Ordinal numbers must be non-negative integers")]
    InvalidOrdinalInput { input: String },

    #[error("Ordinal numbers are not supported for locale \"{locale}\"")]
    OrdinalUnsupported { locale: String },

    #[error("Number \"{input}\" is outside the supported range")]
    NumberOutOfRange { input: String },

    #[error("Invalid locale data for \"{code}\": {message}")]
    LocaleData { code: String, message: String },
}

impl ToWordsError {
    pub fn unknown_locale(code: impl Into<String>) -> Self {
        Self::UnknownLocale { code: code.into() }
    }

    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
        }
    }

    pub fn invalid_ordinal(input: impl Into<String>) -> Self {
        Self::InvalidOrdinalInput {
            input: input.into(),
        }
    }

    pub fn ordinal_unsupported(locale: impl Into<String>) -> Self {
        Self::OrdinalUnsupported {
            locale: locale.into(),
        }
    }

    pub fn out_of_range(input: impl Into<String>) -> Self {
        Self::NumberOutOfRange {
            input: input.into(),
        }
    }

    pub fn locale_data(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LocaleData {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownLocale { code } => {
                format!("Locale '{}' is not available", code)
            }
            Self::InvalidNumber { input } => {
                format!("'{}' is not a valid number", input)
            }
            Self::InvalidOrdinalInput { input } => {
                format!(
                    "Cannot build an ordinal from '{}': ordinal numbers must be non-negative integers",
                    input
                )
            }
            Self::NumberOutOfRange { input } => {
                format!("'{}' is too large to convert", input)
            }
            Self::OrdinalUnsupported { .. } | Self::LocaleData { .. } => self.to_string(),
        }
    }

    /// Whether the error was caused by the value passed in rather than by the locale
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumber { .. }
                | Self::InvalidOrdinalInput { .. }
                | Self::NumberOutOfRange { .. }
        )
    }
}

/// Result type for conversion operations
pub type ToWordsResult<T> = Result<T, ToWordsError>;
