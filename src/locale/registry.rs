//! Locale registry
//!
//! Maps locale codes to their embedded data. Resolution is a single map
//! lookup; an unknown code is reported as [`ToWordsError::UnknownLocale`].

use super::{Locale, LocaleConfig};
use crate::error::{ToWordsError, ToWordsResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

/// Default locale code
pub const DEFAULT_LOCALE: &str = "en-IN";

const LOCALE_SOURCES: &[(&str, &str)] = &[
    ("en-AE", include_str!("../../locales/en-AE.json")),
    ("en-GB", include_str!("../../locales/en-GB.json")),
    ("en-IN", include_str!("../../locales/en-IN.json")),
    ("en-US", include_str!("../../locales/en-US.json")),
    ("es-ES", include_str!("../../locales/es-ES.json")),
    ("fa-IR", include_str!("../../locales/fa-IR.json")),
    ("fr-FR", include_str!("../../locales/fr-FR.json")),
    ("hi-IN", include_str!("../../locales/hi-IN.json")),
    ("ko-KR", include_str!("../../locales/ko-KR.json")),
    ("pt-BR", include_str!("../../locales/pt-BR.json")),
    ("ru-RU", include_str!("../../locales/ru-RU.json")),
    ("tr-TR", include_str!("../../locales/tr-TR.json")),
];

static REGISTRY: Lazy<HashMap<&'static str, LocaleDescriptor>> = Lazy::new(|| {
    LOCALE_SOURCES
        .iter()
        .map(|&(code, source)| (code, LocaleDescriptor { code, source }))
        .collect()
});

/// A registered locale that has not been instantiated yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleDescriptor {
    code: &'static str,
    source: &'static str,
}

impl LocaleDescriptor {
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Parse and validate the locale data
    pub fn instantiate(&self) -> ToWordsResult<Locale> {
        let config = LocaleConfig::from_json(self.code, self.source)?;
        debug!(locale = self.code, "instantiated locale");
        Ok(Locale {
            code: self.code,
            config,
        })
    }
}

/// Look up a locale by code
pub fn get_locale_class(code: &str) -> ToWordsResult<LocaleDescriptor> {
    REGISTRY
        .get(code)
        .copied()
        .ok_or_else(|| ToWordsError::unknown_locale(code))
}

/// All registered locale codes, sorted
pub fn available_locales() -> Vec<&'static str> {
    let mut codes: Vec<_> = REGISTRY.keys().copied().collect();
    codes.sort_unstable();
    codes
}
