//! Locale data validation
//!
//! The decomposer relies on a few structural guarantees of the threshold
//! table. They are checked once, when a locale is instantiated.

use crate::locale::{LocaleConfig, NumberWord, NumberWordMap};

/// Validate locale data consistency
pub fn validate_locale_config(config: &LocaleConfig) -> Result<(), String> {
    let mapping = &config.number_words_mapping;

    if mapping.is_empty() {
        return Err("numberWordsMapping must not be empty".to_string());
    }

    if let Some(pair) = mapping.windows(2).find(|pair| pair[0].number <= pair[1].number) {
        return Err(format!(
            "numberWordsMapping must be sorted descending: {} is followed by {}",
            pair[0].number, pair[1].number
        ));
    }

    // Every positive integer must match an entry and shrink on subtraction
    if !mapping.iter().any(|entry| entry.number == 1) {
        return Err("numberWordsMapping must contain an entry for 1".to_string());
    }

    if let Some(last) = mapping.last() {
        if last.number > 1 {
            return Err(format!(
                "numberWordsMapping must end at 0 or 1, found {}",
                last.number
            ));
        }
    }

    for entry in mapping.iter().chain(&config.exact_words_mapping) {
        validate_word(entry)?;
    }

    if let Some(entry) = config
        .exact_words_mapping
        .iter()
        .find(|entry| matches!(entry.value, NumberWord::Forms(_)))
    {
        return Err(format!(
            "exactWordsMapping entry {} must be a single word",
            entry.number
        ));
    }

    Ok(())
}

fn validate_word(entry: &NumberWordMap) -> Result<(), String> {
    match &entry.value {
        NumberWord::Single(word) if word.is_empty() => {
            Err(format!("entry {} has an empty word", entry.number))
        }
        NumberWord::Forms(forms) if forms.is_empty() || forms.len() > 3 => Err(format!(
            "entry {} must have 1 to 3 word forms, found {}",
            entry.number,
            forms.len()
        )),
        _ => Ok(()),
    }
}
