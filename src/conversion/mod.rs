//! Number to words conversion
//!
//! This module contains the decomposer, the conversion engine, option
//! handling and the `ToWords` facade.

pub mod config;
pub mod decompose;
pub mod engine;
pub mod ordinal;
pub mod to_words;

pub use config::{ConverterOptions, ToWordsOptions};
pub use decompose::Decomposer;
pub use engine::ConversionEngine;
pub use to_words::ToWords;
