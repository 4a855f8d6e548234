//! Number input parsing and validation
//!
//! Every accepted input shape (native integers, floats, big integers, numeric
//! strings and decimals) is normalised to a [`ParsedNumber`] before any
//! conversion work starts: a sign, a `u128` integer part and the exact
//! fractional digits. Strings are read digit by digit, so no input is rounded
//! on the way in. Invalid inputs are rejected here with the caller's original
//! rendering preserved for the error message.

use crate::error::{ToWordsError, ToWordsResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Digits in `u128::MAX`
pub const MAX_INTEGER_DIGITS: usize = 39;

/// Longest fractional part kept; any run of this many digits fits a `u128`
pub const MAX_FRACTION_DIGITS: usize = 38;

/// A number as handed to the converter
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    /// Native or big integer
    Integer(i128),
    /// Native floating point number
    Float(f64),
    /// Numeric string, possibly with thousands separators
    Text(String),
    /// Exact decimal
    Decimal(Decimal),
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for NumberInput {
                fn from(value: $ty) -> Self {
                    Self::Integer(i128::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<usize> for NumberInput {
    fn from(value: usize) -> Self {
        Self::Integer(value as i128)
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for NumberInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Decimal> for NumberInput {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl fmt::Display for NumberInput {
    /// Non-finite floats render as `NaN`, `Infinity` and `-Infinity`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            Self::Float(value) if value.is_nan() => f.write_str("NaN"),
            Self::Float(value) if value.is_infinite() => {
                f.write_str(if *value > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Self::Float(value) => write!(f, "{}", value),
            Self::Text(value) => f.write_str(value),
            Self::Decimal(value) => write!(f, "{}", value),
        }
    }
}

impl NumberInput {
    /// Normalise the input to an exact sign, integer part and fraction.
    ///
    /// Strings have every comma removed and surrounding whitespace trimmed
    /// before parsing. NaN, infinities, empty and non-numeric strings fail with
    /// [`ToWordsError::InvalidNumber`]. Finite values whose integer part does
    /// not fit a `u128`, or with more than [`MAX_FRACTION_DIGITS`] fractional
    /// digits, fail with [`ToWordsError::NumberOutOfRange`].
    pub fn clean(&self) -> ToWordsResult<ParsedNumber> {
        match self {
            Self::Integer(value) => Ok(ParsedNumber::new(
                *value < 0,
                value.unsigned_abs(),
                String::new(),
            )),
            Self::Float(value) => {
                if !value.is_finite() {
                    return Err(ToWordsError::invalid_number(self.to_string()));
                }
                // Shortest round-trip rendering, never in exponent form
                parse_numeral(&value.to_string(), 0)
                    .ok_or_else(|| ToWordsError::out_of_range(self.to_string()))
            }
            Self::Text(text) => parse_text(text),
            Self::Decimal(value) => Ok(ParsedNumber::from(*value)),
        }
    }

    /// Whether the input survives [`NumberInput::clean`]
    pub fn is_valid_number(&self) -> bool {
        self.clean().is_ok()
    }
}

/// A validated number: sign, integer part and fractional digits.
///
/// The fraction never ends in `0`, and zero is never negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedNumber {
    negative: bool,
    integer: u128,
    fraction: String,
}

impl ParsedNumber {
    pub fn new(negative: bool, integer: u128, fraction: impl Into<String>) -> Self {
        let mut fraction = fraction.into();
        let significant = fraction.trim_end_matches('0').len();
        fraction.truncate(significant);
        let negative = negative && (integer != 0 || !fraction.is_empty());

        Self {
            negative,
            integer,
            fraction,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn integer(&self) -> u128 {
        self.integer
    }

    /// Digits after the decimal point, empty for whole numbers
    pub fn fraction(&self) -> &str {
        &self.fraction
    }

    pub fn is_zero(&self) -> bool {
        self.integer == 0 && self.fraction.is_empty()
    }

    pub fn is_integer(&self) -> bool {
        self.fraction.is_empty()
    }

    /// Whether the magnitude lies in `[0, 1)`
    pub fn is_below_one(&self) -> bool {
        self.integer == 0
    }

    /// Drop the fractional part, rounding toward zero
    pub fn trunc(&self) -> Self {
        Self::new(self.negative, self.integer, String::new())
    }

    /// Round half away from zero to `places` fractional digits.
    ///
    /// Returns `None` when the carry overflows the integer part.
    pub fn round_dp(&self, places: u32) -> Option<Self> {
        let width = places as usize;
        if self.fraction.len() <= width {
            return Some(self.clone());
        }

        // Only the first dropped digit decides a half-away-from-zero result
        let kept: i64 = self.fraction[..=width].parse().ok()?;
        let rounded = Decimal::new(kept, places + 1)
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string();
        let (carry, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

        let integer = if carry == "1" {
            self.integer.checked_add(1)?
        } else {
            self.integer
        };
        Some(Self::new(self.negative, integer, fraction))
    }
}

impl From<Decimal> for ParsedNumber {
    fn from(value: Decimal) -> Self {
        let rendered = value.abs().normalize().to_string();
        let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

        // A Decimal has at most 29 integer digits
        let integer = integer.parse().unwrap_or_default();
        Self::new(value.is_sign_negative(), integer, fraction)
    }
}

impl fmt::Display for ParsedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}", self.integer)?;
        if !self.fraction.is_empty() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}

/// Parse a numeric string after stripping thousands separators
fn parse_text(original: &str) -> ToWordsResult<ParsedNumber> {
    let stripped: String = original.chars().filter(|c| *c != ',').collect();
    let text = stripped.trim();

    let (mantissa, exponent) = match text.split_once(['e', 'E']) {
        Some((mantissa, exponent)) if is_exponent(exponent) => (mantissa, Some(exponent)),
        Some(_) => return Err(ToWordsError::invalid_number(original)),
        None => (text, None),
    };

    if !is_plain_numeral(mantissa) {
        return Err(ToWordsError::invalid_number(original));
    }

    let exponent = match exponent {
        Some(exponent) => exponent
            .parse::<i32>()
            .map_err(|_| ToWordsError::out_of_range(original))?,
        None => 0,
    };

    parse_numeral(mantissa, exponent).ok_or_else(|| ToWordsError::out_of_range(original))
}

/// Optional sign, digits, at most one decimal point, at least one digit
fn is_plain_numeral(text: &str) -> bool {
    let body = text.strip_prefix(['+', '-']).unwrap_or(text);
    let mut seen_point = false;
    let mut seen_digit = false;

    for c in body.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }

    seen_digit
}

fn is_exponent(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Shift the decimal point of a plain numeral by `exponent` places.
///
/// Returns `None` when the result leaves the representable range.
fn parse_numeral(mantissa: &str, exponent: i32) -> Option<ParsedNumber> {
    let (negative, body) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let (whole, fraction) = body.split_once('.').unwrap_or((body, ""));

    let digits = format!("{}{}", whole, fraction);
    let significant = digits.trim_start_matches('0');
    // Position of the point within `significant`
    let point = whole.len() as i64 + i64::from(exponent)
        - (digits.len() - significant.len()) as i64;
    let significant = significant.trim_end_matches('0');

    if significant.is_empty() {
        return Some(ParsedNumber::default());
    }
    if point > MAX_INTEGER_DIGITS as i64 || -point > MAX_FRACTION_DIGITS as i64 {
        return None;
    }

    let (integer, fraction) = if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        (String::from("0"), format!("{}{}", zeros, significant))
    } else if point as usize >= significant.len() {
        let zeros = "0".repeat(point as usize - significant.len());
        (format!("{}{}", significant, zeros), String::new())
    } else {
        let (integer, fraction) = significant.split_at(point as usize);
        (integer.to_string(), fraction.to_string())
    };

    if fraction.len() > MAX_FRACTION_DIGITS {
        return None;
    }
    let integer = integer.parse::<u128>().ok()?;
    Some(ParsedNumber::new(negative, integer, fraction))
}
