//! Numeric conversion of console text.
//!
//! Conversions trim surrounding whitespace first, so `" 42 "` parses as `42`.
//! Failures are returned as [`Rejection::NotANumber`] carrying the message
//! shown to the user.

use std::fmt;
use std::num::IntErrorKind;

/// A recoverable validation failure.
///
/// Rejections are never fatal: the validation loop prints them and asks
/// again. `Display` yields the user-facing message without the `Error: `
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Text that does not convert to the expected numeric type.
    NotANumber(String),
    /// A converted value outside the accepted set (empty text included).
    OutOfRange(String),
}

impl Rejection {
    pub fn not_a_number(message: impl Into<String>) -> Self {
        Rejection::NotANumber(message.into())
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Rejection::OutOfRange(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Rejection::NotANumber(msg) => msg,
            Rejection::OutOfRange(msg) => msg,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A well-formed integer.
///
/// Values that fit in `i64` are kept as numbers; larger magnitudes keep their
/// canonical decimal text so they can still be range-checked and echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WholeNumber {
    Small(i64),
    /// Canonical text: no `+`, no leading zeros, `-` kept for negatives.
    Huge(String),
}

impl WholeNumber {
    pub fn small(&self) -> Option<i64> {
        match self {
            WholeNumber::Small(value) => Some(*value),
            WholeNumber::Huge(_) => None,
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            WholeNumber::Small(value) => *value < 0,
            WholeNumber::Huge(text) => text.starts_with('-'),
        }
    }
}

impl fmt::Display for WholeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WholeNumber::Small(value) => write!(f, "{value}"),
            WholeNumber::Huge(text) => f.write_str(text),
        }
    }
}

/// Parse `raw` as an integer of any size.
///
/// Only malformed text is a [`Rejection::NotANumber`]; overflowing `i64`
/// yields [`WholeNumber::Huge`] for the caller's range rule to judge.
pub fn parse_integer(raw: &str) -> Result<WholeNumber, Rejection> {
    let text = raw.trim();
    match text.parse::<i64>() {
        Ok(value) => Ok(WholeNumber::Small(value)),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Ok(WholeNumber::Huge(canonical_digits(text)))
            }
            _ => Err(Rejection::not_a_number(format!(
                "'{text}' is not a valid integer!"
            ))),
        },
    }
}

/// Strip sign and leading zeros from text already known to be a valid
/// overflowing integer.
fn canonical_digits(text: &str) -> String {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits = digits.trim_start_matches('0');
    if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    }
}

/// Parse `raw` as a decimal number.
///
/// `NaN` is refused here because it would slip through every range check.
/// Infinities parse and are left to the range rules.
pub fn parse_decimal(raw: &str) -> Result<f64, Rejection> {
    let text = raw.trim();
    match text.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(Rejection::not_a_number(format!(
            "'{text}' is not a valid number!"
        ))),
    }
}

/// Render a decimal with at least one fraction digit (`90` shows as `90.0`).
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
