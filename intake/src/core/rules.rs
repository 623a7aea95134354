//! Acceptance rules for each kind of input.
//!
//! Each rule takes the raw console line and returns either the accepted value
//! or the [`Rejection`] to print before asking again.

use crate::core::parse::{Rejection, WholeNumber, parse_decimal, parse_integer};

/// Inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Accept integers strictly greater than zero, of any magnitude.
pub fn positive_integer(raw: &str) -> Result<WholeNumber, Rejection> {
    let value = parse_integer(raw)?;
    if value.is_negative() || value == WholeNumber::Small(0) {
        return Err(Rejection::out_of_range("Number must be positive!"));
    }
    Ok(value)
}

/// Grade check used by the standalone grade drill.
///
/// Distinguishes the two ends of the range in its messages.
pub fn grade(raw: &str, bounds: Bounds<f64>) -> Result<f64, Rejection> {
    let value = parse_decimal(raw)?;
    if value < bounds.min {
        if bounds.min == 0.0 {
            return Err(Rejection::out_of_range("Grade cannot be negative!"));
        }
        return Err(Rejection::out_of_range(format!(
            "Grade cannot be below {}!",
            bounds.min
        )));
    }
    if value > bounds.max {
        return Err(Rejection::out_of_range(format!(
            "Grade cannot exceed {}!",
            bounds.max
        )));
    }
    Ok(value)
}

/// Reusable age check: no negatives, nothing above `max`.
pub fn validate_age(age: i64, max: i64) -> Result<i64, Rejection> {
    if age < 0 {
        return Err(Rejection::out_of_range("Age cannot be negative!"));
    }
    if age > max {
        return Err(Rejection::out_of_range("Age seems unrealistic!"));
    }
    Ok(age)
}

/// Parse an age and apply [`validate_age`]. Beyond-`i64` values fall on the
/// matching side of the range.
pub fn age(raw: &str, max: i64) -> Result<i64, Rejection> {
    let value = parse_integer(raw)?;
    match value.small() {
        Some(age) => validate_age(age, max),
        None if value.is_negative() => Err(Rejection::out_of_range("Age cannot be negative!")),
        None => Err(Rejection::out_of_range("Age seems unrealistic!")),
    }
}

/// Student name: any non-blank text, stored trimmed.
pub fn student_name(raw: &str) -> Result<String, Rejection> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(Rejection::out_of_range("Name cannot be empty!"));
    }
    Ok(name.to_string())
}

pub fn student_age(raw: &str, bounds: Bounds<i64>) -> Result<i64, Rejection> {
    match parse_integer(raw)?.small() {
        Some(age) if bounds.contains(age) => Ok(age),
        _ => Err(Rejection::out_of_range(format!(
            "Age must be between {} and {}!",
            bounds.min, bounds.max
        ))),
    }
}

pub fn student_grade(raw: &str, bounds: Bounds<f64>) -> Result<f64, Rejection> {
    let grade = parse_decimal(raw)?;
    if !bounds.contains(grade) {
        return Err(Rejection::out_of_range(format!(
            "Grade must be between {} and {}!",
            bounds.min, bounds.max
        )));
    }
    Ok(grade)
}

/// Empty input selects `default`; anything else must be a number.
pub fn number_or_default(raw: &str, default: f64) -> Result<f64, Rejection> {
    if raw.trim().is_empty() {
        return Ok(default);
    }
    parse_decimal(raw)
}
