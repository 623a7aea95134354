//! Standalone validation drills: one prompt, one accepted value.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{info, warn};

use crate::core::parse::{WholeNumber, format_decimal, parse_integer};
use crate::core::rules::{self, Bounds};
use crate::io::console::Console;
use crate::prompt::prompt_until;

/// Ask until a positive integer is entered.
pub fn get_positive_integer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<WholeNumber> {
    let value = prompt_until(console, "Enter a positive integer: ", rules::positive_integer)?;
    console.say(format_args!("You entered: {value}"))?;
    Ok(value)
}

/// Ask until a grade inside `bounds` is entered.
pub fn get_student_grade<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    bounds: Bounds<f64>,
) -> Result<f64> {
    let prompt = format!("Enter student grade ({}-{}): ", bounds.min, bounds.max);
    let grade = prompt_until(console, &prompt, |raw| rules::grade(raw, bounds))?;
    console.say(format_args!("Valid grade: {}", format_decimal(grade)))?;
    Ok(grade)
}

/// Ask until an age passes [`rules::validate_age`].
pub fn get_age<R: BufRead, W: Write>(console: &mut Console<R, W>, max_age: i64) -> Result<i64> {
    let age = prompt_until(console, "Enter your age: ", |raw| rules::age(raw, max_age))?;
    console.say(format_args!("Valid age: {age}"))?;
    Ok(age)
}

/// Ask for a number, falling back to `default` on an empty line.
pub fn get_number<R: BufRead, W: Write>(console: &mut Console<R, W>, default: f64) -> Result<f64> {
    let prompt = format!("Enter a number [default: {default}]: ");
    let number = prompt_until(console, &prompt, |raw| {
        rules::number_or_default(raw, default)
    })?;
    console.say(format_args!("Number: {}", format_decimal(number)))?;
    Ok(number)
}

/// Single attempt at reading an age.
///
/// A conversion failure is logged at warning level and reported once; there is
/// no retry. Returns `None` in that case.
pub fn log_age<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<WholeNumber>> {
    let raw = console.prompt("Enter your age: ")?;
    match parse_integer(&raw) {
        Ok(age) => {
            info!(%age, "age accepted");
            console.say(format_args!("Age entered: {age}"))?;
            Ok(Some(age))
        }
        Err(_) => {
            warn!(input = %raw.trim(), "invalid age input");
            console.say("Invalid input! Age must be a number.")?;
            Ok(None)
        }
    }
}
