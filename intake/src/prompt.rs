//! The prompt-parse-check-retry loop shared by every drill.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::core::parse::Rejection;
use crate::io::console::Console;

/// Prompt until `check` accepts a line.
///
/// Each rejection is printed as `Error: <message>` and the prompt repeats. Only
/// console failures (including end of input) end the loop early.
pub fn prompt_until<R, W, T, F>(
    console: &mut Console<R, W>,
    prompt: &str,
    mut check: F,
) -> Result<T>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> Result<T, Rejection>,
{
    loop {
        let line = console.prompt(prompt)?;
        match check(&line) {
            Ok(value) => return Ok(value),
            Err(rejection) => {
                debug!(prompt = prompt.trim_end(), input = %line, %rejection, "input rejected");
                console.say(format_args!("Error: {rejection}"))?;
            }
        }
    }
}
