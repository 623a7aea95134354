//! Line-oriented console over any reader/writer pair.
//!
//! The binary wires this to stdin/stdout; tests wire it to in-memory buffers.

use std::fmt;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Standard input ended while a drill was still waiting for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("input closed before a valid value was entered")
    }
}

impl std::error::Error for InputClosed {}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` (no newline), then read one line.
    ///
    /// The line terminator is stripped; other whitespace is kept for the
    /// rules to trim. End of input is reported as [`InputClosed`].
    pub fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}").context("write prompt")?;
        self.output.flush().context("flush prompt")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("read input line")?;
        if read == 0 {
            // Terminate the dangling prompt line.
            writeln!(self.output).context("write newline")?;
            return Err(InputClosed.into());
        }
        while line.ends_with(['\n', '\r']) {
            line.pop();
        }
        Ok(line)
    }

    /// Print one line of output.
    pub fn say(&mut self, line: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{line}").context("write output")
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Console bound to the process's stdin and stdout.
pub fn stdio() -> Console<io::StdinLock<'static>, io::Stdout> {
    Console::new(io::stdin().lock(), io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_strips_line_endings_only() {
        let mut console = Console::new(Cursor::new(" 42 \r\nnext\n"), Vec::new());
        assert_eq!(console.prompt("> ").expect("line"), " 42 ");
        assert_eq!(console.prompt("> ").expect("line"), "next");
        assert_eq!(String::from_utf8_lossy(console.output()), "> > ");
    }

    #[test]
    fn prompt_reports_input_closed_at_eof() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        let err = console.prompt("> ").unwrap_err();
        assert!(err.is::<InputClosed>());
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut console = Console::new(Cursor::new("4"), Vec::new());
        assert_eq!(console.prompt("").expect("line"), "4");
    }
}
