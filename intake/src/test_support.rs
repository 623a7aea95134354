//! Test-only helpers for driving drills with scripted input.

use std::io::Cursor;

use crate::io::console::Console;

/// In-memory console type used by tests.
pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// Build a console whose input is `lines`, each terminated by a newline.
pub fn scripted(lines: &[&str]) -> ScriptedConsole {
    let mut input = String::new();
    for line in lines {
        input.push_str(line);
        input.push('\n');
    }
    Console::new(Cursor::new(input.into_bytes()), Vec::new())
}

/// Everything written to the console so far.
pub fn transcript(console: ScriptedConsole) -> String {
    String::from_utf8(console.into_output()).expect("console output is utf-8")
}
