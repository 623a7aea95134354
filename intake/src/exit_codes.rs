//! Stable exit codes for intake CLI commands.

/// The drill finished (including the menu's explicit exit choice).
pub const OK: i32 = 0;
/// Bad config file, console I/O failure or other errors.
pub const INVALID: i32 = 1;
/// Standard input ended before the drill accepted a value.
pub const INPUT_CLOSED: i32 = 2;
