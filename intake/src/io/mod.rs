//! I/O helpers for intake commands.

pub mod config;
pub mod console;
