//! Console drills for validating user input.
//!
//! Every drill follows the same shape: prompt, convert, check, and re-prompt on
//! a rejection. The crate keeps the pieces apart:
//!
//! - **[`core`]**: Pure parsing rules, the student roster and the menu model.
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: The line-oriented console and the TOML config file.
//!
//! Orchestration modules ([`prompt`], [`drills`], [`students`]) combine the two
//! to implement the CLI subcommands.

pub mod core;
pub mod drills;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod prompt;
pub mod students;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
