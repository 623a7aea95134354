//! Deterministic, pure logic behind the drills.
//!
//! Core modules must be free of I/O side effects. They turn raw text into
//! accepted values or [`parse::Rejection`]s and keep the in-memory roster.

pub mod menu;
pub mod parse;
pub mod roster;
pub mod rules;
