//! Menu model for the student management loop.

use crate::core::parse::{Rejection, parse_integer};

/// Menu text printed before every choice prompt.
pub const MENU: &str = "\
===== Student Management System =====
1. Add Student
2. View Students
3. Calculate Average Grade
4. Exit";

pub const CHOICE_PROMPT: &str = "Enter your choice (1-4): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Average,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection.
    ///
    /// Non-integers and integers outside `1..=4` (of any size) get distinct
    /// messages.
    pub fn parse(raw: &str) -> Result<Self, Rejection> {
        let number = parse_integer(raw)
            .map_err(|_| Rejection::not_a_number("Please enter a valid number!"))?;
        match number.small() {
            Some(1) => Ok(MenuChoice::Add),
            Some(2) => Ok(MenuChoice::View),
            Some(3) => Ok(MenuChoice::Average),
            Some(4) => Ok(MenuChoice::Exit),
            _ => Err(Rejection::out_of_range(
                "Please choose a number between 1 and 4!",
            )),
        }
    }
}
