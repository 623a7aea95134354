//! Menu-driven student management session.
//!
//! The session owns the roster for the lifetime of one run. Every invalid
//! answer is handled by re-prompting; the loop ends only on the exit choice or
//! when the console fails (end of input included).

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::core::menu::{CHOICE_PROMPT, MENU, MenuChoice};
use crate::core::roster::{Roster, Student};
use crate::core::rules;
use crate::io::config::StudentLimits;
use crate::io::console::Console;
use crate::prompt::prompt_until;

const NO_STUDENTS: &str = "No students found.";

/// Run the menu loop until the user chooses to exit.
///
/// Returns the roster as it stood at exit.
pub fn run_students<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    limits: &StudentLimits,
) -> Result<Roster> {
    let mut roster = Roster::new();
    loop {
        console.say("")?;
        console.say(MENU)?;
        let choice = prompt_until(console, CHOICE_PROMPT, MenuChoice::parse)?;
        debug!(?choice, "menu choice");
        match choice {
            MenuChoice::Add => add_student(console, limits, &mut roster)?,
            MenuChoice::View => view_students(console, &roster)?,
            MenuChoice::Average => show_average(console, &roster)?,
            MenuChoice::Exit => {
                console.say("Goodbye!")?;
                return Ok(roster);
            }
        }
    }
}

fn add_student<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    limits: &StudentLimits,
    roster: &mut Roster,
) -> Result<()> {
    let ages = limits.age_bounds();
    let grades = limits.grade_bounds();

    let name = prompt_until(console, "Enter student name: ", rules::student_name)?;
    let age = prompt_until(console, "Enter student age: ", |raw| {
        rules::student_age(raw, ages)
    })?;
    let grade = prompt_until(console, "Enter student grade: ", |raw| {
        rules::student_grade(raw, grades)
    })?;

    console.say(format_args!("Student '{name}' added successfully!"))?;
    roster.add(Student { name, age, grade });
    info!(students = roster.len(), "student added");
    Ok(())
}

fn view_students<R: BufRead, W: Write>(console: &mut Console<R, W>, roster: &Roster) -> Result<()> {
    if roster.is_empty() {
        return console.say(NO_STUDENTS);
    }
    console.say("Student List:")?;
    for line in roster.listing() {
        console.say(line)?;
    }
    Ok(())
}

fn show_average<R: BufRead, W: Write>(console: &mut Console<R, W>, roster: &Roster) -> Result<()> {
    match roster.average_grade() {
        Some(average) => console.say(format_args!("Average grade: {average:.2}")),
        None => console.say(NO_STUDENTS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::console::InputClosed;
    use crate::test_support::{scripted, transcript};

    fn limits() -> StudentLimits {
        StudentLimits::default()
    }

    #[test]
    fn add_then_view_lists_student() {
        let mut console = scripted(&["1", "Ana", "20", "88.5", "2", "4"]);
        let roster = run_students(&mut console, &limits()).expect("session");
        assert_eq!(roster.len(), 1);
        let out = transcript(console);
        assert!(out.contains("Student 'Ana' added successfully!\n"));
        assert!(out.contains("Student List:\n1. Name: Ana, Age: 20, Grade: 88.5\n"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn empty_roster_reports_no_students_for_view_and_average() {
        let mut console = scripted(&["2", "3", "4"]);
        run_students(&mut console, &limits()).expect("session");
        let out = transcript(console);
        assert_eq!(out.matches(NO_STUDENTS).count(), 2);
        assert!(!out.contains("Average grade"));
    }

    #[test]
    fn invalid_menu_input_reprompts_without_state_change() {
        let mut console = scripted(&["A", "", "5", "0", "2", "4"]);
        let roster = run_students(&mut console, &limits()).expect("session");
        assert!(roster.is_empty());
        let out = transcript(console);
        assert_eq!(out.matches("Error: Please enter a valid number!").count(), 2);
        assert_eq!(
            out.matches("Error: Please choose a number between 1 and 4!")
                .count(),
            2
        );
        assert!(out.contains(NO_STUDENTS));
    }

    #[test]
    fn add_flow_reprompts_each_field() {
        let mut console = scripted(&[
            "1", "  ", "Ben", "abc", "4", "61", "25", "ninety", "101", "-3", "90", "2", "4",
        ]);
        let roster = run_students(&mut console, &limits()).expect("session");
        assert_eq!(
            roster.students(),
            &[Student {
                name: "Ben".to_string(),
                age: 25,
                grade: 90.0,
            }]
        );
        let out = transcript(console);
        assert!(out.contains("Error: Name cannot be empty!\n"));
        assert!(out.contains("Error: 'abc' is not a valid integer!\n"));
        assert_eq!(out.matches("Error: Age must be between 5 and 60!").count(), 2);
        assert!(out.contains("Error: 'ninety' is not a valid number!\n"));
        assert_eq!(
            out.matches("Error: Grade must be between 0 and 100!")
                .count(),
            2
        );
        assert!(out.contains("1. Name: Ben, Age: 25, Grade: 90.0\n"));
    }

    #[test]
    fn average_uses_two_decimals() {
        let mut console = scripted(&[
            "1", "Ana", "20", "88.5", "1", "Ben", "21", "71", "1", "Cai", "22", "90", "3", "4",
        ]);
        let roster = run_students(&mut console, &limits()).expect("session");
        assert_eq!(roster.len(), 3);
        assert!(transcript(console).contains("Average grade: 83.17\n"));
    }

    #[test]
    fn custom_limits_apply_to_add_flow() {
        let limits = StudentLimits {
            age_min: 18,
            age_max: 25,
            ..StudentLimits::default()
        };
        let mut console = scripted(&["1", "Dee", "17", "18", "50", "4"]);
        let roster = run_students(&mut console, &limits).expect("session");
        assert_eq!(roster.students()[0].age, 18);
        assert!(transcript(console).contains("Error: Age must be between 18 and 25!\n"));
    }

    #[test]
    fn end_of_input_without_exit_is_an_error() {
        let mut console = scripted(&["1", "Ana", "20", "88.5"]);
        let err = run_students(&mut console, &limits()).unwrap_err();
        assert!(err.is::<InputClosed>());
    }
}
