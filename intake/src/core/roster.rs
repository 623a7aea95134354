//! In-memory student records for one menu session.

use std::fmt;

use crate::core::parse::format_decimal;

/// One student's record. Never mutated after it is added to a [`Roster`].
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub age: i64,
    pub grade: f64,
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Age: {}, Grade: {}",
            self.name,
            self.age,
            format_decimal(self.grade)
        )
    }
}

/// Ordered, append-only list of students.
///
/// Records are validated before insertion; the roster itself re-checks
/// nothing.
#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Arithmetic mean of all grades, `None` for an empty roster.
    pub fn average_grade(&self) -> Option<f64> {
        if self.students.is_empty() {
            return None;
        }
        let total: f64 = self.students.iter().map(|s| s.grade).sum();
        Some(total / self.students.len() as f64)
    }

    /// One line per student, numbered from 1 in insertion order.
    pub fn listing(&self) -> Vec<String> {
        self.students
            .iter()
            .enumerate()
            .map(|(idx, student)| format!("{}. {}", idx + 1, student))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, age: i64, grade: f64) -> Student {
        Student {
            name: name.to_string(),
            age,
            grade,
        }
    }

    #[test]
    fn empty_roster_has_no_average() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.average_grade(), None);
        assert!(roster.listing().is_empty());
    }

    #[test]
    fn average_is_mean_of_grades() {
        let mut roster = Roster::new();
        roster.add(student("Ana", 20, 88.5));
        roster.add(student("Ben", 22, 71.0));
        roster.add(student("Cai", 30, 90.0));
        let avg = roster.average_grade().expect("average");
        assert!((avg - (88.5 + 71.0 + 90.0) / 3.0).abs() < 1e-9);
        assert_eq!(format!("{avg:.2}"), "83.17");
    }

    #[test]
    fn listing_numbers_from_one_in_insertion_order() {
        let mut roster = Roster::new();
        roster.add(student("Ana", 20, 88.5));
        roster.add(student("Ben", 22, 90.0));
        assert_eq!(
            roster.listing(),
            vec![
                "1. Name: Ana, Age: 20, Grade: 88.5".to_string(),
                "2. Name: Ben, Age: 22, Grade: 90.0".to_string(),
            ]
        );
        assert_eq!(roster.len(), 2);
    }
}
