// Iterator pattern: a student roster exposes traversal without exposing
// its storage.
//
// Script: a count N, then N `name id` pairs; traversal prints `name id`
// per student in insertion order.

use std::io::{self, Read};

use itertools::Itertools;

// =============================================================================
// The aggregate and its iterator
// =============================================================================

struct Student {
    name: String,
    id: String,
}

#[derive(Default)]
struct StudentRoster {
    students: Vec<Student>,
}

impl StudentRoster {
    fn add_student(&mut self, student: Student) {
        self.students.push(student);
    }

    fn iter(&self) -> RosterIter<'_> {
        RosterIter {
            students: &self.students,
            position: 0,
        }
    }
}

/// Hand-rolled cursor over the roster; the storage stays private.
struct RosterIter<'a> {
    students: &'a [Student],
    position: usize,
}

impl<'a> Iterator for RosterIter<'a> {
    type Item = &'a Student;

    fn next(&mut self) -> Option<Self::Item> {
        let student = self.students.get(self.position)?;
        self.position += 1;
        Some(student)
    }
}

impl<'a> IntoIterator for &'a StudentRoster {
    type Item = &'a Student;
    type IntoIter = RosterIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn main() {
    let mut input = String::new();
    if io::stdin().read_to_string(&mut input).is_err() {
        return;
    }

    let mut tokens = input.split_whitespace();
    let Some(count) = tokens.next().and_then(|t| t.parse::<usize>().ok()) else {
        return;
    };

    let mut roster = StudentRoster::default();
    for _ in 0..count {
        let (Some(name), Some(id)) = (tokens.next(), tokens.next()) else {
            return;
        };
        roster.add_student(Student {
            name: name.to_string(),
            id: id.to_string(),
        });
    }

    let listing = roster
        .into_iter()
        .map(|student| format!("{} {}", student.name, student.id))
        .join("\n");
    if !listing.is_empty() {
        println!("{listing}");
    }
}
