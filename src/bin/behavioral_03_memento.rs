// Memento pattern: a counter snapshots its state before every mutation so
// the caretaker stacks can restore it on undo/redo.
//
// Script: operations (`Increment`, `Decrement`, `Undo`, `Redo`) until end
// of input; the counter value is printed after every operation.

use std::io::{self, Read};

// =============================================================================
// Memento and originator
// =============================================================================

/// An opaque snapshot; only the counter reads it back.
struct Memento {
    value: i64,
}

#[derive(Default)]
struct Counter {
    value: i64,
    undo_stack: Vec<Memento>,
    redo_stack: Vec<Memento>,
}

impl Counter {
    fn value(&self) -> i64 {
        self.value
    }

    fn increment(&mut self) {
        self.redo_stack.clear();
        self.undo_stack.push(Memento { value: self.value });
        self.value += 1;
    }

    fn decrement(&mut self) {
        self.redo_stack.clear();
        self.undo_stack.push(Memento { value: self.value });
        self.value -= 1;
    }

    fn undo(&mut self) {
        if let Some(snapshot) = self.undo_stack.pop() {
            self.redo_stack.push(Memento { value: self.value });
            self.value = snapshot.value;
        }
    }

    fn redo(&mut self) {
        if let Some(snapshot) = self.redo_stack.pop() {
            self.undo_stack.push(Memento { value: self.value });
            self.value = snapshot.value;
        }
    }

    /// Unrecognized operations change nothing; the caller still reports
    /// the unchanged value.
    fn apply(&mut self, operation: &str) {
        match operation {
            "Increment" => self.increment(),
            "Decrement" => self.decrement(),
            "Undo" => self.undo(),
            "Redo" => self.redo(),
            _ => {}
        }
    }
}

fn main() {
    let mut input = String::new();
    if io::stdin().read_to_string(&mut input).is_err() {
        return;
    }

    let mut counter = Counter::default();
    for operation in input.split_whitespace() {
        counter.apply(operation);
        println!("{}", counter.value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(counter: &mut Counter, ops: &[&str]) -> Vec<i64> {
        ops.iter()
            .map(|op| {
                counter.apply(op);
                counter.value()
            })
            .collect()
    }

    #[test]
    fn undo_restores_the_previous_value() {
        let mut counter = Counter::default();
        let values = apply_all(&mut counter, &["Increment", "Increment", "Undo"]);
        assert_eq!(values, vec![1, 2, 1]);
    }

    #[test]
    fn redo_replays_an_undone_operation() {
        let mut counter = Counter::default();
        let values = apply_all(&mut counter, &["Increment", "Undo", "Redo"]);
        assert_eq!(values, vec![1, 0, 1]);
    }

    #[test]
    fn a_fresh_mutation_clears_the_redo_stack() {
        let mut counter = Counter::default();
        let values = apply_all(
            &mut counter,
            &["Increment", "Undo", "Decrement", "Redo"],
        );
        // Redo has nothing to replay after the Decrement
        assert_eq!(values, vec![1, 0, -1, -1]);
    }

    #[test]
    fn undo_and_redo_on_empty_stacks_are_no_ops() {
        let mut counter = Counter::default();
        let values = apply_all(&mut counter, &["Undo", "Redo"]);
        assert_eq!(values, vec![0, 0]);
    }

    #[test]
    fn unknown_operations_change_nothing() {
        let mut counter = Counter::default();
        let values = apply_all(&mut counter, &["Increment", "Reset"]);
        assert_eq!(values, vec![1, 1]);
    }
}
